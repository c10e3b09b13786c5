//! RetryPolicy - How many malformed answers a prompt tolerates

/// Retry policy for console prompts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Keep asking until a valid answer arrives
    #[default]
    Unbounded,
    /// Give up after this many rejected answers
    Limited(u32),
}

impl RetryPolicy {
    /// Whether another attempt is allowed after `failures` rejected answers
    pub fn allows_retry(&self, failures: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Limited(max) => failures < *max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_always_retries() {
        assert!(RetryPolicy::Unbounded.allows_retry(0));
        assert!(RetryPolicy::Unbounded.allows_retry(u32::MAX));
    }

    #[test]
    fn test_limited_stops_at_max() {
        let policy = RetryPolicy::Limited(2);
        assert!(policy.allows_retry(1));
        assert!(!policy.allows_retry(2));
    }
}
