//! MenuChoice - Options offered by the main menu

/// Main menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterPatron,
    DisplaySales,
    Exit,
    Unknown(i32),
}

impl MenuChoice {
    /// Lines printed under the main menu banner
    pub const OPTIONS: [&'static str; 3] = [
        "1. Register Patron and Take Order",
        "2. Display Total Sales",
        "3. Exit",
    ];
}

impl From<i32> for MenuChoice {
    fn from(value: i32) -> Self {
        match value {
            1 => MenuChoice::RegisterPatron,
            2 => MenuChoice::DisplaySales,
            3 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        }
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuChoice::RegisterPatron => write!(f, "register_patron"),
            MenuChoice::DisplaySales => write!(f, "display_sales"),
            MenuChoice::Exit => write!(f, "exit"),
            MenuChoice::Unknown(n) => write!(f, "unknown:{}", n),
        }
    }
}
