/// Decimal precision for percentage shares shown on the dashboard
pub const PERCENT_DECIMAL_PRECISION: u32 = 1;

/// Decimal precision for display of money amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Transaction name length bounds (inclusive)
pub const TRANSACTION_NAME_MIN_LEN: usize = 3;
pub const TRANSACTION_NAME_MAX_LEN: usize = 50;

/// Maximum transaction note length
pub const TRANSACTION_NOTE_MAX_LEN: usize = 200;

/// Minimum password length accepted by the login form
pub const PASSWORD_MIN_LEN: usize = 6;

/// Email domains accepted by the login form
pub const ALLOWED_EMAIL_DOMAINS: [&str; 3] = ["gmail.com", "yahoo.com", "outlook.com"];

/// Characters that count as "special" in a password
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Delay before a form closes after a successful submit, in milliseconds.
/// Cosmetic only; nothing waits on it for correctness.
pub const FORM_CLOSE_DELAY_MS: u64 = 600;

/// Income categories offered when the backend catalog is empty
pub const DEFAULT_INCOME_CATEGORIES: [&str; 2] = ["SALARY", "MY OWN"];

/// Expense categories offered when the backend catalog is empty
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 9] = [
    "FOOD",
    "MEDICATION",
    "TRANSPORT",
    "TAXES",
    "EDUCATION",
    "BILLS",
    "ENTERTAINMENT",
    "REPAIRS",
    "CHARITY",
];
