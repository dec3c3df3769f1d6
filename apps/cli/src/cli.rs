use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Track income, expenses, goals, wishes and task budgets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and remember the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the current session.
    Logout,
    /// Show who is logged in.
    Whoami,
    /// Create an account.
    Register {
        #[arg(long = "name")]
        user_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Repeat of the password
        #[arg(long)]
        confirm: String,
    },
    /// Ask for a password reset email.
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Set a new password using the emailed token.
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
    },
    /// Income and expense transactions.
    Tx {
        #[command(subcommand)]
        command: TxCommands,
    },
    /// Financial goals.
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Wish list.
    Wish {
        #[command(subcommand)]
        command: WishCommands,
    },
    /// Task budgets and their items.
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}

/// Dashboard filters shared by `tx list` and `tx summary`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// all, income or expense
    #[arg(long = "type", default_value = "all")]
    pub type_filter: String,
    /// Case-insensitive text matched against name, category, note, type and status
    #[arg(long)]
    pub search: Option<String>,
    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
    /// last-week, last-month, last-six-months or last-year; overrides --from/--to
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub preset: Option<String>,
    /// Show removed transactions instead of active ones
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Subcommand)]
pub enum TxCommands {
    /// List transactions matching the filters.
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Add a transaction.
    Add {
        /// income or expense
        #[arg(long = "type")]
        transaction_type: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: String,
        /// Date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        category: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Change fields of an existing transaction.
    Edit {
        id: i64,
        #[arg(long = "type")]
        transaction_type: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove a transaction (it moves to the inactive list).
    Remove { id: i64 },
    /// Totals, percentages and category breakdown of the filtered list.
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
        /// Also show the totals computed by the backend for the same period
        #[arg(long)]
        remote: bool,
    },
    /// Categories offered for a transaction type.
    Categories {
        #[arg(long = "type", default_value = "expense")]
        transaction_type: String,
    },
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// List goals with their progress.
    List,
    /// Add a goal.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        target: String,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "0")]
        progress: String,
    },
    /// Change the name, target or date of a goal.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Set the saved amount of a goal (never lower than before).
    Progress { id: i64, amount: String },
    /// Mark a goal as reached.
    Complete { id: i64 },
    /// Set a goal inactive.
    Deactivate { id: i64 },
}

#[derive(Subcommand)]
pub enum WishCommands {
    /// List active and completed wishes.
    List,
    /// Add a wish.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cost: String,
        /// Low, Medium or High
        #[arg(long, default_value = "Medium")]
        priority: String,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Mark a wish as fulfilled.
    Complete { id: i64 },
    /// Remove a wish from the active list.
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks with their budget usage.
    List,
    /// Show one task and its items.
    Show { id: i64 },
    /// Add a task.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        #[arg(long)]
        budget: Option<String>,
    },
    /// Change fields of an existing task.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        /// Empty string clears the budget
        #[arg(long)]
        budget: Option<String>,
    },
    /// Delete a task and its items.
    Remove { id: i64 },
    /// Add an item to a task.
    ItemAdd {
        task_id: i64,
        #[arg(long)]
        name: String,
        /// Supplies, Food, Travel, Tools or Misc
        #[arg(long, default_value = "Misc")]
        category: String,
        #[arg(long)]
        cost: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Change fields of a task item.
    ItemEdit {
        task_id: i64,
        item_id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        cost: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a task item.
    ItemRemove { task_id: i64, item_id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_nested_subcommands_parse() {
        let cli = Cli::parse_from([
            "fintrack", "tx", "list", "--type", "income", "--search", "food", "--inactive",
        ]);
        match cli.command {
            Commands::Tx {
                command: TxCommands::List { filter },
            } => {
                assert_eq!(filter.type_filter, "income");
                assert_eq!(filter.search.as_deref(), Some("food"));
                assert!(filter.inactive);
            }
            _ => panic!("expected tx list"),
        }

        let cli = Cli::parse_from(["fintrack", "task", "item-remove", "3", "8"]);
        assert!(matches!(
            cli.command,
            Commands::Task {
                command: TaskCommands::ItemRemove {
                    task_id: 3,
                    item_id: 8
                }
            }
        ));
    }

    #[test]
    fn test_preset_conflicts_with_explicit_dates() {
        let result = Cli::try_parse_from([
            "fintrack", "tx", "summary", "--preset", "last-week", "--from", "2024-01-01",
        ]);
        assert!(result.is_err());
    }
}
