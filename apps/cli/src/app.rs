use std::sync::Arc;

use fintrack_connect::{FileSessionStore, FintrackApiClient};
use fintrack_core::forms::{Notifier, ValidationContext};
use fintrack_core::goals::GoalService;
use fintrack_core::session::SessionStore;
use fintrack_core::task_budget::TaskBudgetService;
use fintrack_core::transactions::TransactionService;
use fintrack_core::users::UserService;
use fintrack_core::wishes::WishService;

use crate::config::Config;
use crate::notifier::ConsoleNotifier;

/// Services wired to one HTTP client and the on-disk session.
pub struct App {
    pub transactions: TransactionService,
    pub goals: GoalService,
    pub wishes: WishService,
    pub tasks: TaskBudgetService,
    pub users: UserService,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let sessions: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_file.clone()));
        let client = Arc::new(FintrackApiClient::new(config.api_config(), sessions.clone())?);
        let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

        tracing::debug!("Session file: {}", config.session_file.display());

        Ok(Self {
            transactions: TransactionService::new(client.clone(), notifier.clone()),
            goals: GoalService::new(client.clone(), notifier.clone()),
            wishes: WishService::new(client.clone(), notifier.clone()),
            tasks: TaskBudgetService::new(client.clone(), notifier.clone()),
            users: UserService::new(client, sessions, notifier),
        })
    }

    pub fn ctx(&self) -> ValidationContext {
        ValidationContext::now()
    }
}
