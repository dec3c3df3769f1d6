pub mod account;
pub mod goals;
pub mod tasks;
pub mod transactions;
pub mod wishes;

use crate::app::App;
use crate::cli::{Commands, GoalCommands, TaskCommands, TxCommands, WishCommands};

pub async fn run(command: Commands, app: &App) -> anyhow::Result<()> {
    match command {
        Commands::Login { email, password } => account::login(app, email, password).await,
        Commands::Logout => account::logout(app),
        Commands::Whoami => account::whoami(app),
        Commands::Register {
            user_name,
            email,
            password,
            confirm,
        } => account::register(app, user_name, email, password, confirm).await,
        Commands::ForgotPassword { email } => account::forgot_password(app, &email).await,
        Commands::ResetPassword { token, password } => {
            account::reset_password(app, token, password).await
        }
        Commands::Tx { command } => match command {
            TxCommands::List { filter } => transactions::list(app, &filter).await,
            TxCommands::Add {
                transaction_type,
                name,
                amount,
                date,
                category,
                note,
            } => {
                transactions::add(
                    app,
                    transactions::TxFields {
                        transaction_type: Some(transaction_type),
                        name: Some(name),
                        amount: Some(amount),
                        date,
                        category: Some(category),
                        note,
                    },
                )
                .await
            }
            TxCommands::Edit {
                id,
                transaction_type,
                name,
                amount,
                date,
                category,
                note,
            } => {
                transactions::edit(
                    app,
                    id,
                    transactions::TxFields {
                        transaction_type,
                        name,
                        amount,
                        date,
                        category,
                        note,
                    },
                )
                .await
            }
            TxCommands::Remove { id } => transactions::remove(app, id).await,
            TxCommands::Summary { filter, remote } => {
                transactions::summary(app, &filter, remote).await
            }
            TxCommands::Categories { transaction_type } => {
                transactions::categories(app, &transaction_type).await
            }
        },
        Commands::Goal { command } => match command {
            GoalCommands::List => goals::list(app).await,
            GoalCommands::Add {
                name,
                target,
                date,
                progress,
            } => goals::add(app, name, target, date, progress).await,
            GoalCommands::Edit {
                id,
                name,
                target,
                date,
            } => goals::edit(app, id, name, target, date).await,
            GoalCommands::Progress { id, amount } => goals::progress(app, id, &amount).await,
            GoalCommands::Complete { id } => goals::complete(app, id).await,
            GoalCommands::Deactivate { id } => goals::deactivate(app, id).await,
        },
        Commands::Wish { command } => match command {
            WishCommands::List => wishes::list(app).await,
            WishCommands::Add {
                name,
                cost,
                priority,
                date,
            } => wishes::add(app, name, cost, &priority, date).await,
            WishCommands::Complete { id } => wishes::complete(app, id).await,
            WishCommands::Delete { id } => wishes::delete(app, id).await,
        },
        Commands::Task { command } => match command {
            TaskCommands::List => tasks::list(app).await,
            TaskCommands::Show { id } => tasks::show(app, id).await,
            TaskCommands::Add {
                name,
                description,
                start,
                end,
                budget,
            } => {
                tasks::add(
                    app,
                    tasks::TaskFields {
                        name: Some(name),
                        description: Some(description),
                        start: Some(start),
                        end: Some(end),
                        budget,
                    },
                )
                .await
            }
            TaskCommands::Edit {
                id,
                name,
                description,
                start,
                end,
                budget,
            } => {
                tasks::edit(
                    app,
                    id,
                    tasks::TaskFields {
                        name,
                        description,
                        start,
                        end,
                        budget,
                    },
                )
                .await
            }
            TaskCommands::Remove { id } => tasks::remove(app, id).await,
            TaskCommands::ItemAdd {
                task_id,
                name,
                category,
                cost,
                notes,
            } => {
                tasks::save_item(
                    app,
                    task_id,
                    None,
                    tasks::ItemFields {
                        name: Some(name),
                        category: Some(category),
                        cost: Some(cost),
                        notes,
                    },
                )
                .await
            }
            TaskCommands::ItemEdit {
                task_id,
                item_id,
                name,
                category,
                cost,
                notes,
            } => {
                tasks::save_item(
                    app,
                    task_id,
                    Some(item_id),
                    tasks::ItemFields {
                        name,
                        category,
                        cost,
                        notes,
                    },
                )
                .await
            }
            TaskCommands::ItemRemove { task_id, item_id } => {
                tasks::remove_item(app, task_id, item_id).await
            }
        },
    }
}
