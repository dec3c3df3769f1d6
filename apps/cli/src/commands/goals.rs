use anyhow::bail;

use fintrack_core::forms::FormState;
use fintrack_core::goals::{FinancialGoal, GoalDraft, GoalServiceTrait};
use fintrack_core::models::RecordStatus;
use fintrack_core::utils::time_utils::local_today;

use crate::app::App;
use crate::output::{date, money, percent, row, table};

async fn find_goal(app: &App, id: i64) -> anyhow::Result<FinancialGoal> {
    let goals = app.goals.load_goals().await?;
    match goals.into_iter().find(|goal| goal.id == id) {
        Some(goal) => Ok(goal),
        None => bail!("No goal with id {}", id),
    }
}

pub async fn list(app: &App) -> anyhow::Result<()> {
    let today = local_today();
    let goals = app.goals.load_goals().await?;

    let mut out = table(&[
        "ID", "Name", "Target", "Saved", "Progress", "Remaining", "Target date", "Days left",
        "Status",
    ]);
    for goal in &goals {
        out.add_row(row([
            goal.id.to_string(),
            goal.name.clone(),
            money(goal.target_amount),
            money(goal.current_progress),
            percent(goal.progress_percent()),
            money(goal.remaining_amount()),
            date(goal.target_date),
            goal.days_remaining(today)
                .map(|days| days.to_string())
                .unwrap_or_else(|| "-".to_string()),
            if goal.is_complete() {
                "Reached".to_string()
            } else {
                goal.status.to_string()
            },
        ]));
    }
    println!("Goals\n{out}");
    Ok(())
}

pub async fn add(
    app: &App,
    name: String,
    target_amount: String,
    target_date: String,
    initial_progress: String,
) -> anyhow::Result<()> {
    let mut form = FormState::create(GoalDraft {
        name,
        target_amount,
        target_date,
        initial_progress,
        status: RecordStatus::Active,
    });
    app.goals.save_goal(&mut form, &app.ctx()).await?;
    Ok(())
}

pub async fn edit(
    app: &App,
    id: i64,
    name: Option<String>,
    target_amount: Option<String>,
    target_date: Option<String>,
) -> anyhow::Result<()> {
    let goal = find_goal(app, id).await?;
    let mut draft = GoalDraft::from_goal(&goal);
    if let Some(name) = name {
        draft.name = name;
    }
    if let Some(target_amount) = target_amount {
        draft.target_amount = target_amount;
    }
    if let Some(target_date) = target_date {
        draft.target_date = target_date;
    }
    let mut form = FormState::edit(id, draft, GoalDraft::default());
    app.goals.save_goal(&mut form, &app.ctx()).await?;
    Ok(())
}

pub async fn progress(app: &App, id: i64, amount: &str) -> anyhow::Result<()> {
    let goal = find_goal(app, id).await?;
    app.goals.update_progress(&goal, amount).await?;
    Ok(())
}

pub async fn complete(app: &App, id: i64) -> anyhow::Result<()> {
    let goal = find_goal(app, id).await?;
    app.goals.mark_complete(&goal).await?;
    Ok(())
}

pub async fn deactivate(app: &App, id: i64) -> anyhow::Result<()> {
    let goal = find_goal(app, id).await?;
    app.goals.deactivate(&goal).await?;
    Ok(())
}
