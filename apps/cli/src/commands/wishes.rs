use anyhow::bail;

use fintrack_core::forms::FormState;
use fintrack_core::wishes::{Priority, Wish, WishDraft, WishServiceTrait};

use crate::app::App;
use crate::output::{date, money, row, table};

async fn find_wish(app: &App, id: i64) -> anyhow::Result<Wish> {
    let wishes = app.wishes.load_wishes().await?;
    match wishes.active.into_iter().find(|wish| wish.id == id) {
        Some(wish) => Ok(wish),
        None => bail!("No active wish with id {}", id),
    }
}

fn wish_table(wishes: &[Wish]) -> comfy_table::Table {
    let mut out = table(&["ID", "Item", "Cost", "Priority", "Target date"]);
    for wish in wishes {
        out.add_row(row([
            wish.id.to_string(),
            wish.item_name.clone(),
            money(wish.estimated_cost),
            wish.priority.to_string(),
            date(wish.target_date),
        ]));
    }
    out
}

pub async fn list(app: &App) -> anyhow::Result<()> {
    let wishes = app.wishes.load_wishes().await?;
    println!("Wishes\n{}", wish_table(&wishes.active));
    println!(
        "Total estimated cost: {}",
        money(wishes.total_estimated_cost)
    );
    if !wishes.completed.is_empty() {
        println!("Fulfilled\n{}", wish_table(&wishes.completed));
    }
    Ok(())
}

pub async fn add(
    app: &App,
    item_name: String,
    estimated_cost: String,
    priority: &str,
    target_date: Option<String>,
) -> anyhow::Result<()> {
    let priority = priority.parse::<Priority>().map_err(anyhow::Error::msg)?;
    let mut form = FormState::create(WishDraft {
        item_name,
        estimated_cost,
        priority,
        target_date: target_date.unwrap_or_default(),
    });
    app.wishes.add_wish(&mut form, &app.ctx()).await?;
    Ok(())
}

pub async fn complete(app: &App, id: i64) -> anyhow::Result<()> {
    let wish = find_wish(app, id).await?;
    app.wishes.complete(&wish).await?;
    Ok(())
}

pub async fn delete(app: &App, id: i64) -> anyhow::Result<()> {
    let wish = find_wish(app, id).await?;
    app.wishes.deactivate(&wish).await?;
    Ok(())
}
