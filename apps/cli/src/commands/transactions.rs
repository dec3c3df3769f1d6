use anyhow::{anyhow, bail};
use chrono::NaiveDate;

use fintrack_core::dashboard::{DashboardState, DateRange, RangePreset, TypeFilter};
use fintrack_core::forms::FormState;
use fintrack_core::transactions::{TransactionDraft, TransactionServiceTrait, TransactionType};
use fintrack_core::utils::time_utils::{local_today, parse_flexible_date};

use crate::app::App;
use crate::cli::FilterArgs;
use crate::output::{date, money, percent, row, table};

/// Field values given on the command line; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct TxFields {
    pub transaction_type: Option<String>,
    pub name: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
}

impl TxFields {
    fn apply_to(self, draft: &mut TransactionDraft) {
        if let Some(raw) = self.transaction_type {
            draft.transaction_type = TransactionType::parse(&raw);
        }
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(amount) = self.amount {
            draft.amount = amount;
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(note) = self.note {
            draft.note = note;
        }
    }
}

fn parse_date_arg(raw: Option<&str>, flag: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| {
        parse_flexible_date(value)
            .ok_or_else(|| anyhow!("{} expects a date like 2024-01-31, got '{}'", flag, value))
    })
    .transpose()
}

/// Builds dashboard state from the filter flags. Nothing is loaded yet.
pub fn dashboard_state(filter: &FilterArgs) -> anyhow::Result<DashboardState> {
    let mut state = DashboardState::new();
    state.set_type_filter(
        filter
            .type_filter
            .parse::<TypeFilter>()
            .map_err(anyhow::Error::msg)?,
    );
    if let Some(search) = &filter.search {
        state.set_search(search.clone());
    }
    match &filter.preset {
        Some(preset) => {
            let preset = preset.parse::<RangePreset>().map_err(anyhow::Error::msg)?;
            state.apply_preset(preset, local_today());
        }
        None => state.set_range(DateRange::new(
            parse_date_arg(filter.from.as_deref(), "--from")?,
            parse_date_arg(filter.to.as_deref(), "--to")?,
        )),
    }
    state.set_show_inactive(filter.inactive);
    Ok(state)
}

pub async fn list(app: &App, filter: &FilterArgs) -> anyhow::Result<()> {
    let mut state = dashboard_state(filter)?;
    state.reload(&app.transactions).await?;
    let shown = state.filtered();

    let mut out = table(&[
        "ID", "Date", "Type", "Name", "Category", "Amount", "Note", "Status",
    ]);
    for tx in &shown {
        out.add_row(row([
            tx.id.to_string(),
            date(tx.date),
            tx.transaction_type.to_string(),
            tx.name.clone(),
            tx.category.clone(),
            money(tx.amount),
            tx.note.clone().unwrap_or_default(),
            tx.status.to_string(),
        ]));
    }
    let heading = if state.show_inactive() {
        "Removed transactions"
    } else {
        "Transactions"
    };
    println!("{heading}\n{out}");
    println!("{} of {} shown", shown.len(), state.transactions().len());
    Ok(())
}

pub async fn add(app: &App, fields: TxFields) -> anyhow::Result<()> {
    let mut draft = TransactionDraft {
        date: local_today().format("%Y-%m-%d").to_string(),
        ..TransactionDraft::default()
    };
    fields.apply_to(&mut draft);
    let mut form = FormState::create(draft);
    app.transactions.save_transaction(&mut form, &app.ctx()).await?;
    Ok(())
}

pub async fn edit(app: &App, id: i64, fields: TxFields) -> anyhow::Result<()> {
    let existing = app.transactions.load_transactions(false).await?;
    let Some(tx) = existing.iter().find(|tx| tx.id == id) else {
        bail!("No active transaction with id {}", id);
    };
    let mut draft = TransactionDraft::from_transaction(tx);
    fields.apply_to(&mut draft);
    let mut form = FormState::edit(id, draft, TransactionDraft::default());
    app.transactions.save_transaction(&mut form, &app.ctx()).await?;
    Ok(())
}

pub async fn remove(app: &App, id: i64) -> anyhow::Result<()> {
    app.transactions.remove_transaction(id).await?;
    Ok(())
}

pub async fn summary(app: &App, filter: &FilterArgs, remote: bool) -> anyhow::Result<()> {
    let mut state = dashboard_state(filter)?;
    state.reload(&app.transactions).await?;
    let totals = state.totals();

    let shares = [
        totals.income_percent,
        totals.expense_percent,
        totals.balance_percent,
    ];
    let mut out = table(&["", "Amount", "Share"]);
    for (point, share) in state.chart().into_iter().zip(shares) {
        let label = if point.label == "Balance" && !totals.is_surplus() {
            "Lost".to_string()
        } else {
            point.label
        };
        out.add_row(row([label, money(point.value), percent(share)]));
    }
    println!("Totals\n{out}");

    for transaction_type in [TransactionType::Income, TransactionType::Expense] {
        let breakdown = state.breakdown(transaction_type);
        if breakdown.is_empty() {
            continue;
        }
        let mut out = table(&["Category", "Amount"]);
        for entry in breakdown {
            out.add_row(row([entry.category, money(entry.amount)]));
        }
        println!("{transaction_type} by category\n{out}");
    }

    if remote {
        print_backend_totals(app, state.filter().range).await?;
    }
    Ok(())
}

async fn print_backend_totals(app: &App, range: DateRange) -> anyhow::Result<()> {
    let period = app.transactions.income_expense_totals(&range).await?;
    println!(
        "Backend totals: income {}, expense {}, balance {}",
        money(period.income),
        money(period.expense),
        money(period.balance())
    );

    let by_category = app.transactions.category_totals(&range).await?;
    if !by_category.is_empty() {
        let mut out = table(&["Category", "Type", "Total"]);
        for entry in by_category {
            out.add_row(row([
                entry.category,
                entry.transaction_type.to_string(),
                money(entry.total),
            ]));
        }
        println!("Backend category totals\n{out}");
    }

    let dated = if range.is_active() {
        app.transactions.range_totals(&range).await?
    } else {
        app.transactions.daily_totals().await?
    };
    if !dated.is_empty() {
        let mut out = table(&["Date", "Income", "Expense"]);
        for entry in dated {
            out.add_row(row([date(entry.date), money(entry.income), money(entry.expense)]));
        }
        println!("Backend totals by date\n{out}");
    }
    Ok(())
}

pub async fn categories(app: &App, transaction_type: &str) -> anyhow::Result<()> {
    let transaction_type = TransactionType::parse(transaction_type);
    if transaction_type == TransactionType::Unknown {
        bail!("Category lists exist for income and expense only");
    }
    let catalog = app.transactions.load_categories().await;
    for category in catalog.options_for(transaction_type) {
        println!("{category}");
    }
    Ok(())
}
