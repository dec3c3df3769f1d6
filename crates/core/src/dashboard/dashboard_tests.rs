#[cfg(test)]
mod tests {
    use crate::dashboard::*;
    use crate::errors::{ApiError, Error};
    use crate::models::RecordStatus;
    use crate::transactions::{Transaction, TransactionType};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(
        id: i64,
        transaction_type: TransactionType,
        name: &str,
        category: &str,
        amount: Decimal,
        day: Option<NaiveDate>,
    ) -> Transaction {
        Transaction {
            id,
            user_id: Some(1),
            transaction_type,
            name: name.to_string(),
            date: day,
            amount,
            category: category.to_string(),
            note: None,
            status: RecordStatus::Active,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, TransactionType::Income, "Salary", "Job", dec!(100), Some(date(2024, 6, 1))),
            tx(2, TransactionType::Expense, "Groceries", "Food", dec!(25), Some(date(2024, 6, 3))),
            tx(3, TransactionType::Expense, "Train", "Travel", dec!(15), Some(date(2024, 6, 5))),
        ]
    }

    #[test]
    fn test_totals_and_percentages() {
        let totals = summarize(&sample());
        assert_eq!(totals.income, dec!(100));
        assert_eq!(totals.expense, dec!(40));
        assert_eq!(totals.balance, dec!(60));
        assert_eq!(totals.income_percent, dec!(71.4));
        assert_eq!(totals.expense_percent, dec!(28.6));
        assert_eq!(totals.balance_percent, dec!(42.9));
        assert!(totals.is_surplus());
    }

    #[test]
    fn test_empty_list_has_zero_percentages() {
        let totals = summarize(&[]);
        assert_eq!(totals, TransactionTotals::default());
    }

    #[test]
    fn test_deficit_balance_is_negative_share() {
        let list = vec![
            tx(1, TransactionType::Income, "Gift", "Other", dec!(10), None),
            tx(2, TransactionType::Expense, "Rent", "Home", dec!(30), None),
        ];
        let totals = summarize(&list);
        assert_eq!(totals.balance, dec!(-20));
        assert_eq!(totals.balance_percent, dec!(-50.0));
        assert!(!totals.is_surplus());
    }

    #[test]
    fn test_unknown_type_is_excluded_from_totals() {
        let mut list = sample();
        list.push(tx(4, TransactionType::Unknown, "Odd", "Misc", dec!(999), None));
        assert_eq!(summarize(&list).income, dec!(100));
        assert_eq!(summarize(&list).expense, dec!(40));
    }

    #[test]
    fn test_chart_series_order() {
        let points = chart_series(&summarize(&sample()));
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Income", "Expense", "Balance"]);
        assert_eq!(points[2].value, dec!(60));
    }

    #[test]
    fn test_category_breakdown_sorted_by_amount() {
        let mut list = sample();
        list.push(tx(4, TransactionType::Expense, "Dinner", "Food", dec!(5), None));
        list.push(tx(5, TransactionType::Expense, "Misc", "", dec!(30), None));
        let breakdown = category_breakdown(&list, TransactionType::Expense);
        let pairs: Vec<(&str, Decimal)> = breakdown
            .iter()
            .map(|c| (c.category.as_str(), c.amount))
            .collect();
        assert_eq!(
            pairs,
            [("Food", dec!(30)), ("Uncategorized", dec!(30)), ("Travel", dec!(15))]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_and_field_scoped() {
        let filter = TransactionFilter::default().with_search("FOOD");
        let names: Vec<String> = filter.apply(&sample()).into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["Groceries"]);

        let by_status = TransactionFilter::default().with_search("active");
        assert_eq!(by_status.apply(&sample()).len(), 3);

        let blank = TransactionFilter::default().with_search("   ");
        assert_eq!(blank.apply(&sample()).len(), 3);
    }

    #[test]
    fn test_range_is_inclusive_and_needs_both_bounds() {
        let mut list = sample();
        list.push(tx(4, TransactionType::Expense, "Undated", "Food", dec!(1), None));

        let half_open = TransactionFilter::default()
            .with_range(DateRange::new(Some(date(2024, 6, 3)), None));
        assert_eq!(half_open.apply(&list).len(), 4);

        let closed = TransactionFilter::default()
            .with_range(DateRange::between(date(2024, 6, 1), date(2024, 6, 3)));
        let ids: Vec<i64> = closed.apply(&list).iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_type_filter_combines_with_search() {
        let filter = TransactionFilter::default()
            .with_type(TypeFilter::Income)
            .with_search("food");
        assert!(filter.apply(&sample()).is_empty());

        let filter = TransactionFilter::default().with_type(TypeFilter::Expense);
        assert_eq!(filter.apply(&sample()).len(), 2);
    }

    #[test]
    fn test_range_presets() {
        let wednesday = date(2024, 6, 12);
        assert_eq!(
            RangePreset::LastWeek.resolve(wednesday),
            DateRange::between(date(2024, 6, 2), date(2024, 6, 8))
        );
        assert_eq!(
            RangePreset::Yesterday.resolve(wednesday),
            DateRange::between(date(2024, 6, 11), date(2024, 6, 11))
        );
        assert_eq!(
            RangePreset::LastMonth.resolve(date(2024, 3, 15)),
            DateRange::between(date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            RangePreset::LastSixMonths.resolve(date(2024, 8, 31)),
            DateRange::between(date(2024, 2, 29), date(2024, 8, 31))
        );
        assert_eq!(
            RangePreset::LastYear.resolve(wednesday),
            DateRange::between(date(2023, 1, 1), date(2023, 12, 31))
        );
        assert!(!RangePreset::AnyTime.resolve(wednesday).is_active());
        assert_eq!(
            "last-six-months".parse::<RangePreset>(),
            Ok(RangePreset::LastSixMonths)
        );
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = DashboardState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.complete_load(second, Ok(sample())).unwrap());
        assert!(!state.complete_load(first, Ok(Vec::new())).unwrap());
        assert_eq!(state.transactions().len(), 3);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let mut state = DashboardState::new();
        let ticket = state.begin_load();
        state.complete_load(ticket, Ok(sample())).unwrap();

        let ticket = state.begin_load();
        let failure = Err(Error::Api(ApiError::Transport("offline".to_string())));
        assert!(state.complete_load(ticket, failure).is_err());
        assert_eq!(state.transactions().len(), 3);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_toggling_inactive_supersedes_pending_load() {
        let mut state = DashboardState::new();
        let ticket = state.begin_load();
        assert!(state.is_loading());
        state.set_show_inactive(true);
        assert!(!state.is_loading());
        assert!(!state.complete_load(ticket, Ok(sample())).unwrap());
        assert!(state.transactions().is_empty());
        assert!(!state.is_loading());

        // The reload for the new view is the one that counts.
        let reload = state.begin_load();
        state.complete_load(ticket, Ok(sample())).unwrap();
        assert!(state.is_loading());
        assert!(state.complete_load(reload, Ok(sample())).unwrap());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_state_totals_follow_filter() {
        let mut state = DashboardState::new();
        let ticket = state.begin_load();
        state.complete_load(ticket, Ok(sample())).unwrap();

        state.set_type_filter(TypeFilter::Expense);
        let totals = state.totals();
        assert_eq!(totals.income, Decimal::ZERO);
        assert_eq!(totals.expense, dec!(40));
        assert_eq!(totals.expense_percent, dec!(100.0));

        state.set_type_filter(TypeFilter::All);
        state.apply_preset(RangePreset::Today, date(2024, 6, 5));
        assert_eq!(state.filtered().len(), 1);
    }
}
