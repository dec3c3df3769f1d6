use chrono::NaiveDate;
use comfy_table::{Cell, Table};
use rust_decimal::Decimal;

use fintrack_core::constants::{DISPLAY_DECIMAL_PRECISION, PERCENT_DECIMAL_PRECISION};

pub fn money(amount: Decimal) -> String {
    format!("{:.*}", DISPLAY_DECIMAL_PRECISION as usize, amount)
}

pub fn percent(value: Decimal) -> String {
    format!("{:.*}%", PERCENT_DECIMAL_PRECISION as usize, value)
}

pub fn date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(header.to_vec());
    table
}

pub fn row<I, T>(cells: I) -> Vec<Cell>
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    cells.into_iter().map(|c| Cell::new(c.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_money_and_percent_formatting() {
        assert_eq!(money(Decimal::from_str("1234.5").unwrap()), "1234.50");
        assert_eq!(percent(Decimal::from_str("71.4").unwrap()), "71.4%");
        assert_eq!(date(None), "-");
    }
}
