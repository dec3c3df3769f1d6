use super::wishes_model::{NewWish, Priority};
use crate::errors::Result;
use crate::forms::forms_rules::{
    non_negative_amount, parse_form_amount, parse_form_date, required,
};
use crate::forms::{Draft, ValidationContext};
use crate::models::RecordStatus;

/// Add form of a wish. The target date is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishDraft {
    pub item_name: String,
    pub estimated_cost: String,
    pub priority: Priority,
    pub target_date: String,
}

impl WishDraft {
    pub fn to_new(&self) -> Result<NewWish> {
        let target_date = if self.target_date.trim().is_empty() {
            None
        } else {
            Some(parse_form_date(&self.target_date)?)
        };
        Ok(NewWish {
            item_name: self.item_name.trim().to_string(),
            estimated_cost: parse_form_amount(&self.estimated_cost, "Estimated cost")?,
            priority: self.priority,
            target_date,
            status: RecordStatus::Active,
        })
    }
}

impl Draft for WishDraft {
    const FIELDS: &'static [&'static str] = &["name", "cost", "date"];

    fn validate_field(&self, field: &str, _ctx: &ValidationContext) -> Option<String> {
        match field {
            "name" => required(&self.item_name, "Item name"),
            "cost" => non_negative_amount(&self.estimated_cost, "Estimated cost"),
            "date" if !self.target_date.trim().is_empty() => parse_form_date(&self.target_date)
                .err()
                .map(|_| "Invalid date format.".to_string()),
            _ => None,
        }
    }
}
