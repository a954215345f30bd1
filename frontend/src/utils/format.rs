use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;

pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// `2025-01-15` → `Jan 15, 2025`. Unparseable input is returned as-is.
pub fn format_billing_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            trimmed
                .get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        });
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => trimmed.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

impl CategoryShare {
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Each category's share of the summed amounts, in server order.
pub fn category_shares(by_category: &IndexMap<String, f64>) -> Vec<CategoryShare> {
    let total: f64 = by_category.values().sum();
    by_category
        .iter()
        .map(|(category, amount)| CategoryShare {
            category: category.clone(),
            amount: *amount,
            percentage: if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}
