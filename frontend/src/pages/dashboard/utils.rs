use crate::api::{ApiError, NewSubscription, BILLING_MONTHLY, BILLING_WEEKLY, BILLING_YEARLY, SOURCE_MANUAL};

pub const BILLING_CYCLE_OPTIONS: [(&str, &str); 3] = [
    (BILLING_MONTHLY, "Monthly"),
    (BILLING_YEARLY, "Yearly"),
    (BILLING_WEEKLY, "Weekly"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct AddSubscriptionForm {
    pub name: String,
    pub amount: String,
    pub billing_cycle: String,
    pub next_billing_date: String,
}

impl Default for AddSubscriptionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            billing_cycle: BILLING_MONTHLY.to_string(),
            next_billing_date: String::new(),
        }
    }
}

impl AddSubscriptionForm {
    pub fn to_payload(&self) -> Result<NewSubscription, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Name is required"));
        }
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount >= 0.0)
            .ok_or_else(|| ApiError::validation("Amount must be a positive number"))?;
        let billing_cycle = if self.billing_cycle.trim().is_empty() {
            BILLING_MONTHLY.to_string()
        } else {
            self.billing_cycle.trim().to_string()
        };
        let next_billing_date = Some(self.next_billing_date.trim())
            .filter(|date| !date.is_empty())
            .map(str::to_string);
        Ok(NewSubscription {
            name: name.to_string(),
            amount,
            billing_cycle,
            detected_from: SOURCE_MANUAL.to_string(),
            next_billing_date,
            category: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, amount: &str) -> AddSubscriptionForm {
        AddSubscriptionForm {
            name: name.into(),
            amount: amount.into(),
            ..AddSubscriptionForm::default()
        }
    }

    #[test]
    fn payload_parses_amount_and_trims_name() {
        let payload = form("  Gym  ", "29.50").to_payload().unwrap();
        assert_eq!(payload.name, "Gym");
        assert_eq!(payload.amount, 29.5);
        assert_eq!(payload.billing_cycle, "monthly");
        assert_eq!(payload.detected_from, "manual");
        assert!(payload.next_billing_date.is_none());
    }

    #[test]
    fn payload_keeps_selected_cycle_and_date() {
        let payload = AddSubscriptionForm {
            billing_cycle: "yearly".into(),
            next_billing_date: "2025-03-01".into(),
            ..form("Domain", "12")
        }
        .to_payload()
        .unwrap();
        assert_eq!(payload.billing_cycle, "yearly");
        assert_eq!(payload.next_billing_date.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn payload_rejects_missing_name_and_bad_amounts() {
        assert_eq!(form("", "1").to_payload().unwrap_err().code, "VALIDATION_ERROR");
        assert!(form("Gym", "abc").to_payload().is_err());
        assert!(form("Gym", "-3").to_payload().is_err());
        assert!(form("Gym", "NaN").to_payload().is_err());
        assert!(form("Gym", "").to_payload().is_err());
    }

    #[test]
    fn billing_options_cover_server_cycles() {
        let values: Vec<&str> = BILLING_CYCLE_OPTIONS.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec!["monthly", "yearly", "weekly"]);
    }
}
