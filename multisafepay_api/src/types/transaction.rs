use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::coerce::flexible_int;

use super::order::{Customer, PaymentDetails};

const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Payment state for an order, returned by `GET /transactions/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Amount in cents.
    #[serde(default, with = "flexible_int")]
    pub amount: i64,

    /// Creation timestamp as sent by the API, e.g. `2015-02-12T14:19:38`.
    #[serde(default)]
    pub created: String,

    #[serde(default)]
    pub currency: String,

    #[serde(default)]
    pub customer: Customer,

    #[serde(default)]
    pub description: String,

    #[serde(default, with = "flexible_int")]
    pub order_id: i64,

    #[serde(default)]
    pub order_status: String,

    #[serde(default)]
    pub payment_details: PaymentDetails,

    #[serde(default)]
    pub status: String,

    #[serde(default, with = "flexible_int")]
    pub transaction_id: i64,

    #[serde(rename = "type", default)]
    pub transaction_type: String,
}

impl Transaction {
    /// Returns true once the payment has been completed.
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    /// Parses [`Transaction::created`]. Returns `None` if it is empty or malformed.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created, CREATED_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};

    use super::*;

    fn transaction(json: &str) -> Transaction {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn completed_status() {
        assert!(transaction(r#"{"status":"completed"}"#).is_completed());
        assert!(!transaction(r#"{"status":"initialized"}"#).is_completed());
    }

    #[test]
    fn parses_created_timestamp() {
        let t = transaction(r#"{"created":"2015-02-12T14:19:38"}"#);
        let created = t.created_at().unwrap();
        assert_eq!(created.date(), NaiveDate::from_ymd_opt(2015, 2, 12).unwrap());
        assert_eq!(created.hour(), 14);
    }

    #[test]
    fn malformed_created_is_none() {
        assert!(transaction(r#"{"created":"yesterday"}"#).created_at().is_none());
        assert!(transaction("{}").created_at().is_none());
    }
}
