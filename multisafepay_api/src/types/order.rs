//! Order submission and lookup types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::flexible_int;

/// Keys that must be present on an [`Order`] before it is posted.
pub const MANDATORY_ORDER_FIELDS: &[&str] = &[
    "type",
    "order_id",
    "currency",
    "amount",
    "payment_options",
    "description",
];

/// Free-form order parameters, posted to `/orders/` as a JSON object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Order(Map<String, Value>);

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a top-level order parameter, replacing any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Selects a gateway and issuer so the customer skips the payment page.
    pub fn set_issuer(&mut self, gateway: &str, issuer: &str) -> &mut Self {
        self.set("gateway", gateway);
        let mut info = Map::new();
        info.insert("issuer_id".to_string(), Value::from(issuer));
        self.set("gateway_info", Value::Object(info))
    }

    /// Sets the notification, redirect and cancel URLs for the payment page.
    pub fn set_payment_options(
        &mut self,
        notification_url: &str,
        redirect_url: &str,
        cancel_url: &str,
        close_window: bool,
    ) -> &mut Self {
        let mut options = Map::new();
        options.insert("notification_url".to_string(), Value::from(notification_url));
        options.insert("redirect_url".to_string(), Value::from(redirect_url));
        options.insert("cancel_url".to_string(), Value::from(cancel_url));
        options.insert("close_window".to_string(), Value::from(close_window));
        self.set("payment_options", Value::Object(options))
    }

    /// Returns the first mandatory key this order lacks, if any.
    pub fn missing_mandatory_field(&self) -> Option<&'static str> {
        MANDATORY_ORDER_FIELDS
            .iter()
            .copied()
            .find(|key| !self.contains(key))
    }
}

/// Response to a placed order: where to send the customer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Payment {
    #[serde(rename = "payment_url", default)]
    pub url: String,

    #[serde(default, with = "flexible_int")]
    pub order_id: i64,
}

/// Order state returned by `GET /orders/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderInfo {
    /// Amount in cents.
    #[serde(default, with = "flexible_int")]
    pub amount: i64,

    #[serde(default, with = "flexible_int")]
    pub amount_refunded: i64,

    #[serde(default)]
    pub currency: String,

    #[serde(default)]
    pub customer: Customer,

    #[serde(default)]
    pub description: String,

    #[serde(default, with = "flexible_int")]
    pub order_id: i64,

    #[serde(default)]
    pub payment_details: PaymentDetails,

    #[serde(default)]
    pub status: String,

    /// Use with [`Client::get_transaction`](crate::Client::get_transaction) to
    /// fetch the payment status.
    #[serde(default, with = "flexible_int")]
    pub transaction_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Customer {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub locale: String,
}

/// Payment method details. Most values vary in type between gateways and are
/// kept as raw JSON.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PaymentDetails {
    #[serde(default)]
    pub account_holder_name: Value,
    #[serde(default)]
    pub account_id: Value,
    #[serde(default)]
    pub external_transaction_id: Value,
    #[serde(default)]
    pub recurring_id: Value,
    #[serde(rename = "type", default)]
    pub payment_type: String,
}
