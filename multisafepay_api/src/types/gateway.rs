//! Payment gateways (iDEAL, PayPal, ...) offered to a merchant.

use serde::{Deserialize, Serialize};

/// Gateway code such as `IDEAL` or `PAYPAL`.
pub type GatewayID = String;

/// A payment method returned by the `/gateways` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    pub id: GatewayID,
    #[serde(default)]
    pub description: String,
}
