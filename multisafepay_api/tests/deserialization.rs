use multisafepay_api::types::{Envelope, Gateway, Issuer, OrderInfo, Payment, Transaction};
use multisafepay_api::Error;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn data<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let envelope: Envelope = serde_json::from_str(&load_fixture(name)).unwrap();
    assert!(envelope.success);
    serde_json::from_value(envelope.data).unwrap()
}

#[test]
fn deserialize_order_with_string_numbers() {
    let order: OrderInfo = data("order_string_fields.json");
    assert_eq!(order.amount, 235);
    assert_eq!(order.amount_refunded, 0);
    assert_eq!(order.order_id, 1291);
    assert_eq!(order.transaction_id, 77962);
    assert_eq!(order.currency, "EUR");
    assert_eq!(order.status, "initialized");
    assert_eq!(order.customer.email, "jan@example.nl");
    assert_eq!(order.customer.locale, "nl_NL");
    assert_eq!(order.payment_details.payment_type, "IDEAL");
    assert!(order.payment_details.account_id.is_null());
}

#[test]
fn deserialize_order_with_native_numbers() {
    let order: OrderInfo = data("order_numeric_fields.json");
    assert_eq!(order.amount, 135);
    assert_eq!(order.order_id, 1291);
    assert_eq!(order.transaction_id, 77962);
    assert_eq!(order.customer.email, "");
    assert_eq!(order.payment_details.payment_type, "");
}

#[test]
fn deserialize_payment() {
    let payment: Payment = data("payment.json");
    assert_eq!(payment.url, "http://test.nl");
    assert_eq!(payment.order_id, 20);
}

#[test]
fn deserialize_transaction() {
    let tx: Transaction = data("transaction.json");
    assert_eq!(tx.amount, 135);
    assert_eq!(tx.order_id, 1291);
    assert_eq!(tx.transaction_id, 77962);
    assert_eq!(tx.transaction_type, "deposit");
    assert_eq!(tx.order_status, "completed");
    assert!(tx.is_completed());
    assert!(tx.created_at().is_some());
    assert_eq!(
        tx.payment_details.account_holder_name.as_str(),
        Some("J. de Vries")
    );
}

#[test]
fn deserialize_gateways_and_issuers() {
    let gateways: Vec<Gateway> = data("gateways.json");
    assert_eq!(gateways.len(), 3);
    assert_eq!(gateways[0].id, "IDEAL");
    assert_eq!(gateways[1].description, "PayPal");

    let issuers: Vec<Issuer> = data("issuers.json");
    assert_eq!(issuers.len(), 3);
    assert_eq!(issuers[0].code, "0031");
    assert_eq!(issuers[2].description, "Rabobank");
}

#[test]
fn deserialize_error_object() {
    let err: Error = serde_json::from_str(&load_fixture("error.json")).unwrap();
    assert_eq!(err.code, 1006);
    assert_eq!(err.message, "Invalid transaction ID");
    assert_eq!(err.to_string(), "[1006] Invalid transaction ID");
}

#[test]
fn envelope_defaults_when_fields_missing() {
    let envelope: Envelope = serde_json::from_str("{}").unwrap();
    assert!(!envelope.success);
    assert!(envelope.data.is_null());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"success": true, "data": not valid json}"#;
    assert!(serde_json::from_str::<Envelope>(bad_json).is_err());
}
