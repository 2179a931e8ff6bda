use multisafepay_api::{api_path, GatewayQuery, Query};
use url::Url;

fn gateways_url() -> Url {
    Url::parse("https://example.com").unwrap().join(&api_path("/gateways")).unwrap()
}

#[test]
fn gateway_query_defaults() {
    let url = GatewayQuery::default().add_to_url(&gateways_url());
    assert_eq!(url.path(), "/v1/json/gateways");
    assert!(url.query().is_none());
}

#[test]
fn gateway_query_with_all_filters() {
    let url = GatewayQuery::default()
        .with_locale("nl_NL")
        .with_currency("EUR")
        .with_amount(1000)
        .add_to_url(&gateways_url());
    let query = url.query().unwrap();
    assert!(query.contains("locale=nl_NL"));
    assert!(query.contains("currency=EUR"));
    assert!(query.contains("amount=1000"));
}

#[test]
fn gateway_query_skips_zero_amount() {
    let url = GatewayQuery::default()
        .with_currency("USD")
        .add_to_url(&gateways_url());
    assert_eq!(url.query(), Some("currency=USD"));
}

#[test]
fn gateway_query_escapes_values() {
    let url = GatewayQuery::default()
        .with_locale("en US")
        .add_to_url(&gateways_url());
    assert_eq!(url.query(), Some("locale=en+US"));
}
