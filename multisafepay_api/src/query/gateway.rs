use url::Url;

use super::Query;

/// Filters for the `/gateways` endpoint. The default lists every gateway.
#[derive(Default, Clone, Debug)]
pub struct GatewayQuery {
    /// ISO 639-1 language code, optionally with region (`nl_NL`).
    pub locale: Option<String>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Order amount in cents. `0` means no amount filter.
    pub amount: i64,
}

impl Query for GatewayQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(locale) = self.locale.as_deref().filter(|l| !l.is_empty()) {
            url.query_pairs_mut().append_pair("locale", locale);
        }
        if let Some(currency) = self.currency.as_deref().filter(|c| !c.is_empty()) {
            url.query_pairs_mut().append_pair("currency", currency);
        }
        if self.amount != 0 {
            url.query_pairs_mut()
                .append_pair("amount", &self.amount.to_string());
        }
        url
    }
}

impl GatewayQuery {
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = Some(currency.to_string());
        self
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }
}
