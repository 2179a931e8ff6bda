//! HTTP client for the MultiSafepay JSON API.

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    debug_log::DebugLog,
    query::{GatewayQuery, Query},
    types::{Envelope, Gateway, Issuer, Order, OrderInfo, Payment, Transaction},
    Error,
};

/// Version prefix shared by every resource path.
const API_PREFIX: &str = "/v1/json";

/// Prepends the API version prefix to a resource path: `/orders/` becomes `/v1/json/orders/`.
pub fn api_path(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

/// MultiSafepay deployments a client can talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Sandbox at `https://testapi.multisafepay.com`.
    Test,
    /// Live payments at `https://api.multisafepay.com`.
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Test => "https://testapi.multisafepay.com",
            Environment::Production => "https://api.multisafepay.com",
        }
    }
}

/// HTTP client for the MultiSafepay JSON API.
///
/// Every request carries the merchant API key and is answered with a
/// `{"success": ..., "data": ...}` envelope or an error object; both are
/// folded into `Result<T, Error>` by [`Client::execute`].
///
/// The configuration is fixed at construction and each call targets a URL
/// built fresh by [`Client::endpoint`], so a single client can be shared
/// between tasks. The underlying `reqwest::Client` pools connections.
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) api_key: HeaderValue,
    base_url: Url,
    pub(crate) debug: bool,
    pub(crate) logs: DebugLog,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Configuration for a [`Client`].
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    debug: bool,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Records raw requests and responses in the client's debug log.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets a total timeout for every request. There is none by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = Url::parse(&self.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_url, e);
            Error::local(format!("invalid base URL {}: {}", self.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::local(format!(
                "base URL {} cannot carry a path",
                self.base_url
            )));
        }

        let mut api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| Error::local("API key contains characters not allowed in a header"))?;
        api_key.set_sensitive(true);

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::from(e)
        })?;

        Ok(Client {
            http,
            api_key,
            base_url,
            debug: self.debug,
            logs: DebugLog::new(),
        })
    }
}

impl Client {
    /// Creates a client for `base_url` (scheme and host, e.g.
    /// [`Environment::base_url`]). With `debug` set, every round trip is
    /// recorded in [`Client::debug_log`].
    pub fn new(api_key: &str, base_url: &str, debug: bool) -> Result<Self, Error> {
        Self::builder(api_key, base_url).debug(debug).build()
    }

    pub fn builder(api_key: &str, base_url: &str) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            debug: false,
            timeout: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Recent request/response dumps. Stays empty unless debug mode is on.
    pub fn debug_log(&self) -> &DebugLog {
        &self.logs
    }

    /// Builds the URL for `path` on the configured host. Any path or query on
    /// the base URL is replaced.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        url
    }

    /// Sends `payload` as JSON and decodes the `data` field of the response
    /// envelope into `T`.
    ///
    /// Every failure comes back as an [`Error`]: the service's own error
    /// object for non-200 responses that carry one, otherwise a local error
    /// with code `-1` that includes the raw response body where there is one.
    pub async fn execute<T, P>(
        &self,
        method: Method,
        endpoint: &Url,
        payload: Option<&P>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let target = std::any::type_name::<T>();
        let (data, body) = self.execute_envelope(method, endpoint, payload, target).await?;
        serde_json::from_value::<T>(data).map_err(|e| {
            tracing::error!(
                "Failed to parse data field into {}: {} | body: {}",
                target,
                e,
                truncate_body(&body)
            );
            Error::local(format!(
                "could not parse data field of {} into {}: {}",
                body, target, e
            ))
        })
    }

    /// Like [`Client::execute`] but only checks the envelope; `data` is ignored.
    pub async fn execute_discarding_data<P>(
        &self,
        method: Method,
        endpoint: &Url,
        payload: Option<&P>,
    ) -> Result<(), Error>
    where
        P: Serialize + ?Sized,
    {
        self.execute_envelope(method, endpoint, payload, "envelope")
            .await
            .map(|_| ())
    }

    /// `GET` without a body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &Url) -> Result<T, Error> {
        self.execute::<T, ()>(Method::GET, endpoint, None).await
    }

    /// `POST` with `payload` as the JSON body.
    pub async fn post<T, P>(&self, endpoint: &Url, payload: &P) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.execute(Method::POST, endpoint, Some(payload)).await
    }

    /// Runs the request and unwraps the envelope, returning the undecoded
    /// `data` together with the raw body for error messages.
    async fn execute_envelope<P>(
        &self,
        method: Method,
        endpoint: &Url,
        payload: Option<&P>,
        target: &str,
    ) -> Result<(serde_json::Value, String), Error>
    where
        P: Serialize + ?Sized,
    {
        let request_body = payload
            .map(|p| serde_json::to_vec(p))
            .transpose()
            .map_err(|e| {
                tracing::error!("Failed to serialize request payload: {}", e);
                Error::local(format!("could not serialize request payload: {}", e))
            })?;

        let response = self
            .call(method, endpoint, request_body)
            .await
            .map_err(|e| {
                tracing::error!("Failed to call {}: {}", endpoint, e);
                Error::from(e)
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::from(e)
        })?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        if status != StatusCode::OK {
            if let Ok(api_error) = serde_json::from_slice::<Error>(&bytes) {
                if api_error.code != 0 {
                    tracing::error!("Request failed with status {}: {}", status, api_error);
                    return Err(api_error);
                }
            }
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::local(format!(
                "expected status code {} got {} but could not parse an API error from the response body: {}",
                StatusCode::OK.as_u16(),
                status.as_u16(),
                body
            )));
        }

        let envelope = serde_json::from_slice::<Envelope>(&bytes).map_err(|e| {
            tracing::error!(
                "Failed to parse response envelope: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::local(format!(
                "could not parse response {} into {}: {}",
                body, target, e
            ))
        })?;

        if !envelope.success {
            tracing::error!(
                "Response returned 200 OK with success=false: {}",
                truncate_body(&body)
            );
            return Err(Error::local(format!(
                "received 200 OK but the response contained success=false: {}",
                body
            )));
        }

        Ok((envelope.data, body))
    }

    /// Lists the payment gateways available to the merchant.
    pub async fn gateways(&self, query: &GatewayQuery) -> Result<Vec<Gateway>, Error> {
        let url = query.add_to_url(&self.endpoint(&api_path("/gateways")));
        self.get(&url).await
    }

    /// Lists the issuers of a gateway, e.g. the banks behind `IDEAL`.
    pub async fn issuers(&self, gateway_id: &str) -> Result<Vec<Issuer>, Error> {
        let url = self.endpoint(&api_path(&format!("/issuers/{}", gateway_id)));
        self.get(&url).await
    }

    /// Posts an order and returns the payment page to send the customer to.
    ///
    /// Orders missing one of [`MANDATORY_ORDER_FIELDS`](crate::types::MANDATORY_ORDER_FIELDS)
    /// are rejected before anything is sent.
    pub async fn place_order(&self, order: &Order) -> Result<Payment, Error> {
        if let Some(field) = order.missing_mandatory_field() {
            tracing::error!("Order rejected, missing required parameter {}", field);
            return Err(Error::local(format!("{} is a required parameter", field)));
        }
        self.post(&self.endpoint(&api_path("/orders/")), order).await
    }

    /// Fetches a placed order by its merchant order id.
    pub async fn get_order(&self, order_id: i64) -> Result<OrderInfo, Error> {
        let url = self.endpoint(&api_path(&format!("/orders/{}", order_id)));
        self.get(&url).await
    }

    /// Fetches the payment state of a transaction.
    pub async fn get_transaction(&self, transaction_id: i64) -> Result<Transaction, Error> {
        let url = self.endpoint(&api_path(&format!("/transactions/{}", transaction_id)));
        self.get(&url).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
