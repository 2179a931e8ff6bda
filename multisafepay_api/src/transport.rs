//! Raw request dispatch and the debug-mode request/response dumps.

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Method, Request, Response};
use url::Url;

use crate::{debug_log::LogEntry, Client};

/// Header carrying the merchant API key.
pub(crate) const API_KEY_HEADER: &str = "api_key";

const REDACTED: &[u8] = b"[redacted]";

impl Client {
    /// Sends a request to `endpoint` and returns the unprocessed response.
    ///
    /// Only the JSON content type and API key headers are added. In debug
    /// mode the request and response are dumped into the
    /// [`debug log`](Client::debug_log) under the endpoint URL; the response
    /// handed back is rebuilt from the buffered body.
    ///
    /// The response body is left for the caller to consume.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &Url,
        body: Option<Vec<u8>>,
    ) -> Result<Response, reqwest::Error> {
        let mut builder = self
            .http
            .request(method, endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, self.api_key.clone());
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build()?;
        tracing::debug!("{} {}", request.method(), request.url());

        if !self.debug {
            return self.http.execute(request).await;
        }

        let request_dump = dump_request(&request);
        let response = self.http.execute(request).await?;
        let (response, response_dump) = dump_response(response).await?;
        self.logs.record(LogEntry {
            url: endpoint.to_string(),
            request: request_dump,
            response: response_dump,
        });
        Ok(response)
    }
}

fn dump_request(request: &Request) -> Vec<u8> {
    let url = request.url();
    let target = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    };
    let mut dump =
        format!("{} {} {:?}\r\n", request.method(), target, request.version()).into_bytes();
    if let Some(host) = url.host_str() {
        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        dump.extend_from_slice(format!("Host: {}\r\n", host).as_bytes());
    }
    dump_headers(&mut dump, request.headers());
    dump.extend_from_slice(b"\r\n");
    if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
        dump.extend_from_slice(body);
    }
    dump
}

async fn dump_response(response: Response) -> Result<(Response, Vec<u8>), reqwest::Error> {
    let status = response.status();
    let version = response.version();
    let headers = response.headers().clone();
    let body = response.bytes().await?;

    let mut dump = format!("{:?} {}\r\n", version, status).into_bytes();
    dump_headers(&mut dump, &headers);
    dump.extend_from_slice(b"\r\n");
    dump.extend_from_slice(&body);

    let mut rebuilt = http::Response::new(body);
    *rebuilt.status_mut() = status;
    *rebuilt.version_mut() = version;
    *rebuilt.headers_mut() = headers;
    Ok((Response::from(rebuilt), dump))
}

fn dump_headers(dump: &mut Vec<u8>, headers: &HeaderMap) {
    for (name, value) in headers {
        dump.extend_from_slice(name.as_str().as_bytes());
        dump.extend_from_slice(b": ");
        if value.is_sensitive() {
            dump.extend_from_slice(REDACTED);
        } else {
            dump.extend_from_slice(value.as_bytes());
        }
        dump.extend_from_slice(b"\r\n");
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    #[test]
    fn request_dump_redacts_api_key() {
        let mut key = HeaderValue::from_static("secret-key");
        key.set_sensitive(true);
        let request = reqwest::Client::new()
            .post("http://localhost:8080/v1/json/orders/?x=1")
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, key)
            .body(r#"{"amount":100}"#)
            .build()
            .unwrap();

        let dump = String::from_utf8(dump_request(&request)).unwrap();
        assert!(dump.starts_with("POST /v1/json/orders/?x=1 HTTP/1.1\r\n"));
        assert!(dump.contains("Host: localhost:8080\r\n"));
        assert!(dump.contains("api_key: [redacted]\r\n"));
        assert!(!dump.contains("secret-key"));
        assert!(dump.ends_with("\r\n\r\n{\"amount\":100}"));
    }
}
