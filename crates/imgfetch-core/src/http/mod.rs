//! Blocking HTTP GET through libcurl.
//!
//! One easy handle per request, total-transfer timeout, redirects followed.
//! Only `http` and `https` URLs are handed to curl. The whole body is
//! buffered in memory.

mod classify;
mod parse;

pub use classify::classify_curl_error;
pub use parse::ResponseHead;

use crate::error::FetchError;
use std::str;
use std::time::Duration;

/// Per-request settings.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub user_agent: String,
    /// Bound on the whole transfer (connect + headers + body).
    pub timeout: Duration,
}

/// A completed 2xx response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub head: ResponseHead,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Value of the `Content-Type` header of the final response, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.head.content_type.as_deref()
    }
}

/// Performs a GET and returns the final response.
///
/// Non-2xx statuses are returned as [`FetchError::HttpStatus`]; curl failures
/// are classified into timeout / connection / request errors. Schemes other
/// than `http`/`https` fail as [`FetchError::Request`] without any I/O.
pub fn get(url: &str, opts: &RequestOptions) -> Result<HttpResponse, FetchError> {
    ensure_http_url(url)?;
    let curl_err = |e: curl::Error| classify_curl_error(url, e);

    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.get(true).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    easy.useragent(&opts.user_agent).map_err(curl_err)?;
    easy.timeout(opts.timeout).map_err(curl_err)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })
            .map_err(curl_err)?;
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let status = easy.response_code().map_err(curl_err)?;
    tracing::debug!(url, status, bytes = body.len(), "GET completed");
    if !(200..300).contains(&status) {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    Ok(HttpResponse {
        head: parse::parse_final_head(&header_lines),
        body,
    })
}

fn ensure_http_url(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| classify::unsupported_url(url, format!("invalid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(classify::unsupported_url(
            url,
            format!("scheme '{other}' is not http(s)"),
        )),
    }
}
