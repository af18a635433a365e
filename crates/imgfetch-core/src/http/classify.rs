//! Classify curl errors into fetch failure kinds.

use crate::error::FetchError;

/// Map a libcurl error for `url` onto the matching [`FetchError`] variant.
pub fn classify_curl_error(url: &str, e: curl::Error) -> FetchError {
    let url = url.to_string();
    if e.is_operation_timedout() {
        return FetchError::Timeout { url };
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_ssl_connect_error()
    {
        return FetchError::Connection { url, source: e };
    }
    FetchError::Request { url, source: e }
}

/// Request error for a URL that is not `http`/`https`, rejected before curl
/// ever opens it.
pub(crate) fn unsupported_url(url: &str, detail: String) -> FetchError {
    // CURLE_UNSUPPORTED_PROTOCOL
    let mut e = curl::Error::new(1);
    e.set_extra(detail);
    FetchError::Request {
        url: url.to_string(),
        source: e,
    }
}
