use std::net::IpAddr;
use thiserror::Error;
use url::Url;

/// Rejection reasons for a candidate feed URL.
///
/// Every feed URL is handed verbatim to the relay, so the same SSRF rules
/// apply as if we issued the fetch ourselves: http(s) only, no loopback,
/// no private address ranges.
#[derive(Debug, Error)]
pub enum UrlValidationError {
    #[error("Invalid URL: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    #[error("Refusing loopback host")]
    Loopback,
    #[error("Refusing private address: {0}")]
    PrivateAddress(String),
}

/// Validates a URL before it is sent to the relay as a fetch target.
///
/// Returns the parsed [`Url`] so callers can keep mutating it (the fetch
/// layer appends its cache-busting token to the validated URL).
pub fn validate_url(raw: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(raw)?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_owned())),
    }

    if let Some(host) = url.host_str() {
        if host.eq_ignore_ascii_case("localhost") {
            return Err(UrlValidationError::Loopback);
        }

        // IPv6 hosts keep their brackets in host_str
        let bare = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        if let Ok(ip) = bare.parse::<IpAddr>() {
            if ip.is_loopback() {
                return Err(UrlValidationError::Loopback);
            }
            if is_private(&ip) {
                return Err(UrlValidationError::PrivateAddress(ip.to_string()));
            }
        }
    }

    Ok(url)
}

fn is_private(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_private() || v4.is_link_local() || v4.is_unspecified(),
        IpAddr::V6(v6) => {
            if v6.is_unspecified() {
                return true;
            }
            let lead = v6.segments()[0];
            // Unique local (fc00::/7) and link-local (fe80::/10)
            (lead & 0xfe00) == 0xfc00 || (lead & 0xffc0) == 0xfe80
        }
    }
}
