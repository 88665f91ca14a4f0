//! Client identifier extraction for rate limiting.

use axum::extract::ConnectInfo;
use axum::http::{Extensions, HeaderMap};
use std::net::{IpAddr, SocketAddr};

/// Identifier used when no client address can be determined.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Resolves the identifier the rate limiter keys a request on.
///
/// With `behind_proxy` set, the first address in `X-Forwarded-For` wins, then
/// `X-Real-IP`. Otherwise, or when neither header holds a valid address, the
/// peer socket address from [`ConnectInfo`] is used. Requests with no usable
/// address at all share the [`UNKNOWN_CLIENT`] identifier.
pub fn client_identifier(headers: &HeaderMap, extensions: &Extensions, behind_proxy: bool) -> String {
    let forwarded = behind_proxy
        .then(|| forwarded_for(headers).or_else(|| real_ip(headers)))
        .flatten();

    forwarded
        .or_else(|| peer_ip(extensions))
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// First hop of `X-Forwarded-For`, i.e. the original client.
fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .split(',')
        .next()?
        .trim()
        .parse()
        .ok()
}

fn real_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers.get("x-real-ip")?.to_str().ok()?.trim().parse().ok()
}

fn peer_ip(extensions: &Extensions) -> Option<IpAddr> {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
}
