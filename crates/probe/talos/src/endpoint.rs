//! Endpoint normalization.

use crate::error::{ClientError, ClientResult};

/// Port apid listens on.
pub const DEFAULT_PORT: u16 = 50000;

/// Turn `host`, `host:port`, `[v6]:port` or a bare IPv6 literal into an
/// `https://` URI. Any scheme the operator typed is dropped.
pub fn endpoint_uri(endpoint: &str) -> ClientResult<String> {
    let invalid = |reason: &str| ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = endpoint.trim();
    let rest = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest)
        .trim_end_matches('/');
    if rest.is_empty() {
        return Err(invalid("empty host"));
    }

    let (host, port) = if let Some(bracketed) = rest.strip_prefix('[') {
        let (addr, tail) = bracketed
            .split_once(']')
            .ok_or_else(|| invalid("unterminated IPv6 literal"))?;
        let port = match tail {
            "" => None,
            tail => Some(
                tail.strip_prefix(':')
                    .ok_or_else(|| invalid("unexpected text after IPv6 literal"))?,
            ),
        };
        (format!("[{addr}]"), port)
    } else if rest.matches(':').count() > 1 {
        (format!("[{rest}]"), None)
    } else {
        match rest.split_once(':') {
            Some((host, port)) => (host.to_string(), Some(port)),
            None => (rest.to_string(), None),
        }
    };

    if host.is_empty() || host == "[]" {
        return Err(invalid("empty host"));
    }
    let port = match port {
        Some(port) => port
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid port {port:?}")))?,
        None => DEFAULT_PORT,
    };

    Ok(format!("https://{host}:{port}"))
}

/// Host part of an endpoint URI, used as the TLS server name.
pub fn server_name(uri: &str) -> &str {
    let authority = uri.split_once("://").map_or(uri, |(_, rest)| rest);
    if let Some(bracketed) = authority.strip_prefix('[') {
        return bracketed.split_once(']').map_or(bracketed, |(addr, _)| addr);
    }
    authority.rsplit_once(':').map_or(authority, |(host, _)| host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_forms() {
        let cases = [
            ("10.0.0.10", "https://10.0.0.10:50000"),
            ("10.0.0.10:50001", "https://10.0.0.10:50001"),
            ("talos.example.com", "https://talos.example.com:50000"),
            ("https://talos.example.com:443", "https://talos.example.com:443"),
            ("[fd00::10]:50000", "https://[fd00::10]:50000"),
            ("[fd00::10]", "https://[fd00::10]:50000"),
            ("fd00::10", "https://[fd00::10]:50000"),
        ];
        for (input, expected) in cases {
            assert_eq!(endpoint_uri(input).unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_invalid_endpoints() {
        for input in ["", "https://", ":50000", "host:port", "[fd00::1", "[fd00::1]x", "[]"] {
            assert!(
                matches!(endpoint_uri(input), Err(ClientError::InvalidEndpoint { .. })),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_server_name() {
        assert_eq!(server_name("https://10.0.0.10:50000"), "10.0.0.10");
        assert_eq!(server_name("https://[fd00::10]:50000"), "fd00::10");
        assert_eq!(server_name("https://talos.example.com:443"), "talos.example.com");
    }
}
