//! Credential material loading.
//!
//! A credential argument is either a path to a PEM file or the PEM itself,
//! base64-encoded (the form talosconfig uses).
//!
//! talosctl armors ed25519 keys as `ED25519 PRIVATE KEY`; the body is plain
//! PKCS#8, so the armor is rewritten to `PRIVATE KEY` for rustls.

use crate::error::{ClientError, ClientResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

const PEM_MARKER: &[u8] = b"-----BEGIN ";
const ED25519_LABEL: &str = "ED25519 PRIVATE KEY-----";
const PKCS8_LABEL: &str = "PRIVATE KEY-----";

/// Load PEM bytes from a file path or base64 text.
pub fn load_pem(input: &str, description: &'static str) -> ClientResult<Vec<u8>> {
    if Path::new(input).exists() {
        return std::fs::read(input)
            .map(normalize_key_label)
            .map_err(|source| ClientError::ReadCredential { description, source });
    }
    decode_pem(input, description)
}

/// Decode base64 text and check it holds PEM.
pub fn decode_pem(encoded: &str, description: &'static str) -> ClientResult<Vec<u8>> {
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| ClientError::InvalidCredential { description })?;
    if !contains_pem(&decoded) {
        return Err(ClientError::NotPem { description });
    }
    Ok(normalize_key_label(decoded))
}

/// Rewrite `ED25519 PRIVATE KEY` armor to `PRIVATE KEY`.
fn normalize_key_label(pem: Vec<u8>) -> Vec<u8> {
    match String::from_utf8(pem) {
        Ok(text) if text.contains(ED25519_LABEL) => {
            text.replace(ED25519_LABEL, PKCS8_LABEL).into_bytes()
        }
        Ok(text) => text.into_bytes(),
        Err(err) => err.into_bytes(),
    }
}

fn contains_pem(data: &[u8]) -> bool {
    data.windows(PEM_MARKER.len()).any(|w| w == PEM_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CA: &str = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n";

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CA.as_bytes()).unwrap();

        let pem = load_pem(file.path().to_str().unwrap(), "CA certificate").unwrap();
        assert_eq!(pem, CA.as_bytes());
    }

    #[test]
    fn test_load_from_base64() {
        let encoded = STANDARD.encode(CA);
        let pem = load_pem(&encoded, "CA certificate").unwrap();
        assert_eq!(pem, CA.as_bytes());
    }

    #[test]
    fn test_ed25519_label_rewritten() {
        let talos = include_str!("../testdata/client.key");
        let expected = talos.replace("ED25519 PRIVATE KEY", "PRIVATE KEY");

        let pem = decode_pem(&STANDARD.encode(talos), "client key").unwrap();
        assert_eq!(String::from_utf8(pem).unwrap(), expected);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(talos.as_bytes()).unwrap();
        let pem = load_pem(file.path().to_str().unwrap(), "client key").unwrap();
        assert_eq!(String::from_utf8(pem).unwrap(), expected);
    }

    #[test]
    fn test_other_labels_untouched() {
        let pem = decode_pem(&STANDARD.encode(CA), "CA certificate").unwrap();
        assert_eq!(pem, CA.as_bytes());
    }

    #[test]
    fn test_rejects_non_base64() {
        let err = load_pem("/no/such/file.pem", "client key").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid client key: not a valid file path or base64-encoded data"
        );
    }

    #[test]
    fn test_rejects_non_pem() {
        let encoded = STANDARD.encode("just some bytes");
        let err = load_pem(&encoded, "client certificate").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid client certificate: decoded data is not valid PEM format"
        );
    }
}
