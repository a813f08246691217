use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Verifies an HTTP Basic `Authorization` header against the configured
/// credential pair.
///
/// Every failure mode (missing header, wrong scheme, undecodable payload,
/// credential mismatch) collapses to `false` so the response gives no
/// credential-probing signal.
///
/// The decoded payload is split on the FIRST `:`; passwords may themselves
/// contain colons.
pub fn verify_basic(authorization: Option<&str>, expected_user: &str, expected_pass: &str) -> bool {
    let Some(value) = authorization else {
        return false;
    };
    let Some(encoded) = value.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = STANDARD.decode(encoded) else {
        return false;
    };
    let Ok(text) = String::from_utf8(decoded) else {
        return false;
    };
    let Some((user, pass)) = text.split_once(':') else {
        return false;
    };
    user == expected_user && pass == expected_pass
}
