//! `Authorization: Bearer <token>` parsing

/// Extract the token from an `Authorization` header value.
///
/// The value is split on the first space into scheme and token. A missing
/// scheme, a scheme other than `bearer` (any case) or an empty token yields
/// `None` rather than an error.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.split_once(' ')?;
    let token = token.trim();
    if !scheme.trim().eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token)
}
