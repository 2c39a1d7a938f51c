//! JSONP callback sanitization.

/// Prefix every JSONP payload starts with.
pub const JSONP_PREFIX: &str = "/**/";

/// Reduce a client-supplied callback name to `[0-9A-Za-z_$.]` and prefix it.
///
/// Disallowed characters are deleted, not escaped.
pub fn escape_callback_name(callback: &str) -> String {
    let mut out = String::with_capacity(JSONP_PREFIX.len() + callback.len());
    out.push_str(JSONP_PREFIX);
    out.extend(
        callback
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.')),
    );
    out
}
