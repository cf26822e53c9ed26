//! Query string decoding

use percent_encoding::percent_decode_str;

/// First value of `key` in a raw query string, form-decoded.
///
/// `+` decodes to a space and `%XX` sequences are percent-decoded. Pairs with a
/// malformed escape (a `%` not followed by two hex digits) or containing `;` are
/// skipped. Bytes that are not valid UTF-8 after decoding become U+FFFD, so such a
/// value is still present and non-empty.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty() && !pair.contains(';'))
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode(k)?, decode(v)?))
        })
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

fn decode(component: &str) -> Option<String> {
    if !escapes_valid(component) {
        return None;
    }
    let spaced = component.replace('+', " ");
    Some(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

/// Every `%` is followed by two hex digits
fn escapes_valid(component: &str) -> bool {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
