use percent_encoding::percent_decode_str;

/// First path segment of every request the add-on page answers.
pub const BASE_REQUEST_NAME: &str = "addons";

/// Whether the add-on page should handle a request for `path`.
///
/// `/addons`, `/Addons.html` and `/addons/anything` all match.
pub fn interpret_request(path: &str) -> bool {
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    let url = decoded.strip_prefix('/').unwrap_or(&*decoded);

    // Drop a trailing extension such as '.html'. A dot in first position is
    // part of the name.
    let url = match url.rfind('.') {
        Some(pos) if pos > 0 => &url[..pos],
        _ => url,
    };

    url.split('/')
        .next()
        .is_some_and(|first| first.eq_ignore_ascii_case(BASE_REQUEST_NAME))
}
