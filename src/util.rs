/// Builds a command URL for the given device address and route. The address
/// is used verbatim; a nonsense address produces a URL the transport will
/// reject, which surfaces as a connectivity failure.
///
/// # Arguments
/// * `address`: Host or host:port as typed by the user, without a scheme.
/// * `route`: Firmware route, e.g. `/enviar`.
/// * `command`: Optional command token, percent-encoded into `?cmd=`.
pub fn command_url(address: &str, route: &str, command: Option<&str>) -> String {
    match command {
        Some(cmd) => format!(
            "http://{}{}?cmd={}",
            address,
            route,
            urlencoding::encode(cmd)
        ),
        None => format!("http://{}{}", address, route),
    }
}

/// First `max` characters of `s`, cut on a character boundary so multibyte
/// response bodies never split mid-character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
