/// Maps a service string to a port number.
///
/// Absent or empty services mean port 0. Purely numeric strings are parsed
/// directly; `http` and `https` are known by name. Anything else is `None`.
pub fn service_to_port(service: Option<&str>) -> Option<u16> {
    let service = match service {
        None | Some("") => return Some(0),
        Some(s) => s,
    };

    if service.bytes().all(|b| b.is_ascii_digit()) {
        return service.parse::<u16>().ok();
    }

    if service.eq_ignore_ascii_case("http") {
        Some(80)
    } else if service.eq_ignore_ascii_case("https") {
        Some(443)
    } else {
        None
    }
}
