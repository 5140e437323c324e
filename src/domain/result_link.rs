use url::Url;

const GOOGLE_BASE: &str = "https://www.google.com";

/// Turns the `href` of a search result anchor into the page URL it points at.
///
/// Google wraps organic results as `/url?q=<percent-encoded url>&sa=...`; those
/// are unwrapped. Absolute links are kept as they are. Navigation links back
/// into Google and anything without a host are dropped.
pub fn extract_result_url(href: &str) -> Option<String> {
    let target = if href.starts_with("/url?") {
        let wrapped = Url::parse(GOOGLE_BASE).ok()?.join(href).ok()?;
        wrapped
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())?
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&target).ok()?;
    match (parsed.scheme(), parsed.host_str()) {
        ("http" | "https", Some(host)) if !host.is_empty() && !is_google_host(host) => Some(target),
        _ => None,
    }
}

fn is_google_host(host: &str) -> bool {
    host == "google.com" || host.ends_with(".google.com") || host.ends_with(".googleusercontent.com")
}
