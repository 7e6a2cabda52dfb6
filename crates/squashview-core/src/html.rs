//! Plain text to HTML with clickable links.

use html_escape::encode_quoted_attribute;
use linkify::{Link, LinkFinder, LinkKind};

/// Top-level domains accepted for links written without a scheme, on top of
/// two-letter country codes.
const SCHEMELESS_TLDS: &[&str] = &[
    "biz", "com", "edu", "gov", "net", "org", "pro", "web", "xxx", "aero", "asia", "coop", "info",
    "museum", "name", "shop", "рф",
];

/// Converts plain text into an HTML fragment with URLs turned into anchors.
///
/// Returns an empty string when the text contains nothing link-like, so
/// callers can fall back to showing the plain text. Links written without a
/// scheme (`www.example.com`, `github.com/foo/bar`) point to `http://`, and
/// e-mail addresses link to `mailto:`. Both text and attributes are escaped,
/// quotes included.
pub fn linkify(text: &str) -> String {
    let mut finder = LinkFinder::new();
    finder.url_must_have_scheme(false);

    let links: Vec<(usize, usize, String)> = finder
        .links(text)
        .filter_map(|link| href(&link).map(|href| (link.start(), link.end(), href)))
        .collect();
    if links.is_empty() {
        return String::new();
    }

    let mut html = String::with_capacity(text.len() * 2);
    let mut last = 0;
    for (start, end, href) in links {
        html.push_str(&encode_quoted_attribute(&text[last..start]));
        html.push_str("<a href='");
        html.push_str(&encode_quoted_attribute(&href));
        html.push_str("'>");
        html.push_str(&encode_quoted_attribute(&text[start..end]));
        html.push_str("</a>");
        last = end;
    }
    html.push_str(&encode_quoted_attribute(&text[last..]));

    html
}

/// Returns the anchor target of a detected link, or `None` for a
/// scheme-less span whose top-level domain is not recognised.
fn href(link: &Link<'_>) -> Option<String> {
    let text = link.as_str();
    match link.kind() {
        LinkKind::Email => Some(format!("mailto:{text}")),
        _ if text.contains("://") => Some(text.to_string()),
        _ => has_known_tld(text).then(|| format!("http://{text}")),
    }
}

fn has_known_tld(text: &str) -> bool {
    let host = text.split(['/', '?', '#', ':']).next().unwrap_or(text);
    let tld = host.rsplit('.').next().unwrap_or(host);

    (tld.len() == 2 && tld.bytes().all(|b| b.is_ascii_alphabetic()))
        || SCHEMELESS_TLDS
            .iter()
            .any(|known| tld.eq_ignore_ascii_case(known))
}
