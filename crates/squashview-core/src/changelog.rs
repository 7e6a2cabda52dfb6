//! Changelog link detection and normalization.

use std::sync::LazyLock;

use html_escape::encode_quoted_attribute;
use regex::Regex;
use serde::Serialize;

/// Shown in place of a link when no changelog could be found.
pub const NO_CHANGELOG: &str = "No changelog detected.";

/// Xfce components hosted in the `apps` group rather than `xfce`.
const XFCE_APPS: &[&str] = &[
    "catfish",
    "gigolo",
    "mousepad",
    "orage",
    "parole",
    "ristretto",
    "xfburn",
    "xfce4-dict",
    "xfce4-mixer",
    "xfce4-notifyd",
    "xfce4-panel-profiles",
    "xfce4-screensaver",
    "xfce4-screenshooter",
    "xfce4-taskmanager",
    "xfce4-terminal",
    "xfce4-volumed-pulse",
    "xfdashboard",
    "xfmpc",
];

/// Xfce GitLab groups mirrored under `github.com/xfce-mirror`.
const XFCE_MIRROR_SEGMENTS: &[&str] = &["xfce", "thunar-plugins", "panel-plugins", "apps"];

static VERSION_BUMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^:]+): (.*?) -> (.*?)$").expect("invalid regex"));

/// Finds the most likely changelog URL in a commit message.
///
/// The first line starting with `https://` wins. Failing that, an Xfce
/// version bump line (`xfce.<name>: <old> -> <new>`) is turned into a
/// GitLab compare URL.
pub fn detect<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .find(|line| line.starts_with("https://"))
        .map(str::to_string)
        .or_else(|| lines.iter().find_map(|line| xfce_compare_url(line.as_ref())))
}

fn xfce_compare_url(line: &str) -> Option<String> {
    if !line.starts_with("xfce.") {
        return None;
    }
    let captures = VERSION_BUMP_RE.captures(line)?;

    let name = captures[1].trim().replacen("xfce.", "", 1);
    let from = captures[2].trim();
    let to = captures[3].trim();

    let category = if XFCE_APPS.contains(&name.as_str()) {
        "apps"
    } else if name.ends_with("plugin") {
        "panel-plugins"
    } else {
        "xfce"
    };

    Some(format!(
        "https://gitlab.xfce.org/{category}/{name}/-/compare/{name}-{from}...{name}-{to}"
    ))
}

/// Rewrites a URL to its GitHub mirror when one is known.
///
/// Returns the URL unchanged otherwise.
pub fn normalize(url: &str) -> String {
    let mut url = url.replace("https://gitlab.gnome.org/GNOME/", "https://github.com/GNOME/");

    for segment in XFCE_MIRROR_SEGMENTS {
        url = url.replace(
            &format!("https://gitlab.xfce.org/{segment}/"),
            "https://github.com/xfce-mirror/",
        );
    }

    if url.contains("https://github.com/") {
        url = url.replace("/-/", "/").replace("...", "..");
    }

    url
}

/// A detected changelog link together with its mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogLink {
    /// The URL as found in (or reconstructed from) the message.
    pub url: String,

    /// The normalized URL; equal to `url` when no mirror is known.
    pub canonical: String,
}

impl ChangelogLink {
    /// Creates a link from a detected URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let canonical = normalize(&url);
        Self { url, canonical }
    }

    /// Detects and normalizes the changelog link of a message.
    pub fn find<S: AsRef<str>>(lines: &[S]) -> Option<Self> {
        detect(lines).map(Self::new)
    }

    /// Returns true if the link was rewritten to a mirror.
    #[must_use]
    pub fn is_mirrored(&self) -> bool {
        self.canonical != self.url
    }

    /// Renders the link as an HTML fragment.
    ///
    /// A mirrored link is shown in bold, followed by the original URL as a
    /// fallback in case the mirror guess is wrong.
    #[must_use]
    pub fn to_html(&self) -> String {
        if self.is_mirrored() {
            format!("<b>{}</b>\n\n{}", anchor(&self.canonical), anchor(&self.url))
        } else {
            anchor(&self.url)
        }
    }
}

/// Renders an optional link, falling back to [`NO_CHANGELOG`].
pub fn render_link(link: Option<&ChangelogLink>) -> String {
    link.map_or_else(|| NO_CHANGELOG.to_string(), ChangelogLink::to_html)
}

fn anchor(url: &str) -> String {
    let url = encode_quoted_attribute(url);
    format!("<a href='{url}'>{url}</a>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_first_https_line() {
        let lines = ["Update foo", "", "https://example.com/CHANGELOG"];
        assert_eq!(
            detect(&lines),
            Some("https://example.com/CHANGELOG".to_string())
        );
    }

    #[test]
    fn test_detect_trims_whitespace() {
        let lines = ["foo: 1 -> 2", "  https://example.com/releases  "];
        assert_eq!(detect(&lines), Some("https://example.com/releases".to_string()));
    }

    #[test]
    fn test_detect_ignores_embedded_urls() {
        let lines = ["see https://example.com/inline", "http://insecure.example"];
        assert_eq!(detect(&lines), None);
    }

    #[test]
    fn test_detect_first_of_many() {
        let lines = ["https://a.example", "https://b.example"];
        assert_eq!(detect(&lines), Some("https://a.example".to_string()));
    }

    #[test]
    fn test_detect_https_beats_xfce() {
        let lines = ["xfce.catfish: 1.0 -> 1.2", "", "https://example.com/notes"];
        assert_eq!(detect(&lines), Some("https://example.com/notes".to_string()));
    }

    #[test]
    fn test_detect_xfce_app() {
        let lines = ["xfce.catfish: 1.0 -> 1.2"];
        assert_eq!(
            detect(&lines),
            Some(
                "https://gitlab.xfce.org/apps/catfish/-/compare/catfish-1.0...catfish-1.2"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_detect_xfce_plugin() {
        let lines = ["xfce.xfce4-whiskermenu-plugin: 2.7.1 -> 2.7.2"];
        assert_eq!(
            detect(&lines),
            Some(
                "https://gitlab.xfce.org/panel-plugins/xfce4-whiskermenu-plugin/-/compare/\
                 xfce4-whiskermenu-plugin-2.7.1...xfce4-whiskermenu-plugin-2.7.2"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_detect_xfce_core_component() {
        let lines = ["xfce.thunar: 4.18.3 -> 4.18.4"];
        assert_eq!(
            detect(&lines),
            Some(
                "https://gitlab.xfce.org/xfce/thunar/-/compare/thunar-4.18.3...thunar-4.18.4"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_detect_xfce_trims_versions() {
        let lines = ["xfce.parole: 4.18.0  ->  4.18.1 "];
        assert_eq!(
            detect(&lines),
            Some(
                "https://gitlab.xfce.org/apps/parole/-/compare/parole-4.18.0...parole-4.18.1"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_detect_requires_xfce_prefix() {
        let lines = ["gnome.nautilus: 44.0 -> 44.1"];
        assert_eq!(detect(&lines), None);
    }

    #[test]
    fn test_detect_xfce_without_arrow() {
        let lines = ["xfce.thunar: init at 4.18"];
        assert_eq!(detect(&lines), None);
    }

    #[test]
    fn test_detect_nothing() {
        assert_eq!(detect::<&str>(&[]), None);
        assert_eq!(detect(&["foo: 1.0 -> 1.1", "", "Some prose."]), None);
    }

    #[test]
    fn test_normalize_gnome() {
        assert_eq!(
            normalize("https://gitlab.gnome.org/GNOME/gimp/-/compare/1..2"),
            "https://github.com/GNOME/gimp/compare/1..2"
        );
    }

    #[test]
    fn test_normalize_xfce_compare() {
        assert_eq!(
            normalize("https://gitlab.xfce.org/apps/catfish/-/compare/catfish-1.0...catfish-1.2"),
            "https://github.com/xfce-mirror/catfish/compare/catfish-1.0..catfish-1.2"
        );
    }

    #[test]
    fn test_normalize_each_xfce_segment() {
        for segment in XFCE_MIRROR_SEGMENTS {
            let url = format!("https://gitlab.xfce.org/{segment}/thing/-/tags");
            assert_eq!(normalize(&url), "https://github.com/xfce-mirror/thing/tags");
        }
    }

    #[test]
    fn test_normalize_unknown_host_untouched() {
        let url = "https://gitlab.com/foo/bar/-/compare/v1...v2";
        assert_eq!(normalize(url), url);
    }

    #[test]
    fn test_normalize_cleans_existing_github_urls() {
        assert_eq!(
            normalize("https://github.com/foo/bar/compare/v1...v2"),
            "https://github.com/foo/bar/compare/v1..v2"
        );
    }

    #[test]
    fn test_link_not_mirrored() {
        let link = ChangelogLink::new("https://example.com/CHANGELOG");
        assert!(!link.is_mirrored());
        assert_eq!(
            link.to_html(),
            "<a href='https://example.com/CHANGELOG'>https://example.com/CHANGELOG</a>"
        );
    }

    #[test]
    fn test_link_mirrored_html() {
        let link = ChangelogLink::new("https://gitlab.gnome.org/GNOME/gimp/-/compare/1..2");
        assert!(link.is_mirrored());
        insta::assert_snapshot!(link.to_html(), @r"
        <b><a href='https://github.com/GNOME/gimp/compare/1..2'>https://github.com/GNOME/gimp/compare/1..2</a></b>

        <a href='https://gitlab.gnome.org/GNOME/gimp/-/compare/1..2'>https://gitlab.gnome.org/GNOME/gimp/-/compare/1..2</a>
        ");
    }

    #[test]
    fn test_link_escapes_markup() {
        let link = ChangelogLink::new("https://example.com/?a=1&b=<2>");
        assert_eq!(
            link.to_html(),
            "<a href='https://example.com/?a=1&amp;b=&lt;2&gt;'>https://example.com/?a=1&amp;b=&lt;2&gt;</a>"
        );
    }

    #[test]
    fn test_find() {
        let lines = vec!["xfce.catfish: 1.0 -> 1.2".to_string()];
        let link = ChangelogLink::find(&lines).unwrap();
        assert_eq!(
            link.canonical,
            "https://github.com/xfce-mirror/catfish/compare/catfish-1.0..catfish-1.2"
        );
    }

    #[test]
    fn test_render_link_sentinel() {
        assert_eq!(render_link(None), NO_CHANGELOG);
        assert_eq!(NO_CHANGELOG, "No changelog detected.");
    }
}
