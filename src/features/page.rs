//! Structural features of fetched markup.
//!
//! Analysis is done using CSS selectors via the `scraper` crate and is a pure
//! function of the markup. Network concerns live in [`crate::fetch`].

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

use super::names;
use super::record::{FeatureRecord, FeatureValue};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "title detection"));
// Attribute values compare case-sensitively, unlike the HTML default for these attributes
static FAVICON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[rel~='icon' s]", "favicon detection"));
static FORM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("form", "form detection"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("script", "script detection"));
static IFRAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("iframe", "iframe detection"));
static META_REFRESH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe("meta[http-equiv='refresh' s]", "meta redirect detection")
});
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "external link detection"));

/// Presence flags for page elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageFeatures {
    /// A `<title>` element exists.
    pub has_title: bool,
    /// A `<link>` whose `rel` contains `icon`.
    pub has_favicon: bool,
    /// A `<form>` element exists.
    pub has_form: bool,
    /// A `<script>` element exists.
    pub has_javascript: bool,
    /// An `<iframe>` element exists.
    pub has_iframe: bool,
    /// A `<meta http-equiv="refresh">` element exists.
    pub has_meta_redirect: bool,
    /// Some anchor `href` starts with `http`.
    pub has_external_links: bool,
}

impl PageFeatures {
    /// The neutral "empty page" result used whenever a page cannot be
    /// fetched or read. Every flag is 0.
    pub const fn empty() -> Self {
        PageFeatures {
            has_title: false,
            has_favicon: false,
            has_form: false,
            has_javascript: false,
            has_iframe: false,
            has_meta_redirect: false,
            has_external_links: false,
        }
    }

    /// Flattens into named record entries (flags become 0/1 integers).
    pub fn into_record(self) -> FeatureRecord {
        let flag = |b: bool| FeatureValue::Int(i64::from(b));
        FeatureRecord::from([
            (names::HAS_TITLE, flag(self.has_title)),
            (names::HAS_FAVICON, flag(self.has_favicon)),
            (names::HAS_FORM, flag(self.has_form)),
            (names::HAS_JAVASCRIPT, flag(self.has_javascript)),
            (names::HAS_IFRAME, flag(self.has_iframe)),
            (names::HAS_META_REDIRECT, flag(self.has_meta_redirect)),
            (names::HAS_EXTERNAL_LINKS, flag(self.has_external_links)),
        ])
    }
}

/// Analyzes an HTML document body.
///
/// An empty string yields [`PageFeatures::empty`]; malformed markup is
/// recovered by the HTML5 parser rather than rejected.
pub fn analyze_document(body: &str) -> PageFeatures {
    let document = Html::parse_document(body);
    analyze_parsed(&document)
}

fn analyze_parsed(document: &Html) -> PageFeatures {
    let has = |selector: &Selector| document.select(selector).next().is_some();

    // Anchors without an href never match the selector, so they cannot
    // disturb the other flags.
    let has_external_links = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .any(|href| href.starts_with("http"));

    PageFeatures {
        has_title: has(&TITLE_SELECTOR),
        has_favicon: has(&FAVICON_SELECTOR),
        has_form: has(&FORM_SELECTOR),
        has_javascript: has(&SCRIPT_SELECTOR),
        has_iframe: has(&IFRAME_SELECTOR),
        has_meta_redirect: has(&META_REFRESH_SELECTOR),
        has_external_links,
    }
}
