//! Feature name vocabulary.
//!
//! Every name an analyzer can emit lives here. The names must match the
//! columns the classifier was trained on, so they keep the training-time
//! spelling rather than Rust naming conventions.

/// Character count of the whole URL.
pub const URL_LENGTH: &str = "URLLength";
/// Character count of the network location.
pub const DOMAIN_LENGTH: &str = "DomainLength";
/// Whether the network location is made only of digits and dots.
pub const IS_DOMAIN_IP: &str = "IsDomainIP";
/// Raw top-level domain category.
pub const TLD: &str = "TLD";
/// Number of dot-separated labels minus two.
pub const NO_OF_SUB_DOMAIN: &str = "NoOfSubDomain";
/// Lexical `https` prefix flag.
pub const IS_HTTPS: &str = "IsHTTPS";
/// ASCII digit count.
pub const NO_OF_DIGITS: &str = "NoOfDigits";
/// Special character count.
pub const NO_OF_SPECIAL_CHARS: &str = "NoOfSpecialChars";
/// Hyphen count.
pub const NO_OF_HYPHENS: &str = "NoOfHyphens";

/// Page has a `<title>`.
pub const HAS_TITLE: &str = "HasTitle";
/// Page has a `<link rel="icon">`.
pub const HAS_FAVICON: &str = "HasFavicon";
/// Page has a `<form>`.
pub const HAS_FORM: &str = "HasForm";
/// Page has a `<script>`.
pub const HAS_JAVASCRIPT: &str = "HasJavaScript";
/// Page has an `<iframe>`.
pub const HAS_IFRAME: &str = "HasIframe";
/// Page has a `<meta http-equiv="refresh">`.
pub const HAS_META_REDIRECT: &str = "HasMetaRedirect";
/// Page links to an absolute `http(s)` target.
pub const HAS_EXTERNAL_LINKS: &str = "HasExternalLinks";

/// Alphabetic density of the URL.
pub const CHAR_CONTINUATION_RATE: &str = "CharContinuationRate";
/// Placeholder TLD legitimacy prior.
pub const TLD_LEGITIMATE_PROB: &str = "TLDLegitimateProb";

/// Frequency encoding of [`TLD`], injected during assembly.
pub const TLD_FREQUENCY: &str = "TLD_Frequency";

/// Names produced by the lexical analyzer.
pub const LEXICAL: [&str; 9] = [
    URL_LENGTH,
    DOMAIN_LENGTH,
    IS_DOMAIN_IP,
    TLD,
    NO_OF_SUB_DOMAIN,
    IS_HTTPS,
    NO_OF_DIGITS,
    NO_OF_SPECIAL_CHARS,
    NO_OF_HYPHENS,
];

/// Names produced by the page analyzer.
pub const PAGE: [&str; 7] = [
    HAS_TITLE,
    HAS_FAVICON,
    HAS_FORM,
    HAS_JAVASCRIPT,
    HAS_IFRAME,
    HAS_META_REDIRECT,
    HAS_EXTERNAL_LINKS,
];

/// Names produced by the derived feature calculator.
pub const DERIVED: [&str; 2] = [CHAR_CONTINUATION_RATE, TLD_LEGITIMATE_PROB];

/// The whole vocabulary, including names injected during assembly.
pub const ALL: [&str; 19] = concat([&LEXICAL, &PAGE, &DERIVED, &[TLD_FREQUENCY]]);

// Merging analyzer output relies on these groups never sharing a name.
const _: () = assert!(all_distinct(&ALL), "feature names must be unique");

const fn concat<const N: usize>(groups: [&[&'static str]; 4]) -> [&'static str; N] {
    let mut out = [""; N];
    let mut k = 0;
    let mut g = 0;
    while g < groups.len() {
        let mut i = 0;
        while i < groups[g].len() {
            out[k] = groups[g][i];
            k += 1;
            i += 1;
        }
        g += 1;
    }
    assert!(k == N, "vocabulary length mismatch");
    out
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn all_distinct(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
