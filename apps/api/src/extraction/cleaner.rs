//! Text cleanup for PDF output before it reaches the extractor.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static DECORATIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[®™©◆△▲◇○●\x{2002}-\x{200f}\x{2028}-\x{202f}]").unwrap()
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

// Mainland mobile carrier prefixes.
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:13[0-9]|14[01456879]|15[0-35-9]|16[2567]|17[0-8]|18[0-9]|19[0-35-9])[0-9]{8}",
    )
    .unwrap()
});

/// NFKC-normalizes (full-width digits and letters become ASCII), drops
/// decorative symbols and special spaces, then collapses whitespace.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let normalized: String = text.nfkc().collect();
    let stripped = DECORATIVE_RE.replace_all(&normalized, "");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Masks emails and mobile numbers. Only for log output: extraction needs
/// the contact details intact.
pub fn redact_contact_details(text: &str) -> String {
    let masked = EMAIL_RE.replace_all(text, "[EMAIL]");
    MOBILE_RE.replace_all(&masked, "[PHONE]").into_owned()
}

/// Short redacted prefix of `text` for log lines.
pub fn log_preview(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    redact_contact_details(&head)
}
