//! Locale helpers: primary subtag extraction and RTL script detection.

const RTL_LOCALES: &[&str] = &[
    "ar", "fa", "ur", "yi", "ji", "ps", "sd", "ug", "arc", "bcc", "bqi", "ckb", "dv", "glk",
    "ku", "mzn", "pnb",
];

/// The primary language subtag of a BCP-47-like locale (`en-US` -> `en`).
pub fn primary_subtag(locale: &str) -> &str {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
}

pub fn is_rtl_locale(locale: &str) -> bool {
    let subtag = primary_subtag(locale).to_lowercase();
    RTL_LOCALES.contains(&subtag.as_str())
}
