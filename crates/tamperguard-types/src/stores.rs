//! Installer identifiers of well-known distribution channels.

/// Google Play Store.
pub const GOOGLE_PLAY_STORE: &str = "com.android.vending";
/// Amazon Appstore.
pub const AMAZON_APP_STORE: &str = "com.amazon.venezia";
/// Samsung Galaxy Store.
pub const SAMSUNG_APP_STORE: &str = "com.sec.android.app.samsungapps";

/// Short aliases accepted in configuration files.
pub const STORE_ALIASES: &[(&str, &str)] = &[
    ("google-play", GOOGLE_PLAY_STORE),
    ("amazon", AMAZON_APP_STORE),
    ("samsung", SAMSUNG_APP_STORE),
];

/// Resolve a configured installer value: known aliases map to their installer id,
/// anything else is returned unchanged.
pub fn resolve_alias(value: &str) -> &str {
    STORE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(value))
        .map(|(_, id)| *id)
        .unwrap_or(value)
}
