//! Supported languages and language detection

/// A language the site can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code, e.g. `de`.
    pub code: &'static str,
    /// Native display name used by the language switcher.
    pub name: &'static str,
    /// Overlay file name inside the language directory.
    pub file: &'static str,
}

/// Registered languages in switcher order.
pub static LANGUAGES: [Language; 6] = [
    Language { code: "en", name: "English", file: "english.yaml" },
    Language { code: "fr", name: "Français", file: "french.yaml" },
    Language { code: "de", name: "Deutsch", file: "german.yaml" },
    Language { code: "nl", name: "Nederlands", file: "dutch.yaml" },
    Language { code: "es", name: "Español", file: "spanish.yaml" },
    Language { code: "it", name: "Italiano", file: "italian.yaml" },
];

impl Language {
    /// Finds a registered language by its exact code.
    #[must_use]
    pub fn find(code: &str) -> Option<&'static Self> {
        LANGUAGES.iter().find(|language| language.code == code)
    }
}

/// Reduces a language tag to its primary subtag (`en-US` → `en`).
fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_']).next().unwrap_or_default().trim().to_lowercase()
}

/// Picks the first registered language from a preference list.
///
/// # Examples
/// - `["de-CH", "en"]` → `Some("de")`
/// - `["pt-BR", "it"]` → `Some("it")`
/// - `["pt-BR"]` → `None`
pub fn detect_language<'a, I>(preferred: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    preferred
        .into_iter()
        .map(primary_subtag)
        .find_map(|code| Language::find(&code).map(|language| language.code))
}

/// Splits an `Accept-Language` style list into tags ordered by weight.
///
/// Quality values that fail to parse count as `1.0`, entries with `q=0` are
/// dropped. Ties keep their original order.
#[must_use]
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted: Vec<(u16, String)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let weight = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .map_or(1000, parse_quality);
            (weight > 0).then(|| (weight, tag.to_string()))
        })
        .collect();

    weighted.sort_by(|a, b| b.0.cmp(&a.0));
    weighted.into_iter().map(|(_, tag)| tag).collect()
}

/// Parses a quality value into thousandths.
fn parse_quality(value: &str) -> u16 {
    let value = value.trim();
    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    let digits: String = fraction.chars().take(3).collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return 1000;
    }
    match whole {
        "0" => format!("{digits:0<3}").parse().unwrap_or(0),
        _ => 1000,
    }
}

/// Chooses the language to start with.
///
/// Order: explicit request (e.g. `?lang=`), saved preference, detected
/// browser language, then English. Unregistered codes are skipped.
#[must_use]
pub fn select_initial_language(
    requested: Option<&str>,
    saved: Option<&str>,
    preferred: &[String],
) -> &'static str {
    let registered = |code: Option<&str>| code.and_then(Language::find).map(|language| language.code);

    registered(requested)
        .or_else(|| registered(saved))
        .or_else(|| detect_language(preferred.iter().map(String::as_str)))
        .unwrap_or(crate::catalog::FALLBACK_LANGUAGE)
}
