use std::collections::BTreeSet;

/// Translation completeness check: every locale must define every message
/// the fallback (`en-US`) file defines, and no file may define a key twice.
///
/// The FTL parsing here is deliberately minimal — comments (`#`) and
/// attribute/continuation lines are ignored, anything shaped like
/// `key = …` counts as a message.
#[test]
fn every_locale_covers_the_fallback_keys() {
    const FALLBACK: (&str, &str) = ("en-US", include_str!("../i18n/en-US/affluence-ui.ftl"));
    const LOCALES: &[(&str, &str)] = &[("fr-FR", include_str!("../i18n/fr-FR/affluence-ui.ftl"))];

    let fallback_keys = message_keys(FALLBACK.1);
    assert!(!fallback_keys.is_empty(), "fallback file defines no messages");
    assert_unique_keys(FALLBACK.0, FALLBACK.1);

    for (locale, source) in LOCALES {
        assert_unique_keys(locale, source);

        let keys = message_keys(source);
        let missing: Vec<&String> = fallback_keys.difference(&keys).collect();
        assert!(
            missing.is_empty(),
            "locale {locale} is missing {} key(s): {missing:?}",
            missing.len()
        );
    }
}

fn message_keys(source: &str) -> BTreeSet<String> {
    source.lines().filter_map(message_key).collect()
}

fn assert_unique_keys(locale: &str, source: &str) {
    let mut seen = BTreeSet::new();
    for key in source.lines().filter_map(message_key) {
        assert!(seen.insert(key.clone()), "duplicate key {key} in {locale}");
    }
}

fn message_key(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('.') {
        return None;
    }

    let (left, _) = trimmed.split_once('=')?;
    let key = left.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some(key.to_string())
}
