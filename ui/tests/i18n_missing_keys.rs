use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures the Arabic table provides exactly the keys of the fallback (en)
/// `brightbuds_ui.ftl`, and that placeholders match per message.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
const EN: &str = include_str!("../i18n/en/brightbuds_ui.ftl");
const AR: &str = include_str!("../i18n/ar/brightbuds_ui.ftl");

#[test]
fn arabic_has_every_fallback_key() {
    let fallback_keys = extract_keys(EN);
    assert!(!fallback_keys.is_empty(), "Fallback (en) contains no keys.");
    assert_no_dup_keys(EN, "en");
    assert_no_dup_keys(AR, "ar");

    let keys = extract_keys(AR);
    let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
    let extra: BTreeSet<_> = keys.difference(&fallback_keys).cloned().collect();

    assert!(
        missing.is_empty(),
        "Locale ar is missing {} key(s):\n  {}\n\nHint: copy the missing keys from en, then translate.",
        missing.len(),
        missing.into_iter().collect::<Vec<_>>().join("\n  ")
    );
    assert!(
        extra.is_empty(),
        "Locale ar defines keys unknown to en:\n  {}",
        extra.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

#[test]
fn placeholders_match_between_locales() {
    let en = messages(EN);
    let ar = messages(AR);
    for (key, value) in &en {
        let Some((_, translated)) = ar.iter().find(|(k, _)| k == key) else {
            continue;
        };
        assert_eq!(
            placeholders(value),
            placeholders(translated),
            "placeholder mismatch for `{key}`"
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    messages(src).into_iter().map(|(k, _)| k).collect()
}

fn messages(src: &str) -> Vec<(String, String)> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| {
            let (left, right) = line.split_once('=')?;
            let key = left.trim();
            let valid = !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@');
            valid.then(|| (key.to_string(), right.trim().to_string()))
        })
        .collect()
}

/// `{ $name }` variables referenced by a message value.
fn placeholders(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = messages(src)
        .into_iter()
        .filter_map(|(key, _)| (!seen.insert(key.clone())).then_some(key))
        .collect();

    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}
