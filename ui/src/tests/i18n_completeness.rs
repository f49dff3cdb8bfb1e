use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config;
use crate::i18n::{option_description_key, option_title_key};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "brightbuds_ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

const FALLBACK: &str = "en";

/// Message IDs defined in a Fluent file. Any line of the form `<id> =` counts;
/// comments, group headers and terms are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal `t!("...")` keys used under `src/`. Keys built at runtime
/// (catalog titles) are checked separately against the embedded catalog.
fn literal_keys_in_sources(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("t!(\"") {
            rest = &rest[pos + 4..];
            let Some(end) = rest.find('"') else { break };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }

    found
}

fn locale_files(i18n_root: &Path) -> BTreeMap<String, BTreeSet<String>> {
    let mut locales = BTreeMap::new();
    let Ok(read_dir) = fs::read_dir(i18n_root) else {
        return locales;
    };
    for entry in read_dir.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        let file = path.join(FTL_FILENAME);
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|_| panic!("locale folder {name:?} is missing {FTL_FILENAME}"));
        locales.insert(name.to_string(), parse_ftl_keys(&content));
    }
    locales
}

fn catalog_keys() -> BTreeSet<String> {
    let config = config::embedded().expect("embedded catalog must load");
    let mut keys = BTreeSet::new();
    for (position, option) in config.catalog.options().iter().enumerate() {
        keys.insert(option_title_key(position));
        if option.description.is_some() {
            keys.insert(option_description_key(position));
        }
    }
    keys
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let locales = locale_files(&crate_root.join(I18N_DIR));

    let fallback_keys = locales
        .get(FALLBACK)
        .unwrap_or_else(|| panic!("missing fallback locale directory `{FALLBACK}`"));
    assert!(!fallback_keys.is_empty(), "fallback FTL defines no messages");

    // Everything the code can ask for must exist in the fallback.
    let mut required = literal_keys_in_sources(&crate_root.join("src"));
    required.extend(catalog_keys());
    let missing_in_fallback: Vec<_> = required.difference(fallback_keys).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "keys referenced but missing in `{FALLBACK}`:\n{}",
        missing_in_fallback.join("\n")
    );

    // Lookups never fall back per key, so every locale needs every message.
    let mut report = String::new();
    for (locale, keys) in &locales {
        let missing: Vec<_> = fallback_keys.difference(keys).cloned().collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {locale} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
    }
    assert!(report.is_empty(), "locales with missing translations:\n{report}");

    let unused: Vec<_> = fallback_keys.difference(&required).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback keys not referenced: {}", unused.join(", "));
    }
}

#[test]
fn exactly_the_supported_locales_ship() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let locales: Vec<_> = locale_files(&crate_root.join(I18N_DIR)).into_keys().collect();
    let supported: Vec<_> = crate::core::locale::Locale::ALL
        .iter()
        .map(|l| l.tag().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    assert_eq!(locales, supported);
}
