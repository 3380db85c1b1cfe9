use std::collections::BTreeSet;

/// Translation completeness test over the embedded FTL sources.
/// Ensures every non-fallback locale provides *at least* the keys present
/// in the fallback (en-US) `sproutglow-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/sproutglow-ui.ftl`
/// 2. Copy all keys from `en-US/sproutglow-ui.ftl`
/// 3. Register it in the `locales` list below.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/sproutglow-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/sproutglow-ui.ftl");

    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );

    let locales: &[(&str, &str)] = &[
        ("es-ES", ES_ES),
        // Add new locales here.
    ];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.difference(&keys).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale}: missing {missing:?}"));
        }
    }

    assert!(
        failures.is_empty(),
        "Locales missing keys:\n{}",
        failures.join("\n")
    );
}

fn extract_keys(src: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line.split_at(eq_pos).0.trim();
            if !id.is_empty()
                && id
                    .chars()
                    .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
            {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}
