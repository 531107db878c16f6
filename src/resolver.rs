//! Turns catalog definitions and environment entries into display records.
//!
//! [`resolve`] handles one catalog entry, [`scan_extras`] finds prefixed
//! variables the catalog does not list, and [`build_dump`] composes both.
//! Everything here is a pure function of the [`EnvSource`] snapshot and
//! the startup [`Settings`].

use serde::Serialize;

use crate::catalog::{self, Group, VariableDefinition};
use crate::config::Settings;
use crate::env::EnvSource;

const MASK: &str = "****";
const EXTRA_NOTE: &str = "extra";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableRecord {
    pub key: String,
    pub group: Group,
    pub sensitive: bool,
    pub note: String,
    pub status: Status,
    pub value: String,
}

impl VariableRecord {
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.status == Status::Missing
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvDump {
    pub fixed: Vec<VariableRecord>,
    pub extras: Vec<VariableRecord>,
}

/// Unset, empty, and whitespace-only values all count as missing.
#[must_use]
pub fn is_missing(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Length-bucketed partial mask. Lengths are counted in chars so that
/// multi-byte values are never split mid-codepoint.
#[must_use]
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let n = chars.len();
    let keep = match n {
        0..=4 => return MASK.to_string(),
        5..=10 => 2,
        _ => 3,
    };

    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[n - keep..].iter().collect();
    format!("{head}{MASK}{tail}")
}

#[must_use]
pub fn resolve(
    def: &VariableDefinition,
    env: &dyn EnvSource,
    settings: &Settings,
) -> VariableRecord {
    let raw = env.get(def.key);
    let (status, value) = match raw {
        Some(v) if !is_missing(Some(v.as_str())) => {
            let shown = if def.sensitive && settings.redact {
                mask(&v)
            } else {
                v
            };
            (Status::Ok, shown)
        }
        _ => (Status::Missing, settings.not_found_msg.clone()),
    };

    VariableRecord {
        key: def.key.to_string(),
        group: def.group,
        sensitive: def.sensitive,
        note: def.note.to_string(),
        status,
        value,
    }
}

/// Prefixed keys outside the catalog, sorted, never masked.
#[must_use]
pub fn scan_extras(
    env: &dyn EnvSource,
    is_catalogued: impl Fn(&str) -> bool,
    prefixes: &[String],
    not_found_msg: &str,
) -> Vec<VariableRecord> {
    let mut keys: Vec<String> = env
        .keys()
        .into_iter()
        .filter(|k| prefixes.iter().any(|p| k.starts_with(p.as_str())))
        .filter(|k| !is_catalogued(k.as_str()))
        .collect();
    keys.sort();
    keys.dedup();

    keys.into_iter()
        .map(|key| {
            let raw = env.get(&key);
            let (status, value) = match raw {
                Some(v) if !is_missing(Some(v.as_str())) => (Status::Ok, v),
                _ => (Status::Missing, not_found_msg.to_string()),
            };
            VariableRecord {
                key,
                group: Group::Extra,
                sensitive: false,
                note: EXTRA_NOTE.to_string(),
                status,
                value,
            }
        })
        .collect()
}

#[must_use]
pub fn build_dump(env: &dyn EnvSource, settings: &Settings) -> EnvDump {
    let fixed = catalog::CATALOG
        .iter()
        .map(|def| resolve(def, env, settings))
        .collect();
    let extras = scan_extras(
        env,
        catalog::contains,
        &settings.prefixes,
        &settings.not_found_msg,
    );

    EnvDump { fixed, extras }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NOT_FOUND_MSG;
    use crate::env::MapEnv;

    fn secret_def() -> VariableDefinition {
        VariableDefinition {
            key: "APP_API_KEY",
            group: Group::Secret,
            sensitive: true,
            note: "api key",
        }
    }

    fn redacting() -> Settings {
        Settings {
            redact: true,
            ..Settings::default()
        }
    }

    #[test]
    fn mask_short_reveals_nothing() {
        assert_eq!(mask(""), "****");
        assert_eq!(mask("a"), "****");
        assert_eq!(mask("abcd"), "****");
    }

    #[test]
    fn mask_medium_keeps_two_each_side() {
        assert_eq!(mask("abcde"), "ab****de");
        assert_eq!(mask("abcdefgh"), "ab****gh");
        assert_eq!(mask("abcdefghij"), "ab****ij");
    }

    #[test]
    fn mask_long_keeps_three_each_side() {
        assert_eq!(mask("abcdefghijk"), "abc****ijk");
        assert_eq!(mask("abcdefghijklmnop"), "abc****nop");
    }

    #[test]
    fn mask_counts_chars_not_bytes() {
        assert_eq!(mask("ñandú"), "ña****dú");
    }

    #[test]
    fn missing_covers_blank_values() {
        assert!(is_missing(None));
        assert!(is_missing(Some("")));
        assert!(is_missing(Some("   ")));
        assert!(is_missing(Some("\t\n")));
        assert!(!is_missing(Some(" x ")));
    }

    #[test]
    fn resolve_unset_is_missing() {
        let record = resolve(&secret_def(), &MapEnv::new(), &redacting());
        assert_eq!(record.status, Status::Missing);
        assert_eq!(record.value, NOT_FOUND_MSG);
    }

    #[test]
    fn resolve_blank_is_missing() {
        for blank in ["", "   "] {
            let env: MapEnv = [("APP_API_KEY", blank)].into_iter().collect();
            let record = resolve(&secret_def(), &env, &redacting());
            assert!(record.is_missing());
            assert_eq!(record.value, NOT_FOUND_MSG);
        }
    }

    #[test]
    fn resolve_masks_sensitive_when_redacting() {
        let env: MapEnv = [("APP_API_KEY", "abcdefghijklmnop")].into_iter().collect();
        let record = resolve(&secret_def(), &env, &redacting());
        assert_eq!(record.status, Status::Ok);
        assert_eq!(record.value, "abc****nop");
    }

    #[test]
    fn resolve_shows_raw_when_not_redacting() {
        let env: MapEnv = [("APP_API_KEY", "abcdefghijklmnop")].into_iter().collect();
        let record = resolve(&secret_def(), &env, &Settings::default());
        assert_eq!(record.value, "abcdefghijklmnop");

        let env: MapEnv = [("APP_API_KEY", "ab")].into_iter().collect();
        let record = resolve(&secret_def(), &env, &Settings::default());
        assert_eq!(record.value, "ab");
    }

    #[test]
    fn resolve_never_masks_non_sensitive() {
        let def = VariableDefinition {
            key: "APP_NAME",
            group: Group::Config,
            sensitive: false,
            note: "name",
        };
        let env: MapEnv = [("APP_NAME", "envboard-demo")].into_iter().collect();
        let record = resolve(&def, &env, &redacting());
        assert_eq!(record.value, "envboard-demo");
        assert_eq!(record.note, "name");
        assert_eq!(record.group, Group::Config);
    }

    #[test]
    fn extras_filter_exclude_and_sort() {
        let env: MapEnv = [
            ("LEAK_BAR", "2"),
            ("APP_FOO", "1"),
            ("APP_NAME", "demo"),
            ("HOME", "/root"),
            ("app_lower", "x"),
        ]
        .into_iter()
        .collect();
        let settings = Settings::default();

        let extras = scan_extras(
            &env,
            catalog::contains,
            &settings.prefixes,
            &settings.not_found_msg,
        );
        let keys: Vec<&str> = extras.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["APP_FOO", "LEAK_BAR"]);
        assert!(extras.iter().all(|r| r.group == Group::Extra));
        assert!(extras.iter().all(|r| r.note == "extra" && !r.sensitive));
    }

    #[test]
    fn extras_are_never_masked() {
        let env: MapEnv = [("LEAK_TOKEN", "supersecretvalue")].into_iter().collect();
        let dump = build_dump(&env, &redacting());
        assert_eq!(dump.extras.len(), 1);
        assert_eq!(dump.extras[0].value, "supersecretvalue");
    }

    #[test]
    fn extras_blank_is_missing() {
        let env: MapEnv = [("APP_EMPTY", " ")].into_iter().collect();
        let dump = build_dump(&env, &Settings::default());
        assert_eq!(dump.extras[0].status, Status::Missing);
        assert_eq!(dump.extras[0].value, NOT_FOUND_MSG);
    }

    #[test]
    fn dump_follows_catalog_order() {
        let dump = build_dump(&MapEnv::new(), &Settings::default());
        let keys: Vec<&str> = dump.fixed.iter().map(|r| r.key.as_str()).collect();
        let expected: Vec<&str> = catalog::CATALOG.iter().map(|d| d.key).collect();
        assert_eq!(keys, expected);
        assert!(dump.fixed.iter().all(VariableRecord::is_missing));
        assert!(dump.extras.is_empty());
    }

    #[test]
    fn records_serialize_lowercase_enums() {
        let env: MapEnv = [("APP_NAME", "demo")].into_iter().collect();
        let dump = build_dump(&env, &Settings::default());
        let json = serde_json::to_value(&dump.fixed[0]).unwrap();
        assert_eq!(json["group"], "config");
        assert_eq!(json["status"], "ok");
        assert_eq!(json["value"], "demo");
    }
}
