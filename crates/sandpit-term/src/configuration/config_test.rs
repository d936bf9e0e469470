use super::*;

#[test]
fn set_and_get_round_trip() {
    Config::set(ConfigKey::Theme, "light");
    assert_eq!(Config::get(ConfigKey::Theme), "light");
}

#[test]
fn defaults_cover_every_key() {
    for key in ConfigKey::iter() {
        assert!(!Config::default(key).is_empty(), "no default for {key}");
    }
}

#[test]
fn keys_serialize_in_kebab_case() {
    assert_eq!(ConfigKey::OutputHeight.to_string(), "output-height");
    assert_eq!(ConfigKey::ConfigFile.to_string(), "config-file");
}

#[test]
fn serialized_defaults_skip_the_config_file_key() {
    let serialized = Config::serialize_default();
    assert!(serialized.contains("language = \"python\""));
    assert!(serialized.contains("output-height = 15"));
    assert!(serialized.contains("theme = \"dark\""));
    assert!(!serialized.contains("config-file"));
}
