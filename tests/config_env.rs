//! Integration tests for configuration defaults and environment fallbacks.

#[path = "test_helpers/mod.rs"]
mod test_helpers;

use clap::Parser;
use helpboard::config::ServerConfig;
use test_helpers::HelpboardEnv;

#[test]
fn defaults_apply_without_flags_or_env() {
    let _env = HelpboardEnv::cleared();

    let config = ServerConfig::try_parse_from(["helpboard"]).expect("defaults parse");

    assert_eq!(config.bind.to_string(), "0.0.0.0:5001");
    assert_eq!(config.data_dir.as_str(), ".");
    assert_eq!(config.data_file, "data.json");
    assert_eq!(config.api_prefix, "/api");
    assert_eq!(config.log_filter, "info");
}

#[test]
fn environment_supplies_values_when_flags_are_absent() {
    let _env = HelpboardEnv::with(&[
        ("HELPBOARD_BIND", "127.0.0.1:9000"),
        ("HELPBOARD_DATA_DIR", "/srv/helpboard"),
        ("HELPBOARD_LOG", "helpboard=debug"),
    ]);

    let config = ServerConfig::try_parse_from(["helpboard"]).expect("environment parses");

    assert_eq!(config.bind.port(), 9000);
    assert_eq!(config.data_dir.as_str(), "/srv/helpboard");
    assert_eq!(config.log_filter, "helpboard=debug");
}

#[test]
fn flags_take_precedence_over_environment() {
    let _env = HelpboardEnv::with(&[("HELPBOARD_DATA_FILE", "from-env.json")]);

    let config = ServerConfig::try_parse_from(["helpboard", "--data-file", "from-flag.json"])
        .expect("flags parse");

    assert_eq!(config.data_file, "from-flag.json");
}
