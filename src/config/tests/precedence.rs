//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"irc_host": "default-host"})), ("file", json!({"irc_host": "file-host"}))],
    "irc_host",
    "file-host",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"github_token": "file-token"})), ("environment", json!({"github_token": "env-token"}))],
    "github_token",
    "env-token",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"default_owner": "env-owner"})), ("cli", json!({"default_owner": "cli-owner"}))],
    "default_owner",
    "cli-owner",
    "CLI should override environment"
)]
#[case::default_repo_defaults_file_env_cli(
    vec![
        ("defaults", json!({"default_repo": "a/default"})),
        ("file", json!({"default_repo": "a/file"})),
        ("environment", json!({"default_repo": "a/env"})),
        ("cli", json!({"default_repo": "a/cli"}))
    ],
    "default_repo",
    "a/cli",
    "CLI should win for default_repo"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    let actual = match field {
        "irc_host" => config.irc_host.as_deref(),
        "github_token" => config.github_token.as_deref(),
        "default_owner" => config.default_owner.as_deref(),
        "default_repo" => config.default_repo.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn file_layer_supplies_lists() {
    let config = build_config_from_layers(&[(
        "file",
        json!({
            "irc_channels": ["#acme", "#ops"],
            "ignore": ["otherbot"],
            "projects": ["acme/widgets"]
        }),
    )]);

    assert_eq!(config.irc_channels, vec!["#acme".to_owned(), "#ops".to_owned()]);
    assert_eq!(config.ignore, vec!["otherbot".to_owned()]);
    assert_eq!(config.projects, vec!["acme/widgets".to_owned()]);
}

#[rstest]
fn unset_fields_keep_defaults() {
    let config = build_config_from_layers(&[("file", json!({"irc_host": "irc.example.net"}))]);

    assert_eq!(config.irc_port, 6667);
    assert_eq!(config.irc_nickname, "issuebot");
    assert_eq!(config.github_api_base, "https://api.github.com");
    assert_eq!(config.lookup_timeout_seconds, 10);
    assert_eq!(config.irc_tls, None);
}
