//! Tests for field resolution and derived values.

use std::time::Duration;

use rstest::rstest;

use super::helpers::valid_config;
use crate::IssuebotConfig;
use crate::chat::TlsMode;
use crate::config::ConfigError;
use crate::github::{IssueCoordinate, IssueNumber};
use crate::reference::{Candidate, Resolution};
use crate::relay::Identity;

#[rstest]
fn resolve_token_returns_value_when_present() {
    let config = IssuebotConfig {
        github_token: Some("my-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_token().ok(), Some("my-token".to_owned()));
}

#[rstest]
fn resolve_token_returns_error_when_none() {
    // Lock and clear GITHUB_TOKEN to ensure test isolation
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = IssuebotConfig::default();

    assert_eq!(config.resolve_token(), Err(ConfigError::MissingToken));
}

#[rstest]
fn resolve_token_falls_back_to_legacy_variable() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = IssuebotConfig::default();

    assert_eq!(config.resolve_token().ok(), Some("legacy-token".to_owned()));
}

#[rstest]
fn resolve_token_treats_blank_as_missing() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = IssuebotConfig {
        github_token: Some("   ".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_token(), Err(ConfigError::MissingToken));
}

#[rstest]
#[case::absent(None)]
#[case::blank(Some("  "))]
fn require_host_rejects_missing_host(#[case] host: Option<&str>) {
    let config = IssuebotConfig {
        irc_host: host.map(ToOwned::to_owned),
        ..Default::default()
    };

    assert_eq!(config.require_host(), Err(ConfigError::MissingHost));
}

#[rstest]
fn blank_nickname_falls_back_to_default() {
    let config = IssuebotConfig {
        irc_nickname: " ".to_owned(),
        ..valid_config()
    };

    assert_eq!(config.nickname(), "issuebot");
}

#[rstest]
#[case::plain(false, false, TlsMode::Disabled)]
#[case::skip_ignored_without_tls(false, true, TlsMode::Disabled)]
#[case::verified(true, false, TlsMode::Verified)]
#[case::insecure(true, true, TlsMode::InsecureSkipVerify)]
fn irc_settings_select_tls_mode(
    #[case] tls: bool,
    #[case] verify_skip: bool,
    #[case] expected: TlsMode,
) {
    let config = IssuebotConfig {
        irc_tls: Some(tls),
        irc_tls_verify_skip: Some(verify_skip),
        irc_password: Some(String::new()),
        irc_channels: vec!["#acme".to_owned()],
        ..valid_config()
    };

    let settings = config.irc_settings().expect("settings should build");

    assert_eq!(settings.tls, expected);
    assert_eq!(settings.host, "irc.example.net");
    assert_eq!(settings.port, 6667);
    assert_eq!(settings.password, None, "blank password should be dropped");
    assert_eq!(settings.channels, vec!["#acme".to_owned()]);
}

#[rstest]
fn resolver_uses_projects_and_defaults() {
    let config = IssuebotConfig {
        default_owner: Some("acme".to_owned()),
        ..valid_config()
    };

    let resolver = config.resolver().expect("resolver should build");

    assert_eq!(resolver.aliases().lookup("Widgets"), Some("acme/widgets"));
}

#[rstest]
fn ignore_list_matches_configured_names() {
    let config = IssuebotConfig {
        ignore: vec!["otherbot".to_owned()],
        ..valid_config()
    };

    let ignore = config.ignore_list();

    assert!(ignore.should_ignore(&Identity::new("otherbot", "bot")));
    assert!(!ignore.should_ignore(&Identity::new("alice", "alice")));
}

#[rstest]
fn lookup_timeout_is_expressed_in_seconds() {
    let config = IssuebotConfig {
        lookup_timeout_seconds: 3,
        ..valid_config()
    };

    assert_eq!(config.lookup_timeout(), Duration::from_secs(3));
}

#[rstest]
fn irc_settings_default_to_plain_tcp_when_tls_unset() {
    let settings = valid_config()
        .irc_settings()
        .expect("settings should build");

    assert_eq!(settings.tls, TlsMode::Disabled);
}

#[rstest]
fn resolver_trims_padded_default_owner() {
    let config = IssuebotConfig {
        projects: Vec::new(),
        default_owner: Some("acme ".to_owned()),
        default_repo: Some(" acme/widgets ".to_owned()),
        ..valid_config()
    };
    assert_eq!(config.validate(), Ok(()));

    let resolver = config.resolver().expect("resolver should build");

    assert_eq!(
        resolver.resolve(&Candidate::new(Some("gadgets"), "3")),
        Resolution::Resolved(coordinate("acme/gadgets", "3"))
    );
    assert_eq!(
        resolver.resolve(&Candidate::new(None, "99")),
        Resolution::Resolved(coordinate("acme/widgets", "99"))
    );
}

fn coordinate(owner_repo: &str, number: &str) -> IssueCoordinate {
    IssueCoordinate::from_owner_repo(
        owner_repo,
        IssueNumber::parse(number).expect("number should parse"),
    )
    .expect("coordinate should build")
}
