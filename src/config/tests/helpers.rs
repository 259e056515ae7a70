//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::IssuebotConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Helper to compose an [`IssuebotConfig`] from a sequence of `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> IssuebotConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    IssuebotConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// A configuration that passes validation.
pub fn valid_config() -> IssuebotConfig {
    IssuebotConfig {
        irc_host: Some("irc.example.net".to_owned()),
        github_token: Some("ghp_example".to_owned()),
        projects: vec!["acme/widgets".to_owned()],
        ..Default::default()
    }
}
