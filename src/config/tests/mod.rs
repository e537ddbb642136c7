//! Unit tests for configuration loading and precedence.


use ortho_config::MergeComposer;
use serde_json::Value;

use crate::PullsiftConfig;

/// Source a configuration fragment arrives from, lowest precedence first.
#[derive(Debug, Clone, Copy)]
enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `layers` in the order given, the way `PullsiftConfig::load` would.
fn compose(layers: impl IntoIterator<Item = (Layer, Value)>) -> PullsiftConfig {
    let mut composer = MergeComposer::new();
    for (layer, value) in layers {
        match layer {
            Layer::Defaults => composer.push_defaults(value),
            Layer::File => composer.push_file(value, None),
            Layer::Environment => composer.push_environment(value),
            Layer::Cli => composer.push_cli(value),
        }
    }
    PullsiftConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}
