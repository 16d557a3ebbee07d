use std::path::Path;

use anyhow::Context;
use roster_core::config::{self as core_config, CONFIG_FILE};
use roster_core::RosterConfig;

pub fn load(explicit: Option<&Path>) -> anyhow::Result<RosterConfig> {
    resolve(explicit, Path::new(CONFIG_FILE))
}

/// An explicit `--config` path must exist; the implicit one is optional.
fn resolve(explicit: Option<&Path>, implicit: &Path) -> anyhow::Result<RosterConfig> {
    match explicit {
        Some(path) => core_config::read_config(path)
            .with_context(|| format!("reading config {}", path.display())),
        None => core_config::load_or_default(implicit)
            .with_context(|| format!("reading config {}", implicit.display())),
    }
}
