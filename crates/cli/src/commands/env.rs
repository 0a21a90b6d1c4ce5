//! Env command: list every key with its override variable.

use anyhow::Result;
use stratum_config::{Capabilities, Schema};

pub fn render(capabilities: Capabilities) -> String {
    let pairs = Schema::compose(capabilities).env_keys();
    let width = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    pairs
        .iter()
        .map(|(key, var)| format!("{key:<width$}  {var}\n"))
        .collect()
}

pub fn run(capabilities: Capabilities) -> Result<()> {
    print!("{}", render(capabilities));
    Ok(())
}
