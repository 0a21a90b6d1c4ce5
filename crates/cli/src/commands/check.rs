//! Check command: report where the configuration came from.

use anyhow::Result;
use stratum_config::{ResolvedConfig, Schema};

pub fn render(config: &ResolvedConfig) -> String {
    let schema = Schema::compose(config.capabilities());
    let names: Vec<&str> = schema.sections().iter().map(|s| s.name).collect();

    let mut out = String::new();
    out.push_str(&format!("source: {}\n", config.origin()));
    out.push_str(&format!("capabilities: {}\n", config.capabilities()));
    out.push_str(&format!("sections: {}\n", names.join(", ")));
    out.push_str(&format!("keys: {}\n", config.document().len()));
    out
}

pub fn run(config: &ResolvedConfig) -> Result<()> {
    print!("{}", render(config));
    Ok(())
}
