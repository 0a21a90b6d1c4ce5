//! Show command: print the resolved configuration.
//!
//! Responsibilities:
//! - Render the merged document as nested YAML or JSON.
//!
//! Does NOT handle:
//! - Revealing credentials; secret fields always render as the redaction placeholder.

use anyhow::{Context, Result};
use stratum_config::ResolvedConfig;

use crate::args::OutputFormat;

pub fn render(config: &ResolvedConfig, format: OutputFormat) -> Result<String> {
    let tree = config
        .document()
        .to_tree(true)
        .context("Failed to render configuration")?;
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(&tree).context("Failed to render YAML"),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&tree).context("Failed to render JSON")?;
            out.push('\n');
            Ok(out)
        }
    }
}

pub fn run(config: &ResolvedConfig, format: OutputFormat) -> Result<()> {
    print!("{}", render(config, format)?);
    Ok(())
}
