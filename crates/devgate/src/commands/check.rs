//! Check command implementation.
//!
//! Validates configuration without starting a server.

use crate::cli::CheckArgs;
use crate::config::{ConfigOverrides, DevgateConfig, CONFIG_FILE};
use crate::error::Result;
use crate::ui;
use std::path::Path;

/// Execute the check command.
///
/// Prints the resolved configuration (or the JSON schema with `--schema`)
/// to stdout.
pub async fn execute(args: CheckArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

/// Produce the text `check` prints.
pub fn render(args: &CheckArgs) -> Result<String> {
    if args.schema {
        return Ok(serde_json::to_string_pretty(&DevgateConfig::json_schema())?);
    }

    if args.config.is_none() && !Path::new(CONFIG_FILE).is_file() {
        ui::warning(&format!("No {} found, using defaults", CONFIG_FILE));
    }

    let config = DevgateConfig::load(&ConfigOverrides::default(), args.config.as_deref())?;
    config.validate()?;

    if !config.root.is_dir() {
        ui::warning(&format!(
            "Root directory {} does not exist yet",
            config.root.display()
        ));
    }

    ui::success("Configuration is valid!");
    Ok(serde_json::to_string_pretty(&config)?)
}
