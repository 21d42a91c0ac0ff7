//! Init command implementation.
//!
//! Writes an example devgate.toml into the current directory.

use crate::cli::InitArgs;
use crate::config::{DevgateConfig, CONFIG_FILE};
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use std::fs;
use std::path::Path;

/// Execute the init command.
pub async fn execute(args: InitArgs) -> Result<()> {
    let path = write_config(Path::new("."), args.force)?;
    ui::success(&format!("Wrote {}", path.display()));
    ui::info("Start the dev server with `devgate dev`");
    Ok(())
}

/// Write the example config into `dir`.
///
/// # Errors
///
/// Fails when the file exists and `force` is false.
pub fn write_config(dir: &Path, force: bool) -> Result<std::path::PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        return Err(CliError::InvalidArgument(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    fs::write(&path, DevgateConfig::example_config()?).with_path(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), false).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("envPrefix"));
        assert!(written.contains("[server]"));
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "root = \"keep\"\n").unwrap();

        let err = write_config(temp.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        let kept = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(kept, "root = \"keep\"\n");

        write_config(temp.path(), true).unwrap();
        let replaced = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert!(replaced.contains("envPrefix"));
    }
}
