use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use dialoguer::{Confirm, theme::ColorfulTheme};
use pulse_report::config::ensure_config_file_exists;
use std::path::Path;

pub fn execute(config_path: String, force: bool) -> Result<()> {
    let path = Path::new(&config_path);
    ui::section_header("Pulse Configuration Setup");

    let overwrite = if path.exists() && !force {
        ui::warning_message(&format!("{} already exists", path.display()));
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Overwrite it with the default configuration?")
            .default(false)
            .interact()?
    } else {
        force
    };

    if path.exists() && !overwrite {
        ui::info_message("Keeping the existing configuration");
        return Ok(());
    }

    ui::status_message("Creating configuration file...");
    let created = write_config(path, overwrite)?;
    if !created {
        return Err(CliError::Other(format!(
            "{} was not written",
            path.display()
        )));
    }

    ui::success_message("Configuration file created successfully!");
    ui::info_message(&format!(
        "Edit {} to point base_url at your report backend",
        path.display()
    ));
    Ok(())
}

fn write_config(path: &Path, overwrite: bool) -> Result<bool> {
    ensure_config_file_exists(path, overwrite)
        .with_context(|| format!("Failed to create {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_report::PulseConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("pulse.toml");

        execute(path.to_string_lossy().to_string(), false).unwrap();

        let config = PulseConfig::load_from_file(&path).unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert!(!config.render.escape_html);
    }

    #[test]
    fn test_force_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pulse.toml");
        fs::write(&path, "[backend]\nbase_url = \"http://old:1\"\n").unwrap();

        execute(path.to_string_lossy().to_string(), true).unwrap();

        let config = PulseConfig::load_from_file(&path).unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
    }
}
