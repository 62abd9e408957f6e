//! Subcommand handlers for config actions.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::config::{self, Config, DEFAULT_CONFIG_TEMPLATE};

/// Handle config subcommand actions.
///
/// `config_path` is the `--config` override, if any.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let config = match Config::load(Some(path.as_path())) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            let stdout = io::stdout();
            if let Err(e) = show_config(&mut stdout.lock(), &config, &path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        ConfigAction::Init => match init_config(&path) {
            Ok(()) => println!("Created config file: {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                eprintln!("Config file already exists: {}", path.display());
                eprintln!("Use 'ascii-art config show' to view current settings.");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Print the effective configuration.
pub fn show_config<W: Write>(out: &mut W, config: &Config, path: &Path) -> io::Result<()> {
    writeln!(out, "Current configuration:")?;
    writeln!(out, "  Width: {}", config.render.width)?;
    writeln!(out, "  Cell aspect: {}", config.render.cell_aspect)?;
    writeln!(out, "  Filter: {}", config.render.filter.name())?;
    writeln!(out, "  Output file: {}", config.output.file.display())?;
    writeln!(
        out,
        "  Save: {}",
        if config.output.save { "yes" } else { "no" }
    )?;
    writeln!(out)?;

    if path.exists() {
        writeln!(out, "Config file: {} (exists)", path.display())
    } else {
        writeln!(out, "Config file: {} (not found)", path.display())
    }
}

/// Write the default config template to `path`.
///
/// Refuses to overwrite an existing file (`ErrorKind::AlreadyExists`).
pub fn init_config(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
}
