use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command: write `cfg` (defaults plus any command-line
/// hour overrides) to `path`.
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if cfg.save_to(path, *force)? {
            success(format!("Config file: {}", path.display()));
        } else {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }

    Ok(())
}
