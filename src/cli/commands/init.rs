use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration file unless
/// one already exists.
pub fn handle(path: &Path) -> AppResult<()> {
    if Config::init_at(path)? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!("Config file already exists: {}", path.display()));
    }
    Ok(())
}
