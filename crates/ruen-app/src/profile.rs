use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ruen_config::Config;

/// Profile picked up from the working directory when `--config` is not given
pub const DEFAULT_PROFILE: &str = "ruen.json";

fn load_profile(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Explicit profile, then `ruen.json` if present, then environment variables.
///
/// Runs before logging is set up, so the profile actually used is handed back
/// for the caller to report.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = path {
        return Ok((load_profile(path)?, Some(path.to_path_buf())));
    }

    let default_profile = Path::new(DEFAULT_PROFILE);
    if default_profile.exists() {
        return Ok((load_profile(default_profile)?, Some(default_profile.to_path_buf())));
    }

    Ok((Config::new(), None))
}
