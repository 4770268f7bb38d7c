use crate::paths::{global_config_path, local_config_path};

/// Load config file content from CWD first, then the user config directory
///
/// Searches for:
/// 1. `.gh-git-data.toml` in the current working directory
/// 2. `gh-git-data/config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    for path in [local_config_path(), global_config_path()]
        .into_iter()
        .flatten()
    {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}
