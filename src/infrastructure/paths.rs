//! Filesystem locations used by the client.

use std::path::PathBuf;

/// Application directory name under the platform data directory.
const APP_DIR: &str = "urbanfy";

/// Returns the directory for logs and other local files.
///
/// Resolution order:
/// 1. `URBANFY_DATA_DIR`
/// 2. `$XDG_DATA_HOME/urbanfy`
/// 3. `$HOME/.local/share/urbanfy`
/// 4. `./.urbanfy`
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        std::env::var_os("URBANFY_DATA_DIR").map(PathBuf::from),
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        home_dir(),
    )
}

fn resolve_data_dir(explicit: Option<PathBuf>, xdg: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();

    if let Some(dir) = explicit.filter(non_empty) {
        return dir;
    }
    if let Some(dir) = xdg.filter(non_empty) {
        return dir.join(APP_DIR);
    }
    home.filter(non_empty).map_or_else(
        || PathBuf::from(".").join(format!(".{APP_DIR}")),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, home_dir())
}

fn expand_tilde_with(path: &str, home: Option<PathBuf>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };
    if path == "~" {
        home.display().to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).display().to_string()
    } else {
        path.to_string()
    }
}
