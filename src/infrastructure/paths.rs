//! Path manipulation utilities for Zellij sandbox environment.
//!
//! In Zellij's plugin environment `/host` points to the cwd of the last focused
//! terminal, or the folder where Zellij was started. Configured paths are
//! written from the user's point of view (`~/docs/katusa.json`), so they are
//! translated into sandbox paths before use.

use std::path::{Path, PathBuf};

/// Returns the data directory for bookmark and preference files.
///
/// Resolves to `/host/.local/share/zellij/refdoc`, which is usually
/// `~/.local/share/zellij/refdoc` on the host.
///
/// # Examples
///
/// ```
/// use refdoc::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str().unwrap(), "/host/.local/share/zellij/refdoc");
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("refdoc")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use refdoc::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/docs"), "/host/docs");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Resolves a user-supplied path to a sandbox path.
///
/// Tilde paths map under `/host`, relative paths are taken relative to
/// `/host`, absolute paths are kept.
///
/// ```
/// use refdoc::infrastructure::resolve_host_path;
/// use std::path::Path;
///
/// assert_eq!(resolve_host_path("docs/a.json"), Path::new("/host/docs/a.json"));
/// assert_eq!(resolve_host_path("~/a.json"), Path::new("/host/a.json"));
/// ```
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path.trim());
    let candidate = Path::new(&expanded);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        Path::new("/host").join(candidate)
    }
}

/// Removes the `/host` prefix so paths read as they do on the host.
///
/// # Examples
///
/// ```
/// use refdoc::infrastructure::display_path;
/// use std::path::Path;
///
/// assert_eq!(display_path(Path::new("/host/docs/a.json")), "~/docs/a.json");
/// assert_eq!(display_path(Path::new("/absolute/path")), "/absolute/path");
/// ```
#[must_use]
pub fn display_path(path: &Path) -> String {
    path.strip_prefix("/host").map_or_else(
        |_| path.display().to_string(),
        |rest| format!("~/{}", rest.display()),
    )
}
