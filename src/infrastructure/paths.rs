//! Path resolution for the Zellij sandbox.

use std::path::PathBuf;

/// Mount point of the host filesystem inside the sandbox.
pub const HOST_ROOT: &str = "/host";

/// Directory holding the trace file: `~/.local/share/zellij/zmarks` on the
/// host.
///
/// ```
/// use zmarks::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zmarks"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/zmarks")
}

/// Maps a user-supplied `~` path to its location under [`HOST_ROOT`].
///
/// Only a leading `~` or `~/` is rewritten; `~user` forms are left alone.
///
/// ```
/// use zmarks::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
