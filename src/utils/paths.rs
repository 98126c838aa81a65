use std::path::{Path, PathBuf};

use anyhow::Result;

use super::environment::get_data_dir;

const DATABASE_FILENAME: &str = "history.db";
const LOG_FILENAME: &str = "github-topics.log";

/// `<data dir>/history.db`
pub fn default_database_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(DATABASE_FILENAME))
}

/// `<data dir>/github-topics.log`
pub fn default_log_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(LOG_FILENAME))
}

/// Formats a path with `~` in place of the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use github_topics::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.local/share/github-topics/history.db");
/// // "~/.local/share/github-topics/history.db" when the home dir is /home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_with_home(path, dirs::home_dir().as_deref())
}

fn format_with_home(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_under_home() {
        let home = Path::new("/home/tester");
        let path = Path::new("/home/tester/.local/share/github-topics/history.db");
        assert_eq!(
            format_with_home(path, Some(home)),
            "~/.local/share/github-topics/history.db"
        );
    }

    #[test]
    fn test_format_home_itself() {
        let home = Path::new("/home/tester");
        assert_eq!(format_with_home(home, Some(home)), "~");
    }

    #[test]
    fn test_format_outside_home() {
        let home = Path::new("/home/tester");
        assert_eq!(format_with_home(Path::new("/var/lib/db"), Some(home)), "/var/lib/db");
        // prefix match must be on whole components
        assert_eq!(
            format_with_home(Path::new("/home/tester2/db"), Some(home)),
            "/home/tester2/db"
        );
    }

    #[test]
    fn test_format_without_home() {
        assert_eq!(format_with_home(Path::new("/a/b"), None), "/a/b");
    }
}
