use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;

const TOKEN_FILE: &str = "access_token";

/// Durable home of the bearer token. The token survives restarts and is
/// removed only by an explicit logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    /// Store rooted at the platform data directory.
    pub fn open() -> io::Result<Self> {
        let proj = ProjectDirs::from("com", "jobtrack", "jobtrack")
            .ok_or_else(|| io::Error::other("unable to resolve a data directory"))?;
        let dir = proj.data_dir().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "token store opened");
        Ok(Self { dir })
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    /// Read the stored token. A missing or unreadable file means "no token";
    /// it is never surfaced as an error.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(self.token_path()) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored token");
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.token_path(), token)
    }

    /// Remove the token file. Already-absent is fine.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(self.token_path()) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::at(dir.path());

        assert_eq!(store.load(), None);
        store.save("t0ken").expect("save");
        assert_eq!(store.load(), Some("t0ken".to_string()));
    }

    #[test]
    fn load_trims_whitespace_and_ignores_empty_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::at(dir.path());

        store.save("  abc\n").expect("save");
        assert_eq!(store.load(), Some("abc".to_string()));

        store.save("   \n").expect("save");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_removes_the_token_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::at(dir.path());

        store.save("abc").expect("save");
        store.clear().expect("clear");
        assert_eq!(store.load(), None);
        store.clear().expect("second clear is fine");
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::at(dir.path().join("nested/data"));

        store.save("abc").expect("save");
        assert_eq!(store.load(), Some("abc".to_string()));
    }
}
