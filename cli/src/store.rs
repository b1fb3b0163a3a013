//! File-backed token store: one `jwt_token` file in a state directory.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use authflow::{TOKEN_KEY, Token, TokenStore};

/// `~/.gatehouse`, or `./.gatehouse` when `HOME` is unset.
pub(crate) fn default_state_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gatehouse")
}

#[derive(Clone, Debug)]
pub(crate) struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub(crate) fn path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<Token> {
        match fs::read_to_string(self.path()) {
            Ok(raw) => Token::new(raw.trim()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path().display(), error = %e, "failed to read token");
                None
            }
        }
    }

    fn set(&self, token: &Token) {
        let written = fs::create_dir_all(&self.dir).and_then(|()| fs::write(self.path(), token.as_str()));
        if let Err(e) = written {
            tracing::warn!(path = %self.path().display(), error = %e, "failed to save token");
        }
    }

    fn clear(&self) {
        match fs::remove_file(self.path()) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path().display(), error = %e, "failed to remove token");
            }
        }
    }
}
