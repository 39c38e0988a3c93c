use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{error::PersistError, model::UserState};

/// The user's edits, kept as a JSON file next to the catalog.
#[derive(Debug, Clone)]
pub struct UserStateFile {
    path: PathBuf,
}

impl UserStateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        UserStateFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file means the user has not edited anything yet.
    pub fn load(&self) -> Result<UserState, PersistError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No stored user state at {:?}", self.path);
                return Ok(UserState::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let state: UserState = serde_json::from_str(&content)?;
        log::info!("User state loaded from {:?}", self.path);
        Ok(state)
    }

    pub fn save(&self, state: &UserState) -> Result<(), PersistError> {
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content).map_err(|source| self.io_error(source))?;
        log::info!("User state saved to {:?}", self.path);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), PersistError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("User state cleared at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
