use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieUserState {
    pub rating: u8,
    pub watched: bool,
}

/// Per-movie edits layered over the static catalog, keyed by movie id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub movies: BTreeMap<u32, MovieUserState>,
}

impl UserState {
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
