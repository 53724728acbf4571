use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::competition::{CompetitionId, SeasonId};
use crate::domain::fixture::MatchId;
use crate::domain::repositories::{RepositoryError, RepositoryResult};

/// Read-only handle on the data directory
///
/// ```text
/// <root>/competitions.json
/// <root>/matches/<competition_id>/<season_id>.json
/// <root>/lineups/<match_id>.json
/// ```
///
/// Paths are built only from typed numeric ids, so no request can reach
/// outside `root`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn competitions_path(&self) -> PathBuf {
        self.root.join("competitions.json")
    }

    pub fn season_path(&self, competition_id: CompetitionId, season_id: SeasonId) -> PathBuf {
        self.root
            .join("matches")
            .join(competition_id.to_string())
            .join(format!("{}.json", season_id))
    }

    pub fn lineup_path(&self, match_id: MatchId) -> PathBuf {
        self.root.join("lineups").join(format!("{}.json", match_id))
    }

    /// Reads and parses one JSON document
    pub async fn read<T: DeserializeOwned>(&self, path: PathBuf) -> RepositoryResult<T> {
        tracing::debug!(path = %path.display(), "Reading data file");

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound { path });
            }
            Err(source) => return Err(RepositoryError::Unreadable { path, source }),
        };

        serde_json::from_str(&raw)
            .map_err(|source| RepositoryError::Malformed { path, source })
    }
}
