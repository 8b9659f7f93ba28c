//! JSON file roster.
//!
//! Members are stored as `{"members": [...]}` in a single file that is read
//! on every call and rewritten on every registration. A missing file is an
//! empty roster.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use teamforge_domain::{DomainError, Member, MemberRepository, NewMember, assign_ids};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

/// Errors from the JSON roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to access roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RosterFile {
    #[serde(default)]
    members: Vec<Member>,
}

/// Member roster persisted as a JSON file
pub struct JsonRosterRepository {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonRosterRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<RosterFile, RosterError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Roster {} not found, starting empty", self.path.display());
                return Ok(RosterFile::default());
            }
            Err(source) => {
                return Err(RosterError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| RosterError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn write(&self, roster: &RosterFile) -> Result<(), RosterError> {
        let io_error = |source| RosterError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let json = serde_json::to_vec_pretty(roster).map_err(|source| RosterError::Parse {
            path: self.path.clone(),
            source,
        })?;
        tokio::fs::write(&self.path, json).await.map_err(io_error)
    }
}

#[async_trait]
impl MemberRepository for JsonRosterRepository {
    type Error = RosterError;

    async fn list(&self) -> Result<Vec<Member>, Self::Error> {
        Ok(self.read().await?.members)
    }

    async fn add(&self, member: NewMember) -> Result<Member, Self::Error> {
        let added = self.add_bulk(vec![member]).await?;
        added
            .into_iter()
            .next()
            .ok_or_else(|| {
                DomainError::InvalidMember("registration produced no member".to_string()).into()
            })
    }

    async fn add_bulk(&self, members: Vec<NewMember>) -> Result<Vec<Member>, Self::Error> {
        let _guard = self.write_lock.lock().await;
        let mut roster = self.read().await?;

        let added = assign_ids(&roster.members, members)?;
        roster.members.extend(added.iter().cloned());

        self.write(&roster).await?;
        debug!(
            "Stored {} new members in {}",
            added.len(),
            self.path.display()
        );
        Ok(added)
    }
}
