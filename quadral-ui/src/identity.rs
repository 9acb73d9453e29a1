//! Cached identity record
//!
//! Exactly one identity is cached at a time (single-user client). The record
//! is a small JSON file inside the data directory; a missing or corrupt file
//! reads as "no identity", which the workflow answers by asking the user to
//! (re)register rather than failing.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use quadral_common::socionics::{resolve_quadra, Quadra};
use quadral_common::{Error, Result};

/// File name of the identity record inside the data directory
pub const IDENTITY_FILE: &str = "identity.json";

/// The logged-in user's identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: i64,
    /// TIM code as reported by the service on registration
    pub socionics_type: String,
    /// Quadra, backfilled from the TIM when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadra: Option<Quadra>,
}

/// Handle to the single cached identity record
///
/// Explicitly constructed with a data directory so tests can point it at an
/// isolated location.
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(IDENTITY_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the cached record.
    ///
    /// An identity with an empty TIM is dropped without error: there is
    /// nothing the workflow could later resolve from it. A record missing
    /// its quadra has it computed from the TIM and stored alongside, so
    /// later loads skip re-derivation.
    pub fn save(&self, identity: &Identity) -> Result<()> {
        if identity.socionics_type.is_empty() {
            tracing::warn!("Refusing to cache identity without a socionics type");
            return Ok(());
        }

        let mut record = identity.clone();
        if record.quadra.is_none() {
            record.quadra = resolve_quadra(&record.socionics_type);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&record)
            .map_err(|e| Error::Internal(format!("Failed to serialize identity: {e}")))?;
        fs::write(&self.path, text)?;

        tracing::debug!(path = %self.path.display(), user_id = record.user_id, "Cached identity");
        Ok(())
    }

    /// Load the cached record, or `None` when absent or corrupt.
    pub fn load(&self) -> Option<Identity> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "Failed to parse cached identity");
                None
            }
        }
    }

    /// Return the identity's quadra, resolving and persisting it if absent.
    ///
    /// `None` means the TIM itself is unresolvable — the signal surfaced to
    /// the user as "update your profile".
    pub fn ensure_quadra(&self, identity: &mut Identity) -> Option<Quadra> {
        if let Some(quadra) = identity.quadra {
            return Some(quadra);
        }

        let resolved = resolve_quadra(&identity.socionics_type)?;
        identity.quadra = Some(resolved);
        if let Err(error) = self.save(identity) {
            // Resolution still succeeded; the next load re-derives
            tracing::warn!(%error, "Failed to persist backfilled quadra");
        }
        Some(resolved)
    }
}
