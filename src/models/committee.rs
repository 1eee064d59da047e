//! Committee and checkpost descriptors
//!
//! A committee is the allocation owner's organization: a central office plus
//! zero or more subordinate checkposts. Descriptors are supplied by an
//! external collaborator (here: a JSON or YAML file) and are read-only inputs
//! to the planning core.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{TargetError, TargetResult};
use crate::models::ids::{CheckpostId, CommitteeId};

/// A subordinate collection point under a committee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpost {
    pub id: CheckpostId,
    pub name: String,
}

/// A market committee: central office plus its checkpost roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committee {
    pub id: CommitteeId,
    pub name: String,
    #[serde(default)]
    pub checkposts: Vec<Checkpost>,
}

impl Committee {
    /// Create a committee with no checkposts
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CommitteeId::new(),
            name: name.into(),
            checkposts: Vec::new(),
        }
    }

    /// Load a committee descriptor from a JSON or YAML file
    ///
    /// The format is chosen by file extension; anything other than
    /// `.yaml`/`.yml` is parsed as JSON.
    pub fn load(path: &Path) -> TargetResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let committee: Committee = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            _ => serde_json::from_str(&contents)?,
        };
        committee.validate()?;
        Ok(committee)
    }

    /// The stable ids of all checkposts, in roster order
    pub fn checkpost_ids(&self) -> Vec<CheckpostId> {
        self.checkposts.iter().map(|cp| cp.id).collect()
    }

    /// Look up a checkpost by id
    pub fn checkpost(&self, id: CheckpostId) -> Option<&Checkpost> {
        self.checkposts.iter().find(|cp| cp.id == id)
    }

    /// Look up a checkpost by name (case-insensitive)
    pub fn checkpost_by_name(&self, name: &str) -> Option<&Checkpost> {
        self.checkposts
            .iter()
            .find(|cp| cp.name.eq_ignore_ascii_case(name))
    }

    /// Validate the descriptor: non-empty name, no duplicate checkpost ids
    pub fn validate(&self) -> TargetResult<()> {
        if self.name.trim().is_empty() {
            return Err(TargetError::Validation(
                "Committee name cannot be empty".into(),
            ));
        }

        let mut seen = BTreeSet::new();
        for cp in &self.checkposts {
            if cp.name.trim().is_empty() {
                return Err(TargetError::Validation(
                    "Checkpost name cannot be empty".into(),
                ));
            }
            if !seen.insert(cp.id) {
                return Err(TargetError::Validation(format!(
                    "Duplicate checkpost id: {}",
                    cp.id
                )));
            }
        }

        Ok(())
    }
}
