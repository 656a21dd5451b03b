//! Benevit catalog types
//!
//! Wire-format structures for the landing and search endpoints plus the
//! client-side lock classification applied after a fetch.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "locked":   [{ "id": 1, "name": "...", "vector_full_path": "...", "ally": null }],
//!   "unlocked": [{ "id": 4, "name": "...", "ally": { "id": 1, "name": "Devlyn" } }]
//! }
//! ```
//!
//! `is_locked` never travels on the wire; it is assigned with
//! [`Benevit::with_lock_state`] depending on which list an item came from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A partner merchant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ally {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo_full_path: Option<String>,
    #[serde(default)]
    pub mini_logo_full_path: Option<String>,
}

/// A benefit/discount offer shown to the member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benevit {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vector_full_path: Option<String>,
    #[serde(default)]
    pub ally: Option<Ally>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    /// Assigned client-side after fetch
    #[serde(skip)]
    pub is_locked: bool,
}

impl Benevit {
    /// Create an unlocked benevit with only the required fields set
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            vector_full_path: None,
            ally: None,
            category: None,
            expiration_date: None,
            is_locked: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_ally(mut self, ally: Ally) -> Self {
        self.ally = Some(ally);
        self
    }

    /// Copy of this benevit tagged with the given lock state
    pub fn with_lock_state(&self, locked: bool) -> Self {
        Self {
            is_locked: locked,
            ..self.clone()
        }
    }

    /// Image to display: the vector art when locked, the ally's mini logo otherwise
    pub fn image_url(&self) -> Option<&str> {
        if self.is_locked {
            self.vector_full_path.as_deref()
        } else {
            self.ally.as_ref().and_then(|ally| ally.mini_logo_full_path.as_deref())
        }
    }

    /// Parsed expiration date; `None` when missing or not `YYYY-MM-DD`
    pub fn expiration(&self) -> Option<NaiveDate> {
        self.expiration_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }

    /// Whether the offer expired strictly before `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration().is_some_and(|date| date < today)
    }

    /// Case-insensitive substring match on name or description
    ///
    /// `query` is expected to be already trimmed; an empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_ref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }
}

/// Landing endpoint payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenevitsResponse {
    pub locked: Vec<Benevit>,
    pub unlocked: Vec<Benevit>,
}

impl BenevitsResponse {
    /// Tag both lists with their lock state
    pub fn into_tagged(self) -> (Vec<Benevit>, Vec<Benevit>) {
        let locked = self.locked.iter().map(|b| b.with_lock_state(true)).collect();
        let unlocked = self.unlocked.iter().map(|b| b.with_lock_state(false)).collect();
        (locked, unlocked)
    }
}

/// Search endpoint payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub benevits: Vec<Benevit>,
}

/// Alternate unlocked and locked items: `u0, l0, u1, l1, ...`, then the longer tail
pub fn interleave(locked: &[Benevit], unlocked: &[Benevit]) -> Vec<Benevit> {
    let max_count = locked.len().max(unlocked.len());
    let mut result = Vec::with_capacity(locked.len() + unlocked.len());

    for i in 0..max_count {
        if let Some(benevit) = unlocked.get(i) {
            result.push(benevit.clone());
        }
        if let Some(benevit) = locked.get(i) {
            result.push(benevit.clone());
        }
    }

    result
}
