use std::fmt;

use serde::{Deserialize, Serialize};

/// Asset identifiers are allocated sequentially starting at 1.
pub type AssetId = u64;

/// Caller-supplied version number. Reusing a number overwrites that version.
pub type VersionNumber = u64;

/// Monotonic sequence value supplied by the sequencer (block-height style).
pub type Sequence = u64;

/// Opaque identity reference for owners, licensees, collaborators, and the
/// administrator.
///
/// The registry only ever compares principals for equality; it never
/// interprets their contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Per-call environment supplied by the sequencer: who is invoking the
/// operation and the sequence value at which it executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Principal,
    pub sequence: Sequence,
}

impl CallContext {
    pub fn new(caller: impl Into<Principal>, sequence: Sequence) -> Self {
        Self {
            caller: caller.into(),
            sequence,
        }
    }
}
