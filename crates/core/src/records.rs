//! Record types stored by the registry.
//!
//! Side-table records never embed their parent asset or its owner; they are
//! keyed by asset id and stored independently (see [`crate::registry`]).

use serde::{Deserialize, Serialize};

use crate::types::{AssetId, Principal, Sequence, VersionNumber};

/// A registered creative work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub owner: Principal,
    /// Opaque content reference (e.g. a content-addressed URI).
    pub content_ref: String,
    pub created_at: Sequence,
    pub title: String,
    pub description: String,
}

/// One entry of an asset's version history, keyed by `(asset, version)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub asset_id: AssetId,
    pub version: VersionNumber,
    pub content_ref: String,
    pub notes: String,
    pub created_at: Sequence,
}

/// A license granted on an asset, keyed by `(asset, licensee)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub asset_id: AssetId,
    pub licensee: Principal,
    pub expires_at: Sequence,
    pub terms: String,
    pub active: bool,
}

impl LicenseRecord {
    /// A license is usable while active and strictly before its expiry.
    pub fn is_valid_at(&self, sequence: Sequence) -> bool {
        self.active && sequence < self.expires_at
    }
}

/// The single category record of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub asset_id: AssetId,
    pub category: String,
    pub tags: Vec<String>,
}

/// A collaborator on an asset, keyed by `(asset, collaborator)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorRecord {
    pub asset_id: AssetId,
    pub collaborator: Principal,
    pub role: String,
    pub permissions: Vec<String>,
    pub added_at: Sequence,
}

/// The single status record of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub asset_id: AssetId,
    pub status: String,
    pub visible: bool,
    pub updated_at: Sequence,
}

/// A participant's revenue share on an asset, keyed by `(asset, participant)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueShare {
    pub asset_id: AssetId,
    pub participant: Principal,
    /// Share in whole percent, 0 to 100 inclusive.
    pub percentage: u32,
    /// Cumulative amount received. Reset to zero whenever the share is set.
    pub total_received: u64,
}

/// Process-wide control state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub paused: bool,
    pub admin: Principal,
}
