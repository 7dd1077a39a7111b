//! The asset registry state machine.
//!
//! [`Registry`] owns every asset record, every side-table and the control
//! state. Operations are split across submodules by concern:
//!
//! - [`lifecycle`]: mint, transfer, asset reads.
//! - [`side_tables`]: version, license, category, collaborator, status and
//!   revenue-share mutators and reads.
//! - this module: the pause/admin control plane and the shared guards.
//!
//! Every mutating operation checks all of its preconditions before writing
//! anything, so a rejected call leaves the registry exactly as it was.
//! Ownership is re-resolved from the asset store on every call; side-tables
//! never cache the owner.

pub mod lifecycle;
pub mod side_tables;

use std::collections::{BTreeMap, HashMap};

use crate::error::{RegistryError, RegistryResult};
use crate::records::{
    Asset, CategoryRecord, CollaboratorRecord, ControlState, LicenseRecord, RevenueShare,
    StatusRecord, VersionRecord,
};
use crate::types::{AssetId, CallContext, Principal, VersionNumber};

/// Single-owner store of all registry state.
///
/// Versions and revenue shares live in ordered maps so that per-asset ranges
/// (version listing, share totals) can be read without scanning other assets.
#[derive(Debug, Clone)]
pub struct Registry {
    last_id: AssetId,
    assets: HashMap<AssetId, Asset>,
    versions: BTreeMap<(AssetId, VersionNumber), VersionRecord>,
    licenses: HashMap<(AssetId, Principal), LicenseRecord>,
    categories: HashMap<AssetId, CategoryRecord>,
    collaborators: HashMap<(AssetId, Principal), CollaboratorRecord>,
    statuses: HashMap<AssetId, StatusRecord>,
    revenue_shares: BTreeMap<(AssetId, Principal), RevenueShare>,
    control: ControlState,
}

impl Registry {
    /// Create an empty, active registry administered by `admin`.
    pub fn new(admin: impl Into<Principal>) -> Self {
        Self {
            last_id: 0,
            assets: HashMap::new(),
            versions: BTreeMap::new(),
            licenses: HashMap::new(),
            categories: HashMap::new(),
            collaborators: HashMap::new(),
            statuses: HashMap::new(),
            revenue_shares: BTreeMap::new(),
            control: ControlState {
                paused: false,
                admin: admin.into(),
            },
        }
    }

    // -----------------------------------------------------------------------
    // Guards
    // -----------------------------------------------------------------------

    fn ensure_active(&self) -> RegistryResult<()> {
        if self.control.paused {
            return Err(RegistryError::Paused);
        }
        Ok(())
    }

    fn ensure_admin(&self, ctx: &CallContext) -> RegistryResult<()> {
        if ctx.caller != self.control.admin {
            return Err(RegistryError::NotAuthorized(format!(
                "{} is not the registry administrator",
                ctx.caller
            )));
        }
        Ok(())
    }

    fn asset(&self, asset_id: AssetId) -> RegistryResult<&Asset> {
        self.assets.get(&asset_id).ok_or(RegistryError::NotFound {
            entity: "Asset",
            asset_id,
        })
    }

    /// Resolve the current owner of `asset_id` and require it to be `who`.
    fn ensure_owner(&self, asset_id: AssetId, who: &Principal) -> RegistryResult<()> {
        let asset = self.asset(asset_id)?;
        if &asset.owner != who {
            return Err(RegistryError::NotOwner {
                asset_id,
                caller: who.clone(),
            });
        }
        Ok(())
    }

    /// The shared prelude of every side-table mutator: not paused, asset
    /// exists, caller owns it.
    fn ensure_can_mutate(&self, ctx: &CallContext, asset_id: AssetId) -> RegistryResult<()> {
        self.ensure_active()?;
        self.ensure_owner(asset_id, &ctx.caller)
    }

    // -----------------------------------------------------------------------
    // Control plane
    // -----------------------------------------------------------------------

    /// Block every record-mutating operation. Admin only; idempotent.
    pub fn pause(&mut self, ctx: &CallContext) -> RegistryResult<()> {
        self.ensure_admin(ctx)?;
        self.control.paused = true;
        Ok(())
    }

    /// Re-enable mutating operations. Admin only; idempotent.
    pub fn unpause(&mut self, ctx: &CallContext) -> RegistryResult<()> {
        self.ensure_admin(ctx)?;
        self.control.paused = false;
        Ok(())
    }

    /// Hand administrative control to `new_admin`, effective immediately.
    ///
    /// There is no confirmation step: the previous administrator loses all
    /// control-plane rights as soon as this returns.
    pub fn set_admin(&mut self, ctx: &CallContext, new_admin: Principal) -> RegistryResult<()> {
        self.ensure_admin(ctx)?;
        self.control.admin = new_admin;
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.control.paused
    }

    pub fn admin(&self) -> &Principal {
        &self.control.admin
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub const ADMIN: &str = "admin";
    pub const U1: &str = "u1";
    pub const U2: &str = "u2";
    pub const U3: &str = "u3";

    pub fn ctx(caller: &str, sequence: u64) -> CallContext {
        CallContext::new(caller, sequence)
    }

    pub fn registry() -> Registry {
        Registry::new(ADMIN)
    }

    /// A registry with one asset (id 1) owned by [`U1`], minted at sequence 1.
    pub fn registry_with_asset() -> Registry {
        let mut reg = registry();
        reg.mint(&ctx(U1, 1), "ipfs://track-1".into(), "Track".into(), "Demo".into())
            .expect("mint should succeed");
        reg
    }
}
