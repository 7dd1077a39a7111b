//! Asset lifecycle: minting, ownership transfer and asset reads.

use super::Registry;
use crate::error::{RegistryError, RegistryResult};
use crate::limits::{
    validate_content_ref, validate_text, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN,
};
use crate::records::Asset;
use crate::types::{AssetId, CallContext, Principal};

impl Registry {
    /// Register a new asset owned by the caller and return its identifier.
    ///
    /// Any caller may mint while the registry is active. Identifiers are
    /// allocated as `last_id + 1` and never reused.
    pub fn mint(
        &mut self,
        ctx: &CallContext,
        content_ref: String,
        title: String,
        description: String,
    ) -> RegistryResult<AssetId> {
        self.ensure_active()?;
        validate_content_ref("content_ref", &content_ref)?;
        validate_text("title", &title, MAX_TITLE_LEN)?;
        validate_text("description", &description, MAX_DESCRIPTION_LEN)?;

        let id = self.last_id + 1;
        self.assets.insert(
            id,
            Asset {
                id,
                owner: ctx.caller.clone(),
                content_ref,
                created_at: ctx.sequence,
                title,
                description,
            },
        );
        self.last_id = id;
        Ok(id)
    }

    /// Move `asset_id` from `from` to `to`.
    ///
    /// Only self-initiated transfers are allowed: the caller must be `from`
    /// (`NotAuthorized` otherwise) and `from` must be the recorded owner
    /// (`NotOwner` otherwise). Only the owner field changes; side-tables stay
    /// as they are.
    pub fn transfer(
        &mut self,
        ctx: &CallContext,
        asset_id: AssetId,
        from: Principal,
        to: Principal,
    ) -> RegistryResult<()> {
        self.ensure_active()?;
        if ctx.caller != from {
            return Err(RegistryError::NotAuthorized(format!(
                "{} cannot transfer on behalf of {from}",
                ctx.caller
            )));
        }
        self.ensure_owner(asset_id, &from)?;

        if let Some(asset) = self.assets.get_mut(&asset_id) {
            asset.owner = to;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn get_asset(&self, asset_id: AssetId) -> RegistryResult<&Asset> {
        self.asset(asset_id)
    }

    pub fn get_owner(&self, asset_id: AssetId) -> RegistryResult<&Principal> {
        self.asset(asset_id).map(|a| &a.owner)
    }

    /// The asset's content reference.
    pub fn get_token_uri(&self, asset_id: AssetId) -> RegistryResult<&str> {
        self.asset(asset_id).map(|a| a.content_ref.as_str())
    }

    /// Identifier of the most recently minted asset, `0` before the first mint.
    pub fn get_last_id(&self) -> AssetId {
        self.last_id
    }
}
