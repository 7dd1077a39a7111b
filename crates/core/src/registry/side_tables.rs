//! Per-asset side-tables: versions, licenses, category, collaborators, status
//! and revenue shares.
//!
//! Every mutator runs the same prelude (not paused, asset exists, caller is
//! the current owner), then validates its own bounds, then replaces the keyed
//! record wholesale. Nothing is merged with a previous record.

use super::Registry;
use crate::error::{RegistryError, RegistryResult};
use crate::limits::{
    validate_content_ref, validate_label, validate_labels, validate_share, validate_text,
    MAX_NOTES_LEN, MAX_PERMISSIONS, MAX_SHARE_PERCENT, MAX_TAGS, MAX_TERMS_LEN,
};
use crate::records::{
    CategoryRecord, CollaboratorRecord, LicenseRecord, RevenueShare, StatusRecord, VersionRecord,
};
use crate::types::{AssetId, CallContext, Principal, Sequence, VersionNumber};

fn not_found(entity: &'static str, asset_id: AssetId) -> RegistryError {
    RegistryError::NotFound { entity, asset_id }
}

impl Registry {
    // -----------------------------------------------------------------------
    // Versions
    // -----------------------------------------------------------------------

    /// Record (or overwrite) version `version` of an asset.
    pub fn register_version(
        &mut self,
        ctx: &CallContext,
        asset_id: AssetId,
        version: VersionNumber,
        content_ref: String,
        notes: String,
    ) -> RegistryResult<()> {
        self.ensure_can_mutate(ctx, asset_id)?;
        validate_content_ref("content_ref", &content_ref)?;
        validate_text("notes", &notes, MAX_NOTES_LEN)?;

        self.versions.insert(
            (asset_id, version),
            VersionRecord {
                asset_id,
                version,
                content_ref,
                notes,
                created_at: ctx.sequence,
            },
        );
        Ok(())
    }

    pub fn get_version(
        &self,
        asset_id: AssetId,
        version: VersionNumber,
    ) -> RegistryResult<&VersionRecord> {
        self.versions
            .get(&(asset_id, version))
            .ok_or_else(|| not_found("Version", asset_id))
    }

    /// All versions of one asset, ordered by version number.
    pub fn list_versions(&self, asset_id: AssetId) -> RegistryResult<Vec<&VersionRecord>> {
        self.asset(asset_id)?;
        Ok(self
            .versions
            .range((asset_id, VersionNumber::MIN)..=(asset_id, VersionNumber::MAX))
            .map(|(_, v)| v)
            .collect())
    }

    // -----------------------------------------------------------------------
    // Licenses
    // -----------------------------------------------------------------------

    /// Grant `licensee` a license expiring `duration` sequence steps from now.
    ///
    /// Replaces any earlier license for the same licensee, reactivating it.
    pub fn grant_license(
        &mut self,
        ctx: &CallContext,
        asset_id: AssetId,
        licensee: Principal,
        duration: Sequence,
        terms: String,
    ) -> RegistryResult<()> {
        self.ensure_can_mutate(ctx, asset_id)?;
        validate_text("terms", &terms, MAX_TERMS_LEN)?;

        let expires_at = ctx.sequence.saturating_add(duration);
        self.licenses.insert(
            (asset_id, licensee.clone()),
            LicenseRecord {
                asset_id,
                licensee,
                expires_at,
                terms,
                active: true,
            },
        );
        Ok(())
    }

    /// Deactivate an existing license. The record is kept for history.
    pub fn revoke_license(
        &mut self,
        ctx: &CallContext,
        asset_id: AssetId,
        licensee: Principal,
    ) -> RegistryResult<()> {
        self.ensure_can_mutate(ctx, asset_id)?;
        let license = self
            .licenses
            .get_mut(&(asset_id, licensee))
            .ok_or_else(|| not_found("License", asset_id))?;
        license.active = false;
        Ok(())
    }

    pub fn get_license(
        &self,
        asset_id: AssetId,
        licensee: &Principal,
    ) -> RegistryResult<&LicenseRecord> {
        self.licenses
            .get(&(asset_id, licensee.clone()))
            .ok_or_else(|| not_found("License", asset_id))
    }

    /// Whether `licensee` holds an active, unexpired license at `sequence`.
    pub fn is_license_valid(
        &self,
        asset_id: AssetId,
        licensee: &Principal,
        sequence: Sequence,
    ) -> RegistryResult<bool> {
        self.get_license(asset_id, licensee)
            .map(|l| l.is_valid_at(sequence))
    }

    // -----------------------------------------------------------------------
    // Category
    // -----------------------------------------------------------------------

    /// Replace the asset's category and tag list.
    pub fn set_category(
        &mut self,
        ctx: &CallContext,
        asset_id: AssetId,
        category: String,
        tags: Vec<String>,
    ) -> RegistryResult<()> {
        self.ensure_can_mutate(ctx, asset_id)?;
        validate_label("category", &category)?;
        validate_labels("tags", &tags, MAX_TAGS)?;

        self.categories.insert(
            asset_id,
            CategoryRecord {
                asset_id,
                category,
                tags,
            },
        );
        Ok(())
    }

    pub fn get_category(&self, asset_id: AssetId) -> RegistryResult<&CategoryRecord> {
        self.categories
            .get(&asset_id)
            .ok_or_else(|| not_found("Category", asset_id))
    }

    // -----------------------------------------------------------------------
    // Collaborators
    // -----------------------------------------------------------------------

    /// Add or replace a collaborator entry.
    pub fn add_collaborator(
        &mut self,
        ctx: &CallContext,
        asset_id: AssetId,
        collaborator: Principal,
        role: String,
        permissions: Vec<String>,
    ) -> RegistryResult<()> {
        self.ensure_can_mutate(ctx, asset_id)?;
        validate_label("role", &role)?;
        validate_labels("permissions", &permissions, MAX_PERMISSIONS)?;

        self.collaborators.insert(
            (asset_id, collaborator.clone()),
            CollaboratorRecord {
                asset_id,
                collaborator,
                role,
                permissions,
                added_at: ctx.sequence,
            },
        );
        Ok(())
    }

    pub fn get_collaborator(
        &self,
        asset_id: AssetId,
        collaborator: &Principal,
    ) -> RegistryResult<&CollaboratorRecord> {
        self.collaborators
            .get(&(asset_id, collaborator.clone()))
            .ok_or_else(|| not_found("Collaborator", asset_id))
    }

    // -----------------------------------------------------------------------
    // Status
    // -----------------------------------------------------------------------

    pub fn set_status(
        &mut self,
        ctx: &CallContext,
        asset_id: AssetId,
        status: String,
        visible: bool,
    ) -> RegistryResult<()> {
        self.ensure_can_mutate(ctx, asset_id)?;
        validate_label("status", &status)?;

        self.statuses.insert(
            asset_id,
            StatusRecord {
                asset_id,
                status,
                visible,
                updated_at: ctx.sequence,
            },
        );
        Ok(())
    }

    pub fn get_status(&self, asset_id: AssetId) -> RegistryResult<&StatusRecord> {
        self.statuses
            .get(&asset_id)
            .ok_or_else(|| not_found("Status", asset_id))
    }

    // -----------------------------------------------------------------------
    // Revenue shares
    // -----------------------------------------------------------------------

    /// Set `participant`'s share of the asset's revenue.
    ///
    /// The share itself must be at most 100, and the asset's total across all
    /// participants (with this participant's previous share replaced) must
    /// also stay at or below 100. The received total restarts at zero.
    pub fn set_revenue_share(
        &mut self,
        ctx: &CallContext,
        asset_id: AssetId,
        participant: Principal,
        percentage: u32,
    ) -> RegistryResult<()> {
        self.ensure_can_mutate(ctx, asset_id)?;
        validate_share(percentage)?;

        let others: u32 = self
            .shares_of(asset_id)
            .filter(|s| s.participant != participant)
            .map(|s| s.percentage)
            .sum();
        if others + percentage > MAX_SHARE_PERCENT {
            return Err(RegistryError::InvalidShare(format!(
                "total for asset #{asset_id} would be {}%, exceeding {MAX_SHARE_PERCENT}%",
                others + percentage
            )));
        }

        self.revenue_shares.insert(
            (asset_id, participant.clone()),
            RevenueShare {
                asset_id,
                participant,
                percentage,
                total_received: 0,
            },
        );
        Ok(())
    }

    pub fn get_revenue_share(
        &self,
        asset_id: AssetId,
        participant: &Principal,
    ) -> RegistryResult<&RevenueShare> {
        self.revenue_shares
            .get(&(asset_id, participant.clone()))
            .ok_or_else(|| not_found("Revenue share", asset_id))
    }

    /// Sum of all participants' percentages on one asset.
    pub fn total_share_percentage(&self, asset_id: AssetId) -> RegistryResult<u32> {
        self.asset(asset_id)?;
        Ok(self.shares_of(asset_id).map(|s| s.percentage).sum())
    }

    fn shares_of(&self, asset_id: AssetId) -> impl Iterator<Item = &RevenueShare> {
        self.revenue_shares
            .range((asset_id, Principal::default())..)
            .take_while(move |((id, _), _)| *id == asset_id)
            .map(|(_, share)| share)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::super::test_support::*;
    use super::*;
    use crate::limits::MAX_LABEL_LEN;

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tag-{i}")).collect()
    }

    // -----------------------------------------------------------------------
    // Shared prelude
    // -----------------------------------------------------------------------

    #[test]
    fn mutators_reject_unknown_asset_with_not_found() {
        let mut reg = registry_with_asset();
        let c = ctx(U1, 2);

        assert_matches!(
            reg.register_version(&c, 99, 1, "ipfs://v".into(), "n".into()),
            Err(RegistryError::NotFound { entity: "Asset", asset_id: 99 })
        );
        assert_matches!(
            reg.grant_license(&c, 99, U2.into(), 10, "t".into()),
            Err(RegistryError::NotFound { .. })
        );
        assert_matches!(
            reg.set_category(&c, 99, "music".into(), vec![]),
            Err(RegistryError::NotFound { .. })
        );
        assert_matches!(
            reg.add_collaborator(&c, 99, U2.into(), "role".into(), vec![]),
            Err(RegistryError::NotFound { .. })
        );
        assert_matches!(
            reg.set_status(&c, 99, "s".into(), true),
            Err(RegistryError::NotFound { .. })
        );
        assert_matches!(
            reg.set_revenue_share(&c, 99, U2.into(), 10),
            Err(RegistryError::NotFound { .. })
        );

        assert_matches!(reg.get_status(99), Err(RegistryError::NotFound { .. }));
        assert_matches!(reg.get_category(99), Err(RegistryError::NotFound { .. }));
    }

    #[test]
    fn mutators_reject_non_owner() {
        let mut reg = registry_with_asset();
        let c = ctx(U2, 2);

        assert_matches!(
            reg.register_version(&c, 1, 1, "ipfs://v".into(), "n".into()),
            Err(RegistryError::NotOwner { .. })
        );
        assert_matches!(
            reg.grant_license(&c, 1, U2.into(), 10, "t".into()),
            Err(RegistryError::NotOwner { .. })
        );
        assert_matches!(
            reg.set_category(&c, 1, "music".into(), vec![]),
            Err(RegistryError::NotOwner { .. })
        );
        assert_matches!(
            reg.add_collaborator(&c, 1, U2.into(), "role".into(), vec![]),
            Err(RegistryError::NotOwner { .. })
        );
        assert_matches!(
            reg.set_status(&c, 1, "s".into(), true),
            Err(RegistryError::NotOwner { .. })
        );
        assert_matches!(
            reg.set_revenue_share(&c, 1, U2.into(), 10),
            Err(RegistryError::NotOwner { .. })
        );
    }

    // -----------------------------------------------------------------------
    // Versions
    // -----------------------------------------------------------------------

    #[test]
    fn versions_are_stored_and_overwritten_by_number() {
        let mut reg = registry_with_asset();
        reg.register_version(&ctx(U1, 5), 1, 2, "ipfs://v2".into(), "remaster".into())
            .unwrap();
        reg.register_version(&ctx(U1, 6), 1, 1, "ipfs://v1".into(), "first".into())
            .unwrap();
        reg.register_version(&ctx(U1, 7), 1, 2, "ipfs://v2b".into(), "fixed".into())
            .unwrap();

        let v2 = reg.get_version(1, 2).unwrap();
        assert_eq!(v2.content_ref, "ipfs://v2b");
        assert_eq!(v2.notes, "fixed");
        assert_eq!(v2.created_at, 7);

        let numbers: Vec<u64> = reg
            .list_versions(1)
            .unwrap()
            .iter()
            .map(|v| v.version)
            .collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn version_listing_is_scoped_to_one_asset() {
        let mut reg = registry_with_asset();
        reg.mint(&ctx(U1, 2), "ipfs://b".into(), "B".into(), "".into())
            .unwrap();
        reg.register_version(&ctx(U1, 3), 1, 1, "ipfs://a1".into(), "".into())
            .unwrap();
        reg.register_version(&ctx(U1, 4), 2, 1, "ipfs://b1".into(), "".into())
            .unwrap();

        let listed = reg.list_versions(2).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].content_ref, "ipfs://b1");
        assert_matches!(reg.list_versions(3), Err(RegistryError::NotFound { .. }));
    }

    #[test]
    fn oversize_version_content_is_rejected() {
        let mut reg = registry_with_asset();
        assert_matches!(
            reg.register_version(&ctx(U1, 2), 1, 1, "x".repeat(257), "".into()),
            Err(RegistryError::MetadataTooLong { .. })
        );
        assert_matches!(reg.get_version(1, 1), Err(RegistryError::NotFound { .. }));
    }

    // -----------------------------------------------------------------------
    // Licenses
    // -----------------------------------------------------------------------

    #[test]
    fn license_grant_then_ownership_change() {
        let mut reg = registry_with_asset();
        reg.grant_license(&ctx(U1, 10), 1, U2.into(), 100, "Commercial".into())
            .unwrap();

        let lic = reg.get_license(1, &Principal::new(U2)).unwrap();
        assert_eq!(lic.expires_at, 110);
        assert_eq!(lic.terms, "Commercial");
        assert!(lic.active);

        reg.transfer(&ctx(U1, 11), 1, U1.into(), U3.into()).unwrap();
        assert_matches!(
            reg.grant_license(&ctx(U1, 12), 1, U2.into(), 100, "Commercial".into()),
            Err(RegistryError::NotOwner { .. })
        );

        // Existing license survives the transfer.
        assert!(reg.get_license(1, &Principal::new(U2)).unwrap().active);
    }

    #[test]
    fn regrant_overwrites_and_reactivates() {
        let mut reg = registry_with_asset();
        reg.grant_license(&ctx(U1, 2), 1, U2.into(), 10, "Personal".into())
            .unwrap();
        reg.revoke_license(&ctx(U1, 3), 1, U2.into()).unwrap();
        assert!(!reg.get_license(1, &Principal::new(U2)).unwrap().active);

        reg.grant_license(&ctx(U1, 4), 1, U2.into(), 50, "Commercial".into())
            .unwrap();
        let lic = reg.get_license(1, &Principal::new(U2)).unwrap();
        assert!(lic.active);
        assert_eq!(lic.expires_at, 54);
        assert_eq!(lic.terms, "Commercial");
    }

    #[test]
    fn license_validity_follows_expiry() {
        let mut reg = registry_with_asset();
        reg.grant_license(&ctx(U1, 10), 1, U2.into(), 5, "t".into())
            .unwrap();
        let who = Principal::new(U2);
        assert!(reg.is_license_valid(1, &who, 14).unwrap());
        assert!(!reg.is_license_valid(1, &who, 15).unwrap());
        assert_matches!(
            reg.is_license_valid(1, &Principal::new(U3), 1),
            Err(RegistryError::NotFound { entity: "License", .. })
        );
    }

    #[test]
    fn license_expiry_saturates() {
        let mut reg = registry_with_asset();
        reg.grant_license(&ctx(U1, 10), 1, U2.into(), u64::MAX, "forever".into())
            .unwrap();
        assert_eq!(
            reg.get_license(1, &Principal::new(U2)).unwrap().expires_at,
            u64::MAX
        );
    }

    #[test]
    fn revoking_missing_license_is_not_found() {
        let mut reg = registry_with_asset();
        assert_matches!(
            reg.revoke_license(&ctx(U1, 2), 1, U2.into()),
            Err(RegistryError::NotFound { entity: "License", .. })
        );
    }

    // -----------------------------------------------------------------------
    // Category
    // -----------------------------------------------------------------------

    #[test]
    fn category_is_replaced_wholesale() {
        let mut reg = registry_with_asset();
        reg.set_category(&ctx(U1, 2), 1, "electronic".into(), tags(3))
            .unwrap();
        reg.set_category(&ctx(U1, 3), 1, "ambient".into(), vec!["calm".into()])
            .unwrap();

        let cat = reg.get_category(1).unwrap();
        assert_eq!(cat.category, "ambient");
        assert_eq!(cat.tags, vec!["calm".to_string()]);
    }

    #[test]
    fn too_many_tags_leaves_previous_category() {
        let mut reg = registry_with_asset();
        reg.set_category(&ctx(U1, 2), 1, "electronic".into(), tags(2))
            .unwrap();

        assert_matches!(
            reg.set_category(&ctx(U1, 3), 1, "rock".into(), tags(MAX_TAGS + 1)),
            Err(RegistryError::InvalidParam { field: "tags", .. })
        );
        let cat = reg.get_category(1).unwrap();
        assert_eq!(cat.category, "electronic");
        assert_eq!(cat.tags.len(), 2);
    }

    #[test]
    fn max_tags_is_accepted() {
        let mut reg = registry_with_asset();
        reg.set_category(&ctx(U1, 2), 1, "jazz".into(), tags(MAX_TAGS))
            .unwrap();
        assert_eq!(reg.get_category(1).unwrap().tags.len(), MAX_TAGS);
    }

    // -----------------------------------------------------------------------
    // Collaborators
    // -----------------------------------------------------------------------

    #[test]
    fn collaborator_is_overwritten_on_readd() {
        let mut reg = registry_with_asset();
        reg.add_collaborator(
            &ctx(U1, 2),
            1,
            U2.into(),
            "producer".into(),
            vec!["edit".into(), "publish".into()],
        )
        .unwrap();
        reg.add_collaborator(&ctx(U1, 9), 1, U2.into(), "mixer".into(), vec![])
            .unwrap();

        let collab = reg.get_collaborator(1, &Principal::new(U2)).unwrap();
        assert_eq!(collab.role, "mixer");
        assert!(collab.permissions.is_empty());
        assert_eq!(collab.added_at, 9);
    }

    #[test]
    fn too_many_permissions_is_invalid() {
        let mut reg = registry_with_asset();
        let perms: Vec<String> = (0..MAX_PERMISSIONS + 1).map(|i| format!("p{i}")).collect();
        assert_matches!(
            reg.add_collaborator(&ctx(U1, 2), 1, U2.into(), "role".into(), perms),
            Err(RegistryError::InvalidParam {
                field: "permissions",
                ..
            })
        );
        assert_matches!(
            reg.get_collaborator(1, &Principal::new(U2)),
            Err(RegistryError::NotFound { .. })
        );
    }

    #[test]
    fn oversize_role_is_invalid() {
        let mut reg = registry_with_asset();
        assert_matches!(
            reg.add_collaborator(
                &ctx(U1, 2),
                1,
                U2.into(),
                "r".repeat(MAX_LABEL_LEN + 1),
                vec![]
            ),
            Err(RegistryError::InvalidParam { field: "role", .. })
        );
    }

    // -----------------------------------------------------------------------
    // Status
    // -----------------------------------------------------------------------

    #[test]
    fn status_stamps_sequence() {
        let mut reg = registry_with_asset();
        reg.set_status(&ctx(U1, 7), 1, "released".into(), true)
            .unwrap();
        let status = reg.get_status(1).unwrap();
        assert_eq!(status.status, "released");
        assert!(status.visible);
        assert_eq!(status.updated_at, 7);

        reg.set_status(&ctx(U1, 8), 1, "archived".into(), false)
            .unwrap();
        let status = reg.get_status(1).unwrap();
        assert!(!status.visible);
        assert_eq!(status.updated_at, 8);
    }

    // -----------------------------------------------------------------------
    // Revenue shares
    // -----------------------------------------------------------------------

    #[test]
    fn share_above_100_is_invalid() {
        let mut reg = registry_with_asset();
        assert_matches!(
            reg.set_revenue_share(&ctx(U1, 2), 1, U2.into(), 101),
            Err(RegistryError::InvalidShare(_))
        );
        reg.set_revenue_share(&ctx(U1, 3), 1, U2.into(), 100)
            .unwrap();
        assert_eq!(
            reg.get_revenue_share(1, &Principal::new(U2))
                .unwrap()
                .percentage,
            100
        );
    }

    #[test]
    fn resetting_share_zeroes_total_received() {
        let mut reg = registry_with_asset();
        reg.set_revenue_share(&ctx(U1, 2), 1, U2.into(), 40)
            .unwrap();
        reg.revenue_shares
            .get_mut(&(1, Principal::new(U2)))
            .unwrap()
            .total_received = 500;

        reg.set_revenue_share(&ctx(U1, 3), 1, U2.into(), 100)
            .unwrap();
        let share = reg.get_revenue_share(1, &Principal::new(U2)).unwrap();
        assert_eq!(share.percentage, 100);
        assert_eq!(share.total_received, 0);
    }

    #[test]
    fn per_asset_total_cannot_exceed_100() {
        let mut reg = registry_with_asset();
        reg.set_revenue_share(&ctx(U1, 2), 1, U2.into(), 60)
            .unwrap();
        reg.set_revenue_share(&ctx(U1, 3), 1, U3.into(), 40)
            .unwrap();
        assert_eq!(reg.total_share_percentage(1).unwrap(), 100);

        assert_matches!(
            reg.set_revenue_share(&ctx(U1, 4), 1, "u4".into(), 1),
            Err(RegistryError::InvalidShare(_))
        );
        // Lowering an existing share frees room.
        reg.set_revenue_share(&ctx(U1, 5), 1, U2.into(), 50)
            .unwrap();
        reg.set_revenue_share(&ctx(U1, 6), 1, "u4".into(), 10)
            .unwrap();
        assert_eq!(reg.total_share_percentage(1).unwrap(), 100);
    }

    #[test]
    fn share_totals_are_scoped_to_one_asset() {
        let mut reg = registry_with_asset();
        reg.mint(&ctx(U1, 2), "ipfs://b".into(), "B".into(), "".into())
            .unwrap();
        reg.set_revenue_share(&ctx(U1, 3), 1, U2.into(), 100)
            .unwrap();
        reg.set_revenue_share(&ctx(U1, 4), 2, U2.into(), 100)
            .unwrap();
        assert_eq!(reg.total_share_percentage(1).unwrap(), 100);
        assert_eq!(reg.total_share_percentage(2).unwrap(), 100);
    }

    // -----------------------------------------------------------------------
    // Failure atomicity
    // -----------------------------------------------------------------------

    #[test]
    fn rejected_calls_leave_side_tables_untouched() {
        let mut reg = registry_with_asset();
        reg.set_status(&ctx(U1, 2), 1, "draft".into(), false)
            .unwrap();
        reg.set_revenue_share(&ctx(U1, 3), 1, U2.into(), 70)
            .unwrap();

        let _ = reg.set_status(&ctx(U2, 4), 1, "hijacked".into(), true);
        let _ = reg.set_revenue_share(&ctx(U1, 5), 1, U3.into(), 31);

        assert_eq!(reg.get_status(1).unwrap().status, "draft");
        assert_matches!(
            reg.get_revenue_share(1, &Principal::new(U3)),
            Err(RegistryError::NotFound { .. })
        );
        assert_eq!(reg.total_share_percentage(1).unwrap(), 70);
    }
}
