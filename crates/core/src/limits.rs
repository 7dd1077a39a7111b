//! Field bounds and the validation helpers that enforce them.
//!
//! Free-text payloads (content references, notes, terms) that exceed their
//! bound fail with `MetadataTooLong`. Short labels and bounded collections
//! (tags, permissions) fail with `InvalidParam`.

use crate::error::{RegistryError, RegistryResult};

// ---------------------------------------------------------------------------
// Free-text bounds
// ---------------------------------------------------------------------------

/// Maximum content reference length in bytes.
pub const MAX_CONTENT_REF_LEN: usize = 256;

/// Maximum asset title length in characters.
pub const MAX_TITLE_LEN: usize = 64;

/// Maximum asset description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 256;

/// Maximum version notes length in characters.
pub const MAX_NOTES_LEN: usize = 256;

/// Maximum license terms length in characters.
pub const MAX_TERMS_LEN: usize = 256;

// ---------------------------------------------------------------------------
// Label and collection bounds
// ---------------------------------------------------------------------------

/// Maximum length of a single label (category, role, status, tag, permission).
pub const MAX_LABEL_LEN: usize = 32;

/// Maximum number of tags on a category record.
pub const MAX_TAGS: usize = 10;

/// Maximum number of permissions on a collaborator record.
pub const MAX_PERMISSIONS: usize = 5;

/// Upper bound for a single revenue share and for the per-asset total.
pub const MAX_SHARE_PERCENT: u32 = 100;

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Reject a content reference longer than [`MAX_CONTENT_REF_LEN`] bytes.
pub fn validate_content_ref(field: &'static str, content_ref: &str) -> RegistryResult<()> {
    let len = content_ref.len();
    if len > MAX_CONTENT_REF_LEN {
        return Err(RegistryError::MetadataTooLong {
            field,
            len,
            max: MAX_CONTENT_REF_LEN,
        });
    }
    Ok(())
}

/// Reject free text longer than `max` characters.
pub fn validate_text(field: &'static str, value: &str, max: usize) -> RegistryResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(RegistryError::MetadataTooLong { field, len, max });
    }
    Ok(())
}

/// Reject a label longer than [`MAX_LABEL_LEN`] characters.
pub fn validate_label(field: &'static str, value: &str) -> RegistryResult<()> {
    let len = value.chars().count();
    if len > MAX_LABEL_LEN {
        return Err(RegistryError::InvalidParam {
            field,
            reason: format!("length {len} exceeds maximum of {MAX_LABEL_LEN}"),
        });
    }
    Ok(())
}

/// Reject a label collection with more than `max` entries or any oversize entry.
pub fn validate_labels(field: &'static str, values: &[String], max: usize) -> RegistryResult<()> {
    if values.len() > max {
        return Err(RegistryError::InvalidParam {
            field,
            reason: format!("{} entries exceeds maximum of {max}", values.len()),
        });
    }
    values.iter().try_for_each(|v| validate_label(field, v))
}

/// Reject a single share above [`MAX_SHARE_PERCENT`].
pub fn validate_share(percentage: u32) -> RegistryResult<()> {
    if percentage > MAX_SHARE_PERCENT {
        return Err(RegistryError::InvalidShare(format!(
            "percentage {percentage} exceeds {MAX_SHARE_PERCENT}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn content_ref_is_measured_in_bytes() {
        let at_limit = "a".repeat(MAX_CONTENT_REF_LEN);
        assert!(validate_content_ref("content_ref", &at_limit).is_ok());

        // 129 two-byte characters = 258 bytes.
        let multibyte = "é".repeat(129);
        assert_matches!(
            validate_content_ref("content_ref", &multibyte),
            Err(RegistryError::MetadataTooLong { len: 258, .. })
        );
    }

    #[test]
    fn text_is_measured_in_chars() {
        let title = "é".repeat(MAX_TITLE_LEN);
        assert!(validate_text("title", &title, MAX_TITLE_LEN).is_ok());
        assert_matches!(
            validate_text("title", &format!("{title}x"), MAX_TITLE_LEN),
            Err(RegistryError::MetadataTooLong { field: "title", .. })
        );
    }

    #[test]
    fn label_collections_are_bounded() {
        let tags: Vec<String> = (0..MAX_TAGS).map(|i| format!("tag{i}")).collect();
        assert!(validate_labels("tags", &tags, MAX_TAGS).is_ok());

        let mut too_many = tags.clone();
        too_many.push("extra".into());
        assert_matches!(
            validate_labels("tags", &too_many, MAX_TAGS),
            Err(RegistryError::InvalidParam { field: "tags", .. })
        );

        let oversize = vec!["x".repeat(MAX_LABEL_LEN + 1)];
        assert_matches!(
            validate_labels("tags", &oversize, MAX_TAGS),
            Err(RegistryError::InvalidParam { .. })
        );
    }

    #[test]
    fn share_bounds() {
        assert!(validate_share(0).is_ok());
        assert!(validate_share(100).is_ok());
        assert_matches!(validate_share(101), Err(RegistryError::InvalidShare(_)));
    }
}
