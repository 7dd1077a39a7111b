use crate::types::{AssetId, Principal};

/// Failure reasons surfaced by every registry operation.
///
/// Each variant maps to a stable numeric reason code ([`RegistryError::code`])
/// and a stable string tag ([`RegistryError::tag`]). The variant payloads are
/// context for logs and messages only; callers should branch on the variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Reserved for uniqueness violations. No operation raises it today.
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParam { field: &'static str, reason: String },

    #[error("{caller} is not the owner of asset #{asset_id}")]
    NotOwner { asset_id: AssetId, caller: Principal },

    #[error("{entity} not found for asset #{asset_id}")]
    NotFound {
        entity: &'static str,
        asset_id: AssetId,
    },

    #[error("Registry is paused")]
    Paused,

    #[error("'{field}' is too long: {len} exceeds maximum of {max}")]
    MetadataTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Invalid revenue share: {0}")]
    InvalidShare(String),
}

/// Convenience alias for registry operation results.
pub type RegistryResult<T> = Result<T, RegistryError>;

impl RegistryError {
    /// Stable numeric reason code.
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::NotAuthorized(_) => 100,
            RegistryError::AlreadyRegistered(_) => 101,
            RegistryError::InvalidParam { .. } => 102,
            RegistryError::NotOwner { .. } => 103,
            RegistryError::NotFound { .. } => 104,
            RegistryError::Paused => 105,
            RegistryError::MetadataTooLong { .. } => 106,
            RegistryError::InvalidShare(_) => 107,
        }
    }

    /// Stable upper-snake-case tag, used as the `code` field of API errors.
    pub fn tag(&self) -> &'static str {
        match self {
            RegistryError::NotAuthorized(_) => "NOT_AUTHORIZED",
            RegistryError::AlreadyRegistered(_) => "ALREADY_REGISTERED",
            RegistryError::InvalidParam { .. } => "INVALID_PARAM",
            RegistryError::NotOwner { .. } => "NOT_OWNER",
            RegistryError::NotFound { .. } => "NOT_FOUND",
            RegistryError::Paused => "PAUSED",
            RegistryError::MetadataTooLong { .. } => "METADATA_TOO_LONG",
            RegistryError::InvalidShare(_) => "INVALID_SHARE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_and_stable() {
        let all = [
            RegistryError::NotAuthorized(String::new()),
            RegistryError::AlreadyRegistered(String::new()),
            RegistryError::InvalidParam {
                field: "tags",
                reason: String::new(),
            },
            RegistryError::NotOwner {
                asset_id: 1,
                caller: Principal::new("x"),
            },
            RegistryError::NotFound {
                entity: "Asset",
                asset_id: 1,
            },
            RegistryError::Paused,
            RegistryError::MetadataTooLong {
                field: "title",
                len: 2,
                max: 1,
            },
            RegistryError::InvalidShare(String::new()),
        ];
        let codes: Vec<u32> = all.iter().map(RegistryError::code).collect();
        assert_eq!(codes, vec![100, 101, 102, 103, 104, 105, 106, 107]);
    }

    #[test]
    fn messages_include_context() {
        let err = RegistryError::NotFound {
            entity: "License",
            asset_id: 7,
        };
        assert_eq!(err.to_string(), "License not found for asset #7");
        assert_eq!(err.tag(), "NOT_FOUND");

        let err = RegistryError::MetadataTooLong {
            field: "content_ref",
            len: 300,
            max: 256,
        };
        assert!(err.to_string().contains("300 exceeds maximum of 256"));
    }
}
