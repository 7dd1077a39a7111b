//! Trackvault domain core.
//!
//! Owns the asset registry state machine: asset records, the per-asset
//! side-tables (versions, licenses, category, collaborators, status, revenue
//! shares) and the pause/admin control plane. This crate performs no I/O;
//! the caller environment supplies the invoking identity and the sequence
//! counter for every call through [`types::CallContext`].

pub mod error;
pub mod limits;
pub mod records;
pub mod registry;
pub mod types;

pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;
pub use types::{AssetId, CallContext, Principal, Sequence};
