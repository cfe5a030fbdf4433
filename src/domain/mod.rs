//! Domain layer - User records and the response-shaping pipeline
//!
//! Upstream JSON is reshaped into [`CanonicalUserRecord`]s by
//! [`transform`], then checked field by field with [`validate`].
//! Nothing here touches the network.

pub mod transform;
pub mod user;
pub mod validation;

pub use transform::transform;
pub use user::{CanonicalUserRecord, ResultCount, ValidatedUserRecord};
pub use validation::{validate, FieldErrors};
