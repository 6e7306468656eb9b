//! # hotelos-shared
//!
//! Domain models and shared types for the HotelOS operations dashboard.
//!
//! Every entity struct derives `Serialize` and `Deserialize` so it can move
//! unchanged between the remote document store, the local cache, and the UI
//! layer.  Field names are renamed to the wire's camelCase convention.

pub mod constants;
pub mod entities;
pub mod permissions;
pub mod time;
pub mod types;

pub use entities::*;
pub use permissions::{Role, UserPermissions, UserProfile};
pub use types::UserId;
