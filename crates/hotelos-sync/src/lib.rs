//! Client-side state synchronization for HotelOS.
//!
//! This crate keeps the in-memory view model consistent across the local
//! cache, the remote shared document store, and the live push-update feed.
//! The remote store runs as a dedicated tokio task; external code talks to
//! it through typed command and notification channels, keeping the sync
//! layer fully asynchronous and decoupled.

pub mod classifier;
pub mod document;
pub mod gate;
pub mod reconciler;
pub mod remote;
pub mod subscriptions;
pub mod writer;

mod error;

pub use error::SyncError;
pub use gate::{can, check, AccessDenied, Capability};
pub use reconciler::ViewModel;
pub use remote::{spawn_memory_remote, RawDocument, RemoteCommand, Scope, SubscriptionId};
pub use subscriptions::{SessionEvent, SubscriptionManager};
pub use writer::WriteCoordinator;
