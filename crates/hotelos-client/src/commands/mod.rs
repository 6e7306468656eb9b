//! Command handlers invoked by the UI layer.
//!
//! Each sub-module groups related commands by feature area.  Every handler
//! that touches a protected feature calls the access gate first and returns
//! the denial (with its user-facing reason) instead of acting.

pub mod agenda;
pub mod contacts;
pub mod crm;
pub mod housekeeping;
pub mod inventory;
pub mod maintenance;
pub mod messaging;
pub mod reception;
pub mod session;
pub mod settings;
pub mod spa;
pub mod tasks;
