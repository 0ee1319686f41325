//! Content lifecycle and moderation core for a bilingual (English/Urdu)
//! news publishing platform.
//!
//! The crate owns articles and their images, a trash archive of deletion
//! snapshots, and an append-only audit trail partitioned by actor role.
//! HTTP routing, authentication, and file storage are external
//! collaborators; an embedding server wires Postgres repositories and ports
//! into [`application::services::ApplicationServices`] and calls the
//! command/query services from its handlers.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
