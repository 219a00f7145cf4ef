//! Domain types and pure logic for the videoai platform.
//!
//! No IO lives here. The upstream client and workflow engine are in
//! `videoai-replicate`, persistence in `videoai-store`, and the HTTP
//! surface in `videoai-api`.

pub mod error;
pub mod job;
pub mod models;
pub mod progress;
pub mod types;
