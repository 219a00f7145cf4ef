//! Shared response envelope for API handlers.
//!
//! All non-relay API responses use a `{ "data": ... }` envelope. The
//! relay endpoints are exempt: they return the upstream body verbatim.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
