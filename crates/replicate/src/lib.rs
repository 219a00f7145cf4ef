//! Upstream predictions client and the job workflow engine.
//!
//! [`api::ReplicateApi`] is a typed REST client for the prediction
//! endpoints; [`engine::generate`] drives a full generation workflow
//! (demo or live) against anything implementing
//! [`api::PredictionsApi`].

pub mod api;
pub mod demo;
pub mod engine;
