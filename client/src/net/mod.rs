//! Networking modules for the spaces REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and owns request cancellation, `types`
//! defines the record shapes the page passes around.

pub mod api;
pub mod types;
