//! Networking for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema and error type, `api` defines the
//! `Backend` seam and its `reqwest` implementation.

pub mod api;
pub mod types;
