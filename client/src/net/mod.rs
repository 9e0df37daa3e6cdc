//! Backend access.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` stands in for the future REST backend with simulated latency and
//! canned responses.

pub mod api;
