//! Networking for the ClarityOS backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema, `backend` the trait the widget talks
//! to, and `http` (browser only) the `gloo-net` implementation of it.

pub mod backend;
#[cfg(feature = "browser")]
pub mod http;
pub mod types;
