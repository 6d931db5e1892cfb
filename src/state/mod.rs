//! Widget state.
//!
//! DESIGN
//! ======
//! `panel` is pure presentation state; `session` owns the conversation
//! (history, file context) and the surface it renders into.

pub mod panel;
pub mod session;
