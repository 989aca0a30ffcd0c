//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, events, errors)
//! - `wmti` - Survey scoring, risk preference and result lifecycle types
pub mod foundation;
pub mod wmti;
