//! Fincommunity - WMTI investor personality survey backend
//!
//! Scores the 20-item WMTI questionnaire into four dimension scores, a
//! four-letter code, and a risk preference band, then keeps each member's
//! current result alongside an append-only history of past submissions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
