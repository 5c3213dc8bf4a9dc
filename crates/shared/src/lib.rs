//! Wire schema shared by the BFF server, its tooling and any Rust client:
//! UI nodes, action descriptors, screen envelopes and the action protocol.

pub mod action;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod ui;
