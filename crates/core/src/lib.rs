//! Kanban core domain logic.
//!
//! Pure types and rules shared by the persistence and HTTP layers. Nothing in
//! this crate touches the database or the network.

pub mod board;
pub mod error;
pub mod flash;
pub mod types;
pub mod validation;
