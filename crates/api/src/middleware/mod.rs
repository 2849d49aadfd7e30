//! Request extractors guarding the column routes.

pub mod csrf;
pub mod project;
