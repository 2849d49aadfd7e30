pub mod column;
pub mod project;
