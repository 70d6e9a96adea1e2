//! Visitor log domain entities.

pub mod model;

pub use model::Visitor;
