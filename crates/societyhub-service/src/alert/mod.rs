//! Alert review workflow.

pub mod service;

pub use service::{AlertService, NewAlert, TransitionRequest};
