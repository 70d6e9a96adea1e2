//! # societyhub-service
//!
//! Business logic services for SocietyHub. Validation, the alert state
//! machine, and the persist-then-broadcast notification flow live here;
//! handlers stay thin and repositories stay dumb.

pub mod alert;
pub mod notification;

pub use alert::AlertService;
pub use notification::NotificationService;
