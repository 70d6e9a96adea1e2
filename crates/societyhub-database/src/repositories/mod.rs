//! Repository implementations for all SocietyHub entities.

pub mod alert;
pub mod notification;
pub mod visitor;

pub use alert::AlertRepository;
pub use notification::NotificationRepository;
pub use visitor::VisitorRepository;
