//! Wire message definitions for the live feed.

pub mod types;

pub use types::OutboundMessage;
