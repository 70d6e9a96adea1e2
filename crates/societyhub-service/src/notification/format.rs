//! Server-side notification text generation.

/// Title used for every visitor-arrival notification.
pub const VISITOR_ARRIVAL_TITLE: &str = "Visitor Entry Alert";

/// Builds the body text for a visitor-arrival notification.
pub fn visitor_arrival_message(
    visitor_name: &str,
    building_number: &str,
    visit_time: &str,
) -> String {
    format!("{visitor_name} has arrived at building {building_number} at {visit_time}")
}
