/// Fixed window of messages shown on the dashboard, newest first.
pub const RECENT_MESSAGES_LIMIT: i64 = 100;

/// Placeholder stored when a payload carries no usable number.
pub const UNKNOWN_NUMBER: &str = "unknown";

/// Display format for message timestamps on the dashboard.
pub const RECEIVED_AT_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
