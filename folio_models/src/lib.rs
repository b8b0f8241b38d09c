pub mod contact;
pub mod email_address;
pub mod webhook;

/// Placeholder used wherever an optional submission field was left empty.
pub const NOT_PROVIDED: &str = "Not provided";

/// Placeholder used for requester metadata the request did not carry.
pub const UNKNOWN: &str = "Unknown";
