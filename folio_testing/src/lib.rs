//! Local stand-ins for the external services the contact backend talks to.

pub mod email_relay;
pub mod webhook;
