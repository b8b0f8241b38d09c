pub mod client_ip;
pub mod panic_handler;
pub mod trace;
