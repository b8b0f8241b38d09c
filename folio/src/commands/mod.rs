pub mod links;
pub mod serve;
pub mod submit;
pub mod webhook;
