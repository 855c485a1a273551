//! DTO modules that bridge services with templates and APIs.

pub mod client;
pub mod logo;
pub mod main;
pub mod payment;
