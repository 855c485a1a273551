//! HTML form types deserialized and validated at the route boundary.

pub mod client;
