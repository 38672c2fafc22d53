//! Pipe backend application layer: rule ports, the resolver registry and
//! the use cases the session drives.
pub mod ports;
pub mod services;
pub mod use_cases;
