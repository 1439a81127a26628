//! Medref Application Layer
//!
//! Ports describe what the core needs from the outside world; services and
//! use cases implement the caching, fallback and refresh semantics on top
//! of them without knowing which provider or store sits behind a port.
pub mod ports;
pub mod services;
pub mod use_cases;
