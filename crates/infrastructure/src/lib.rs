//! Medref Infrastructure Layer
//!
//! Concrete adapters behind the application ports: cache backends (Redis and
//! in-process), the SQLite persistence backup, and HTTP clients for the
//! upstream medical reference APIs.
pub mod cache;
pub mod database;
pub mod http;
pub mod providers;
pub mod repositories;
