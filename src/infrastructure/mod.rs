//! Transport adapters: the HTTPS client used in production and an in-memory
//! stub for tests and offline integration work.

pub mod http;
pub mod in_memory;
