//! hrdesk-core — in-memory employee records management.
//!
//! The library owns the record model, the deque container backing the
//! two collections (active/inactive and resigned), and the manager
//! that performs every mutation. Console rendering and input live in
//! the `hr-console` binary; nothing here writes to stdout.

pub mod dates;
pub mod deque;
pub mod employee;
pub mod error;
pub mod factory;
pub mod ids;
pub mod manager;
pub mod name_generator;
pub mod rng;
pub mod types;
