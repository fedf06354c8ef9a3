//! Ports implemented outside the domain

pub mod backend;

pub use backend::KeyValueBackend;
