//! Interoperability with serialized Arrow data.
pub mod ipc;
