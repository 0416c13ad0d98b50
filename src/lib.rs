//! A minimal implementation of the Arrow columnar memory format and a reader
//! of its IPC file format.
//!
//! The core containers are:
//! * [`buffer::Buffer`], a cheaply-clonable view over a shared region of memory
//! * [`bitmap::Bitmap`], an LSB-first view over packed bits
//! * the [`array::Array`] family, typed columns composed of buffers and bitmaps
//! * [`chunk::Chunk`], columns of equal length
//!
//! [`io::ipc`] deserializes Arrow IPC files into these containers.
#![allow(unsafe_op_in_unsafe_fn)]

pub mod array;
pub mod bitmap;
pub mod buffer;
pub mod chunk;
pub mod datatypes;
pub mod error;
pub mod io;
pub mod offset;
pub mod types;
