//! contains [`Bitmap`] and [`MutableBitmap`], containers of `bool`.
mod immutable;
mod iterator;
mod mutable;
pub mod utils;

pub use immutable::Bitmap;
pub use iterator::BitmapIter;
pub use mutable::MutableBitmap;
