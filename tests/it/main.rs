mod array;
mod bitmap;
mod chunk;
mod io;
mod offset;
mod types;
