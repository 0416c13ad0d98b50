mod immutable;
mod utils;
