mod boolean;
mod list;
mod null;
mod primitive;
mod utf8;

pub use boolean::read_boolean;
pub use list::read_list;
pub use null::read_null;
pub use primitive::read_primitive;
pub use utf8::read_utf8;
