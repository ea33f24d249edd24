mod endian;
mod file;

pub use endian::{read_uint_be, read_uint_le};
pub use file::{read_file, DEFAULT_MAX_FILE_SIZE};
