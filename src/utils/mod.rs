mod fs;
mod hash;

pub use fs::{FileRecord, load_directory};
pub use hash::{HashResult, digest_bytes};
