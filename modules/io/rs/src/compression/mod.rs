//! Transparent (de)compression of table files. Plain text, GZIP and BGZF are supported, the
//! container is chosen from the file extension and, when reading, from the file signature.

pub mod decode;
pub mod encode;
