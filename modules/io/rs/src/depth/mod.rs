// Read depth tables, one row per genomic position and one column per sample:
//
// sample_1 sample_2 sample_3
// 0        12       3
// 1        14       3
// ...
//
// The header is mandatory. Fields are separated by any amount of whitespace on input, tabs are
// used on output. Every value must be a finite number.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::{Writer, PRECISION};
