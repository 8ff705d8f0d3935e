// Probability weight matrices as distributed by UniPROBE-like databases:
//
// Foxa2 primary
// A:	0.240	0.320	0.010	...
// C:	0.180	0.160	0.010	...
// G:	0.330	0.230	0.970	...
// T:	0.250	0.290	0.010	...
//
// The first line is a free-form header. The next four non-blank lines hold one nucleotide each,
// the label is followed by one probability per motif position. Anything after the four rows is
// ignored.

mod matrix;
mod reader;

pub use matrix::{Matrix, ALPHABET};
pub use reader::Reader;
