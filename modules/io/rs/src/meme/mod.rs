// Minimal MEME motif format (version 4) with DNA letter-probability matrices:
//
// MEME version 4
//
// ALPHABET= ACGT
//
// strands: + -
//
// MOTIF Foxa2
// letter-probability matrix: alength= 4 w= 8
// 0.240000  0.180000  0.330000  0.250000
// ...
//
// Specification: https://meme-suite.org/meme/doc/meme-format.html

mod writer;

pub use writer::{Writer, HEADER};
