use std::fmt::{Debug, Display};
use std::str::FromStr;

/// T values are float numbers that can be parsed from and printed to plain text tables
pub trait Float: ::num::Float + Debug + Default + Display + FromStr + Send + Sync + 'static {}

impl<T> Float for T where T: ::num::Float + Debug + Default + Display + FromStr + Send + Sync + 'static
{}
