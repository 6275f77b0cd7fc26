mod cookin_error;

pub use cookin_error::{CookinError, ErrorKind};
