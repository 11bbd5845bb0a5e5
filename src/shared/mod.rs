pub mod error;
mod result;

pub use error::{ExitCode, MdbomError};
pub use result::Result;
