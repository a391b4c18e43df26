mod error;
pub mod jpeg;

pub use error::{CoreError, Result};
pub use jpeg::strip_exif;
