mod output;
mod source;

pub use output::{stripped_path, write_output};
pub use source::read_source;
