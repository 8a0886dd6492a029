pub mod input;
pub mod output;
pub mod writers;

pub use input::{load_run, parse_run};
pub use output::{create_writer, OutputFormat, OutputWriter};
