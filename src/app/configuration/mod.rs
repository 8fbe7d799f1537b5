//! Loading action inputs. The only place that reads process environment.

mod env_input_reader;
mod inputs_file_reader;

pub use env_input_reader::{read_inputs, read_inputs_from_env};
pub use inputs_file_reader::{load_inputs_file, parse_inputs};
