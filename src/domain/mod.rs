pub mod command;
pub mod error;
pub mod input_set;
pub mod source_list;

pub use command::{
    CommandInvocation, DEFAULT_PROGRAM, SUBCOMMAND, build_command, build_command_with_program,
};
pub use error::AppError;
pub use input_set::{InputFlags, InputKey, InputSet};
pub use source_list::{normalize_source_list, source_entries};
