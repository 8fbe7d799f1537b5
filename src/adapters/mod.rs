mod process_tool_runner;

pub use process_tool_runner::ProcessToolRunner;
