mod fake_tool_runner;

pub use fake_tool_runner::FakeToolRunner;
