#![allow(dead_code, unused_imports)]

pub(crate) mod fake_tool;
pub(crate) mod test_context;

pub(crate) use fake_tool::FakeTool;
pub(crate) use test_context::TestContext;
