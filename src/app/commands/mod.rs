pub mod output;
pub mod sync_upstreams;
