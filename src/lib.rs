//! Fetches poll info for one monitored object and saves it locally.
//!
//! This is a fire-and-forget tool: it performs exactly one authenticated GET
//! against the monitoring API's query endpoint, pretty-prints whatever JSON
//! comes back, and writes that same text to `poll_info.json`. Every run is
//! independent; the only state left behind is the overwritten output file.

pub mod api;
pub mod config;
pub mod output;
