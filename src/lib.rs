// Product agent: catalog attribute tagging and keyword trend analysis.
//
// This is the library root. `tagging` and `trends` are the two independent
// analyzers; `web` and `output` are the HTTP and terminal front ends.

pub mod config;
pub mod output;
pub mod tagging;
pub mod trends;
pub mod web;
