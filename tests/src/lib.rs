//! End-to-end tests of the report pipeline: discovery, parsing, aggregation
//! and rendering against real directory trees.
#![cfg(test)]

mod pipeline;
mod utils;
