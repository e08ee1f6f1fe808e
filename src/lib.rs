//! ascii-cam library crate.
//!
//! The conversion core lives in [`ascii`]. The remaining modules wire it up
//! to files, raw frame streams and the terminal.

pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod limiter;
pub mod renderer;
pub mod stream;
