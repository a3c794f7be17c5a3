//! craftcalc - interactive batch-based raw material calculator
//!
//! Library surface of the binary: argument parsing and the interactive
//! prompt loop, exposed so integration tests can script full sessions.

pub mod cli;
pub mod prompt;
