//! Command-line front end for fairway.
//!
//! The `fairway` binary is a thin `main` over these modules; they are
//! exposed so integration tests parse the real `Args`.

pub mod cli;
pub mod cli_utils;
pub mod commands;
