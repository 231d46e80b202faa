//! TaskTrack command-line front end.
//!
//! `bootstrap` assembles the layers (config, tracing, dependency wiring);
//! `cli` turns parsed arguments into calls on [`tt_app::TodoSync`].

pub mod bootstrap;
pub mod cli;
