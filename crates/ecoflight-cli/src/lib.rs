//! EcoFlight CLI library.
//!
//! Output formatting shared by the `ecoflight-cli` subcommands.

pub mod output;
