//! Script-building macros
//!
//! Shorthands for the port and parameter calls that dominate graph-building
//! code.

pub mod param_macros;
pub mod port_macros;
