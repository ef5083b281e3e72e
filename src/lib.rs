pub mod core;
pub mod macros;

#[cfg(test)]
mod macro_tests;

// Re-export commonly used types
pub use crate::core::catalog::resolve_port;
pub use crate::core::connections::{chain, Connect, Endpoint};
pub use crate::core::errors::{Result, ScriptError};
pub use crate::core::graph::{
    Design, DesignBuilder, Link, Module, ModuleBuilder, ParamTarget, ParamValue, Parameter, Port,
    PortRef, RawScope, Scope, Script,
};
pub use crate::core::output::{BufferPrinter, FilePrinter, Grid, Printer, ScriptConfig, StdoutPrinter};
