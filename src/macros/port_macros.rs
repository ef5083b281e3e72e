//! Port selection macro

/// Select a port on a module
///
/// # Example
/// ```rust
/// # use va_script::{port, BufferPrinter, Script, Scope};
/// # let script = Script::new(BufferPrinter::new());
/// # let design = script.design("P").create().unwrap();
/// # let decision = design.module("IF", "Decision").create().unwrap();
/// let any = port!(decision);                // role and index from the connection
/// let cond = port!(decision, name = "C");   // Condition000
/// let second = port!(decision, index = 1);  // role from the connection
/// let input = port!(decision, "I", 1);      // I001
/// ```
#[macro_export]
macro_rules! port {
    ($module:expr) => {
        $module.unresolved_port()
    };
    ($module:expr, name = $name:expr) => {
        $module.port_named($name)
    };
    ($module:expr, index = $index:expr) => {
        $module.port_index($index)
    };
    ($module:expr, $name:expr, $index:expr) => {
        $module.port_at($name, $index)
    };
}
