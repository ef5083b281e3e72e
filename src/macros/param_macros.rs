//! Parameter assignment macro

/// Set several parameters on one module, port or link, in order
///
/// Evaluates to `Result<Vec<Parameter>>` and stops at the first failure.
///
/// # Example
/// ```rust
/// # use va_script::{params, BufferPrinter, Script, Scope};
/// # fn main() -> va_script::Result<()> {
/// # let script = Script::new(BufferPrinter::new());
/// # let design = script.design("P").create()?;
/// # let value = design.module("CONST", "Value").create()?;
/// params!(value.port_named("O"), {
///     "Bit Width" => 16,
///     "Arithmetic" => "signed",
/// })?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! params {
    ($target:expr, { $($name:expr => $value:expr),* $(,)? }) => {
        (|| -> $crate::Result<::std::vec::Vec<$crate::Parameter>> {
            let target = &$target;
            Ok(::std::vec![$(target.set_param($name, $value)?),*])
        })()
    };
}
