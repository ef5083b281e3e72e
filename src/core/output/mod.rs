pub mod config;
pub mod grid;
pub mod printer;

pub use config::ScriptConfig;
pub use grid::Grid;
pub use printer::{BufferPrinter, FilePrinter, Printer, StdoutPrinter};
