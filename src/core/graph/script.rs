use super::design::DesignBuilder;
use super::scope::RawScope;
use crate::core::errors::Result;
use crate::core::output::{FilePrinter, Grid, Printer, ScriptConfig, StdoutPrinter};
use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

struct ScriptInner {
    printer: RefCell<Box<dyn Printer>>,
    grid: Grid,
    emitted: Cell<usize>,
}

/// Shared context for one generated script.
///
/// Holds the output sink and the layout grid. Every design, module, link and
/// parameter keeps a handle to it and writes its command through it the moment
/// it is created. Cloning is cheap and clones share the sink. A `Script` is
/// single-threaded; independent scripts need independent values.
#[derive(Clone)]
pub struct Script {
    inner: Rc<ScriptInner>,
}

impl Script {
    /// Create a script writing through `printer` with the default grid
    pub fn new<P: Printer + 'static>(printer: P) -> Self {
        Self::with_grid(printer, Grid::default())
    }

    pub fn with_grid<P: Printer + 'static>(printer: P, grid: Grid) -> Self {
        Self {
            inner: Rc::new(ScriptInner {
                printer: RefCell::new(Box::new(printer)),
                grid,
                emitted: Cell::new(0),
            }),
        }
    }

    /// Create a script writing to standard output
    pub fn stdout() -> Self {
        Self::new(StdoutPrinter)
    }

    /// Select the sink and grid described by `config`
    pub fn from_config(config: &ScriptConfig) -> Result<Self> {
        match &config.output {
            Some(path) => {
                info!("Writing script to {}", path.display());
                Ok(Self::with_grid(FilePrinter::create(path)?, config.grid))
            }
            None => {
                info!("Writing script to standard output");
                Ok(Self::with_grid(StdoutPrinter, config.grid))
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.inner.grid
    }

    /// Number of commands written so far
    pub fn emitted(&self) -> usize {
        self.inner.emitted.get()
    }

    /// Start a design on `platform`; nothing is written until `create`
    pub fn design(&self, platform: &str) -> DesignBuilder {
        DesignBuilder::new(self, platform)
    }

    /// Scope for an existing hierarchical path, e.g. one created by another
    /// script
    pub fn scope(&self, path: &str) -> RawScope {
        RawScope::new(self, path)
    }

    pub(crate) fn emit(&self, command: &str) -> Result<()> {
        debug!("{}", command);
        self.inner.printer.borrow_mut().print(command)?;
        self.inner.emitted.set(self.inner.emitted.get() + 1);
        Ok(())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script")
            .field("grid", &self.inner.grid)
            .field("emitted", &self.inner.emitted.get())
            .finish()
    }
}
