use super::module::ModuleBuilder;
use super::script::Script;

/// Anything modules can be created in: a design, a module, or a raw path.
pub trait Scope {
    /// Hierarchical path used as the parent of child modules
    fn path(&self) -> &str;

    fn script(&self) -> &Script;

    /// Start a child module of `operator` type called `name`.
    ///
    /// Names must be unique within the scope; this is not checked.
    fn module(&self, operator: &str, name: &str) -> ModuleBuilder
    where
        Self: Sized,
    {
        ModuleBuilder::new(self, operator, name)
    }
}

/// Scope given only by its textual path
#[derive(Debug, Clone)]
pub struct RawScope {
    script: Script,
    path: String,
}

impl RawScope {
    pub fn new(script: &Script, path: &str) -> Self {
        Self {
            script: script.clone(),
            path: path.trim_end_matches('/').to_string(),
        }
    }
}

impl Scope for RawScope {
    fn path(&self) -> &str {
        &self.path
    }

    fn script(&self) -> &Script {
        &self.script
    }
}
