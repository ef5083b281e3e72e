use super::param::{ParamTarget, ParamValue, Parameter};
use super::port::{Port, PortRef};
use super::scope::Scope;
use super::script::Script;
use crate::core::errors::Result;
use std::rc::Rc;

/// Pending module; `create` writes its `CreateModule` command
#[derive(Debug, Clone)]
pub struct ModuleBuilder {
    script: Script,
    operator: String,
    parent: String,
    name: String,
    inputs: u32,
    outputs: u32,
    x: Option<u32>,
    y: Option<u32>,
}

impl ModuleBuilder {
    /// Start a module; nothing is written until `create`
    ///
    /// # Arguments
    /// * `parent` - Scope the module is created in
    /// * `operator` - Operator type, looked up in the catalog for port naming
    /// * `name` - Name unique within `parent`
    pub fn new<S: Scope>(parent: &S, operator: &str, name: &str) -> Self {
        Self {
            script: parent.script().clone(),
            operator: operator.to_string(),
            parent: parent.path().to_string(),
            name: name.to_string(),
            inputs: 0,
            outputs: 0,
            x: None,
            y: None,
        }
    }

    /// Declared number of input ports
    pub fn inputs(mut self, count: u32) -> Self {
        self.inputs = count;
        self
    }

    /// Declared number of output ports
    pub fn outputs(mut self, count: u32) -> Self {
        self.outputs = count;
        self
    }

    /// Place the module in the design window
    ///
    /// # Arguments
    /// * `x` - 1-based grid column; 0 counts as 1
    /// * `y` - 1-based grid row; 0 counts as 1
    ///
    /// # Returns
    /// The builder with the position set
    pub fn at(mut self, x: u32, y: u32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Write the `CreateModule` command
    ///
    /// # Returns
    /// The module handle, or the sink error if the command could not be
    /// written
    pub fn create(self) -> Result<Module> {
        let module = Module {
            inner: Rc::new(ModuleData {
                path: format!("{}/{}", self.parent, self.name),
                script: self.script,
                operator: self.operator,
                name: self.name,
                inputs: self.inputs,
                outputs: self.outputs,
                x: self.x,
                y: self.y,
            }),
        };

        module.inner.script.emit(&module.command())?;
        Ok(module)
    }
}

#[derive(Debug)]
struct ModuleData {
    script: Script,
    operator: String,
    path: String,
    name: String,
    inputs: u32,
    outputs: u32,
    x: Option<u32>,
    y: Option<u32>,
}

/// An instance of an operator type inside a design or another module.
///
/// Cloning yields another handle to the same module.
#[derive(Debug, Clone)]
pub struct Module {
    inner: Rc<ModuleData>,
}

impl Module {
    pub fn operator(&self) -> &str {
        &self.inner.operator
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Full hierarchical path, e.g. `Process0/Example/Branch`
    pub fn path(&self) -> &str {
        &self.inner.path
    }

    pub fn inputs(&self) -> u32 {
        self.inner.inputs
    }

    pub fn outputs(&self) -> u32 {
        self.inner.outputs
    }

    /// Logical grid cell as given at creation
    pub fn position(&self) -> (Option<u32>, Option<u32>) {
        (self.inner.x, self.inner.y)
    }

    /// The `CreateModule` command for this module
    pub fn command(&self) -> String {
        let grid = self.inner.script.grid();
        format!(
            "CreateModule \"{}\" \"{}\" \"{}\" \"{}\" \"{}\" \"{}\"",
            self.inner.operator,
            self.inner.path,
            self.inner.inputs,
            self.inner.outputs,
            grid.x(self.inner.x),
            grid.y(self.inner.y),
        )
    }

    pub fn port(&self, reference: PortRef) -> Port {
        Port::new(self, reference)
    }

    /// Port with neither role nor index; connections fill in defaults
    pub fn unresolved_port(&self) -> Port {
        self.port(PortRef::unresolved())
    }

    /// Port by role name (`"I"`, `"Cond"`, `"INBOUND"`), index left open
    pub fn port_named(&self, name: &str) -> Port {
        self.port(PortRef::named(name))
    }

    /// Port by index, role left to the connection
    pub fn port_index(&self, index: usize) -> Port {
        self.port(PortRef::indexed(index))
    }

    pub fn port_at(&self, name: &str, index: usize) -> Port {
        self.port(PortRef::new(name, index))
    }

    /// Write a `SetModuleParam` command for this module
    pub fn set_param<V: Into<ParamValue>>(&self, name: &str, value: V) -> Result<Parameter> {
        Parameter::new(ParamTarget::Module(self.clone()), name, value.into())
    }

    /// Whether both handles refer to the same created module
    pub fn same_as(&self, other: &Module) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Scope for Module {
    fn path(&self) -> &str {
        &self.inner.path
    }

    fn script(&self) -> &Script {
        &self.inner.script
    }
}
