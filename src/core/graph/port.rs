use super::module::Module;
use super::param::{ParamTarget, ParamValue, Parameter};
use crate::core::catalog::resolve_port;
use crate::core::errors::{Result, ScriptError};

/// Role given to a connection's source when none was requested
pub const OUTPUT_ROLE: &str = "O";
/// Role given to a connection's destination when none was requested
pub const INPUT_ROLE: &str = "I";

/// Requested port: an optional role name and an optional index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortRef {
    pub name: Option<String>,
    pub index: Option<usize>,
}

impl PortRef {
    pub fn new(name: &str, index: usize) -> Self {
        Self {
            name: Some(name.to_string()),
            index: Some(index),
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            index: None,
        }
    }

    pub fn indexed(index: usize) -> Self {
        Self {
            name: None,
            index: Some(index),
        }
    }

    pub fn unresolved() -> Self {
        Self::default()
    }
}

/// A connection point on a module
#[derive(Debug, Clone)]
pub struct Port {
    module: Module,
    name: Option<String>,
    index: Option<usize>,
}

impl Port {
    pub fn new(module: &Module, reference: PortRef) -> Self {
        Self {
            module: module.clone(),
            name: reference.name,
            index: reference.index,
        }
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether both role and index are known
    pub fn is_resolved(&self) -> bool {
        self.name.is_some() && self.index.is_some()
    }

    /// Fill in a missing role with `role` and a missing index with 0
    pub fn with_defaults(mut self, role: &str) -> Self {
        if self.name.is_none() {
            self.name = Some(role.to_string());
        }
        if self.index.is_none() {
            self.index = Some(0);
        }
        self
    }

    /// Identifier the design tool uses for this port on its module's operator
    pub fn identifier(&self) -> Result<String> {
        let name = self.name.as_deref().ok_or_else(|| ScriptError::UnresolvedPort {
            module: self.module.path().to_string(),
        })?;
        resolve_port(self.module.operator(), name, self.index)
    }

    /// Write a `SetLinkParam` command for the link attached to this port
    pub fn set_param<V: Into<ParamValue>>(&self, name: &str, value: V) -> Result<Parameter> {
        Parameter::new(ParamTarget::Port(self.clone()), name, value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::scope::Scope;
    use crate::core::graph::script::Script;
    use crate::core::output::BufferPrinter;

    fn module(operator: &str) -> Module {
        let script = Script::new(BufferPrinter::new());
        let design = script.design("P").create().unwrap();
        design.module(operator, "M").create().unwrap()
    }

    #[test]
    fn test_port_ref_constructors() {
        assert_eq!(PortRef::unresolved(), PortRef { name: None, index: None });
        assert_eq!(PortRef::named("C"), PortRef { name: Some("C".into()), index: None });
        assert_eq!(PortRef::indexed(2), PortRef { name: None, index: Some(2) });
        assert_eq!(PortRef::new("I", 2), PortRef { name: Some("I".into()), index: Some(2) });
    }

    #[test]
    fn test_identifier_resolves_through_catalog() {
        let decision = module("IF");
        assert_eq!(decision.port_named("C").identifier().unwrap(), "Condition000");
        assert_eq!(decision.port_at("I", 1).identifier().unwrap(), "I001");
        assert_eq!(decision.port_named("E").identifier().unwrap(), "ElseI");
    }

    #[test]
    fn test_identifier_without_name_fails() {
        let branch = module("BRANCH");
        let err = branch.port_index(1).identifier().unwrap_err();
        match err {
            ScriptError::UnresolvedPort { module } => assert_eq!(module, "Process0/M"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_with_defaults_keeps_explicit_fields() {
        let branch = module("BRANCH");

        let port = branch.port_index(2).with_defaults(OUTPUT_ROLE);
        assert_eq!(port.name(), Some("O"));
        assert_eq!(port.index(), Some(2));
        assert_eq!(port.identifier().unwrap(), "O002");

        let port = branch.port_named("X").with_defaults(INPUT_ROLE);
        assert_eq!(port.name(), Some("X"));
        assert_eq!(port.index(), Some(0));
        assert!(port.is_resolved());
    }

    #[test]
    fn test_unresolved_port_gets_both_defaults() {
        let add = module("ADD");
        let port = add.unresolved_port();
        assert!(!port.is_resolved());

        let port = port.with_defaults(INPUT_ROLE);
        assert_eq!(port.identifier().unwrap(), "I000");
        assert!(port.module().same_as(&add));
    }
}
