use super::param::{ParamTarget, ParamValue, Parameter};
use super::port::Port;
use super::scope::Scope;
use crate::core::errors::Result;

/// Directed connection between two ports.
///
/// Only created through [`Connect`](crate::core::connections::Connect), which
/// guarantees both ports carry a role and an index.
#[derive(Debug, Clone)]
pub struct Link {
    src: Port,
    dst: Port,
}

impl Link {
    pub(crate) fn new(src: Port, dst: Port) -> Result<Self> {
        let link = Self { src, dst };
        let command = link.command()?;
        link.src.module().script().emit(&command)?;
        Ok(link)
    }

    pub fn src(&self) -> &Port {
        &self.src
    }

    pub fn dst(&self) -> &Port {
        &self.dst
    }

    /// The `ConnectModules` command for this link
    pub fn command(&self) -> Result<String> {
        Ok(format!(
            "ConnectModules \"{}\" \"{}\" \"{}\" \"{}\"",
            self.src.module().path(),
            self.src.identifier()?,
            self.dst.module().path(),
            self.dst.identifier()?,
        ))
    }

    /// Write a `SetLinkParam` command; link parameters attach to the
    /// destination port
    pub fn set_param<V: Into<ParamValue>>(&self, name: &str, value: V) -> Result<Parameter> {
        Parameter::new(ParamTarget::Link(self.clone()), name, value.into())
    }
}
