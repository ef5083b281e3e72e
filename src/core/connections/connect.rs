use crate::core::errors::Result;
use crate::core::graph::link::Link;
use crate::core::graph::module::Module;
use crate::core::graph::port::{Port, INPUT_ROLE, OUTPUT_ROLE};
use log::trace;

/// Right-hand side of a connection: a whole module or one of its ports
#[derive(Debug, Clone)]
pub enum Endpoint {
    Module(Module),
    Port(Port),
}

impl Endpoint {
    /// The port this endpoint stands for; a module stands for its unresolved
    /// port
    pub fn into_port(self) -> Port {
        match self {
            Endpoint::Module(module) => module.unresolved_port(),
            Endpoint::Port(port) => port,
        }
    }
}

impl From<Module> for Endpoint {
    fn from(module: Module) -> Self {
        Endpoint::Module(module)
    }
}

impl From<&Module> for Endpoint {
    fn from(module: &Module) -> Self {
        Endpoint::Module(module.clone())
    }
}

impl From<Port> for Endpoint {
    fn from(port: Port) -> Self {
        Endpoint::Port(port)
    }
}

impl From<&Port> for Endpoint {
    fn from(port: &Port) -> Self {
        Endpoint::Port(port.clone())
    }
}

/// Left-hand side of a connection.
///
/// Modules and ports connect from themselves; a link continues from its
/// destination module, so `a.connect_to(&b)?.connect_to(&c)?` wires
/// `a -> b -> c`.
pub trait Connect {
    /// Create a link to `other`, writing its `ConnectModules` command.
    ///
    /// A source without role becomes `O`, a destination without role becomes
    /// `I`, and a missing index becomes 0 on either side.
    fn connect_to<E: Into<Endpoint>>(&self, other: E) -> Result<Link>;
}

impl Connect for Module {
    fn connect_to<E: Into<Endpoint>>(&self, other: E) -> Result<Link> {
        self.unresolved_port().connect_to(other)
    }
}

impl Connect for Port {
    fn connect_to<E: Into<Endpoint>>(&self, other: E) -> Result<Link> {
        let src = self.clone().with_defaults(OUTPUT_ROLE);
        let dst = other.into().into_port().with_defaults(INPUT_ROLE);
        Link::new(src, dst)
    }
}

impl Connect for Link {
    fn connect_to<E: Into<Endpoint>>(&self, other: E) -> Result<Link> {
        trace!("Continuing chain from {}", self.dst().module().path());
        self.dst().module().connect_to(other)
    }
}

/// Connect `start` to each endpoint in turn, every step starting from the
/// previous destination module. Returns one link per endpoint.
pub fn chain<C, I>(start: &C, endpoints: I) -> Result<Vec<Link>>
where
    C: Connect,
    I: IntoIterator,
    I::Item: Into<Endpoint>,
{
    let mut links: Vec<Link> = Vec::new();
    for endpoint in endpoints {
        let link = match links.last() {
            Some(previous) => previous.connect_to(endpoint)?,
            None => start.connect_to(endpoint)?,
        };
        links.push(link);
    }
    Ok(links)
}
