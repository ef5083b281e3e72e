pub mod design;
pub mod link;
pub mod module;
pub mod param;
pub mod port;
pub mod scope;
pub mod script;

pub use design::{Design, DesignBuilder, DESIGN_ROOT};
pub use link::Link;
pub use module::{Module, ModuleBuilder};
pub use param::{ParamTarget, ParamValue, Parameter};
pub use port::{Port, PortRef, INPUT_ROLE, OUTPUT_ROLE};
pub use scope::{RawScope, Scope};
pub use script::Script;
