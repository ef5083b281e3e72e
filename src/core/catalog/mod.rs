pub mod operators;
pub mod resolver;

pub use operators::{OperatorSpec, PortFormat, RoleSpec, OPERATORS};
pub use resolver::{lookup_operator, match_operator, match_role, pattern_matches, resolve_port};
