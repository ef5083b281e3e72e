pub mod connect;

pub use connect::{chain, Connect, Endpoint};
