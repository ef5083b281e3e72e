pub mod catalog;
pub mod connections;
pub mod errors;
pub mod graph;
pub mod output;
