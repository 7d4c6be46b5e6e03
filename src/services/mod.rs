pub mod edge_filter;

pub use edge_filter::{EdgeFilterJob, FilterReport};
