//! Mapping from image metadata to a UCO/CASE observable-object graph.
//!
//! [`assemble`] is the entry point: it allocates the root observable object,
//! runs each facet builder against it and returns the finished [`Graph`].
//! Serialize the result with [`exifcase_graph::to_string`] and the options
//! from [`jsonld_options`].
//!
//! [`Graph`]: exifcase_graph::Graph

mod allocate;
mod assemble;
pub mod error;
pub mod facets;
pub mod vocab;

pub use crate::allocate::{ObservableNodes, allocate, link_facet};
pub use crate::assemble::{AssembleOptions, DEFAULT_KB, assemble, jsonld_options};
pub use crate::vocab::{Namespace, Vocab};
