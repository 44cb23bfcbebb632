//! Type graph construction and storage

mod builder;
mod type_graph;

pub use type_graph::{TypeGraph, TypeVertex};
