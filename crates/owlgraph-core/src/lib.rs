//! owlgraph Core Types and Definitions
//!
//! This crate provides the foundational types shared by the owlgraph pipeline.
//! It includes:
//!
//! - **Ontology model**: Typed OWL 2 axioms and expressions ([`owl`] module)
//! - **Graph model**: Diagram nodes, edges and graph builders ([`graph`] module)
//! - **Identifiers**: Stable and synthetic node identifiers ([`identifier`] module)
//! - **Naming**: Display labels for named entities ([`naming`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod graph;
pub mod identifier;
pub mod naming;
pub mod owl;
