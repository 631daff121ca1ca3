//! Espalier Core Types and Definitions
//!
//! This crate provides the foundational types for the Espalier layout
//! engine. It includes:
//!
//! - **Trees**: the arena-backed rooted ordered tree ([`tree`] module)
//! - **Geometry**: integer grid coordinates ([`geometry`] module)
//! - **Strategies**: the layout-strategy selector ([`strategy::Strategy`])

pub mod geometry;
pub mod strategy;
pub mod tree;
