//! tileguide: a deterministic generator for a single tutorial page.
//!
//! The core is a pure, single-pass transformation from fixed content
//! collections (prerequisites, preparation checklist, ordered steps, pro
//! tips) to one linear HTML document. Everything around it is plumbing:
//! content loading, invariant checks, and output publishing.

pub mod cli;
pub mod content;
pub mod output;
pub mod render;
pub mod validate;
