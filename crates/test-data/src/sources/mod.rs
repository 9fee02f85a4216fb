//! Route geometry sources for scenario tests.
//!
//! [`ProceduralGenerator`] produces synthetic routes of a chosen [`RoutePattern`].

mod procedural;

pub use procedural::{ProceduralGenerator, RouteConfig, RoutePattern};
