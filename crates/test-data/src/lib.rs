//! Test data generation for headwind.
//!
//! This crate provides synthetic routes, wind observations and GPX documents
//! for exercising the wind impact analysis end to end without network access.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let path = ProceduralGenerator::new(RoutePattern::OutAndBack { bearing: 90.0 })
//!     .with_start(40.0, -105.3)
//!     .with_distance(4000.0)
//!     .generate(&mut rng);
//! let wind = WindGenerator::breezy().sample(&mut rng);
//! ```

pub mod config;
pub mod gpx;
pub mod sources;
pub mod weather;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BoundingBox, Region};
    pub use crate::gpx::generate_gpx;
    pub use crate::sources::{ProceduralGenerator, RouteConfig, RoutePattern};
    pub use crate::weather::WindGenerator;
    pub use headwind::prelude::*;
}
