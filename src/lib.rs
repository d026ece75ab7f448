//! Compile the .NET native hosting API documentation catalog.
//!
//! One in-memory [`Catalog`] feeds two artifacts:
//!
//! - a **binary pack** ([`emit::pack`]) holding every record, for runtime
//!   and tooling lookups;
//! - a **member-remap response file** ([`emit::remap`]) that attaches a
//!   `Documentation` attribute to each member for a downstream source
//!   generator.

pub mod cancel;
pub mod catalog;
pub mod emit;
pub mod error;
pub mod model;

pub use cancel::CancellationToken;
pub use catalog::{Catalog, CatalogBuilder};
pub use error::{Error, Result};
pub use model::{ApiDetails, OrderedMap};
