//! Access Filtering and Refinement
//!
//! One authority for what an actor may see and do:
//! - role and assignment based visibility over alerts, tickets and resources
//! - free-text search and facet narrowing on top of the visible set
//! - role gating of console actions

mod capabilities;
mod filter;
mod refine;
mod visibility;

pub use capabilities::Capabilities;
pub use filter::AccessFilter;
pub use refine::{Facet, FacetSelector, Faceted, Refinement, Searchable};
pub use visibility::Visible;
