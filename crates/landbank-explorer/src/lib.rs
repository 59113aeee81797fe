//! Filterable listing browser over the LandBank ads API.
//!
//! [`ListingExplorer`] owns the filter form, mirrors it into a
//! [`Location`], and fetches through a [`ListingSource`].

pub mod explorer;
pub mod filters;
pub mod location;
pub mod source;

pub use explorer::{
    FetchOutcome, FetchTicket, ListingExplorer, ViewState, NETWORK_ERROR, NO_RESULTS_MESSAGE,
};
pub use filters::{FilterKey, FilterState};
pub use location::{Location, MemoryLocation};
pub use source::ListingSource;
