//! Listing explorer: filter state, URL sync and fetch lifecycle.
//!
//! The explorer holds one result set at a time and exposes it through an
//! explicit [`ViewState`]. Fetches are split into [`ListingExplorer::begin_fetch`]
//! and [`ListingExplorer::settle`] so a caller may keep several requests in
//! flight; only the settlement for the most recently issued ticket is
//! applied, whatever order responses arrive in.

use landbank_client::{AdsQuery, ClientError, LandbankResponse};
use landbank_core::{map_to_listing_cards, normalize_payload, ListingCard};
use serde_json::Value;

use crate::filters::{FilterKey, FilterState};
use crate::location::Location;
use crate::source::ListingSource;

pub use landbank_client::NETWORK_ERROR;

pub const NO_RESULTS_MESSAGE: &str =
    "No advertisements available right now. Please check back soon or adjust your filters.";

/// Result of one upstream request, as handed to [`ListingExplorer::settle`].
pub type FetchOutcome = Result<LandbankResponse<Value>, ClientError>;

/// Which of the mutually exclusive result views is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Showing the listings the explorer was constructed with.
    Idle,
    Loading,
    /// The last request succeeded with at least one card.
    Populated,
    /// The last request succeeded but produced no cards.
    EmptyResult,
    /// The last request failed; carries the message to show.
    Error(String),
}

impl ViewState {
    /// Message to display alongside the view, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::EmptyResult => Some(NO_RESULTS_MESSAGE),
            Self::Error(message) => Some(message),
            Self::Idle | Self::Loading | Self::Populated => None,
        }
    }
}

/// Claim on a submitted request. Settling anything but the latest ticket is
/// a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    sequence: u64,
    query: AdsQuery,
}

impl FetchTicket {
    /// The upstream request this ticket was issued for.
    #[must_use]
    pub fn query(&self) -> &AdsQuery {
        &self.query
    }

    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug)]
pub struct ListingExplorer<L> {
    filters: FilterState,
    initial_listings: Vec<ListingCard>,
    listings: Vec<ListingCard>,
    view: ViewState,
    show_more_options: bool,
    mounted: bool,
    latest_sequence: u64,
    location: L,
}

impl<L: Location> ListingExplorer<L> {
    /// Creates an explorer showing `initial_listings`.
    ///
    /// Filters start from the defaults, then `initial_filters`, then any
    /// filter keys already present in `location`'s query string.
    pub fn new(
        initial_listings: Vec<ListingCard>,
        initial_filters: &[(FilterKey, &str)],
        location: L,
    ) -> Self {
        let filters = FilterState::resolve(initial_filters, location.query());
        Self {
            filters,
            listings: initial_listings.clone(),
            initial_listings,
            view: ViewState::Idle,
            show_more_options: false,
            mounted: false,
            latest_sequence: 0,
            location,
        }
    }

    /// First-render hook. Fetches once when the explorer was built without
    /// listings; otherwise, and on every later call, does nothing.
    ///
    /// Returns whether a fetch was made.
    pub async fn mount<S>(&mut self, source: &S) -> bool
    where
        S: ListingSource + ?Sized,
    {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        if !self.initial_listings.is_empty() {
            return false;
        }
        let ticket = self.begin_fetch();
        let outcome = source.fetch(ticket.query()).await;
        self.settle(ticket, outcome);
        true
    }

    pub fn set_filter(&mut self, key: FilterKey, value: &str) {
        self.filters.set(key, value);
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Shows or hides the secondary filter controls. Returns the new state.
    pub fn toggle_more_options(&mut self) -> bool {
        self.show_more_options = !self.show_more_options;
        self.show_more_options
    }

    #[must_use]
    pub fn show_more_options(&self) -> bool {
        self.show_more_options
    }

    /// Writes the filters to the location and fetches the first page.
    pub async fn apply_filters<S>(&mut self, source: &S)
    where
        S: ListingSource + ?Sized,
    {
        let ticket = self.submit();
        let outcome = source.fetch(ticket.query()).await;
        self.settle(ticket, outcome);
    }

    /// Synchronous half of [`ListingExplorer::apply_filters`]: replaces the
    /// location with the current filters and issues a ticket.
    pub fn submit(&mut self) -> FetchTicket {
        let target = self.filters.location_target();
        self.location.replace(&target);
        self.begin_fetch()
    }

    /// Enters `Loading` and issues a ticket for the current filters.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_sequence += 1;
        self.view = ViewState::Loading;
        FetchTicket {
            sequence: self.latest_sequence,
            query: self.filters.to_ads_query(),
        }
    }

    /// Applies the outcome of a request. Returns `false`, leaving the
    /// explorer untouched, when a newer ticket has been issued since.
    pub fn settle(&mut self, ticket: FetchTicket, outcome: FetchOutcome) -> bool {
        if ticket.sequence != self.latest_sequence {
            tracing::debug!(
                sequence = ticket.sequence,
                latest = self.latest_sequence,
                "discarding stale listing response"
            );
            return false;
        }

        let envelope = match outcome {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(error = %err, "listing fetch failed");
                self.fail(err.user_message().to_owned());
                return true;
            }
        };

        if let Some(message) = envelope.failure_message() {
            tracing::warn!(
                response_code = envelope.response_code.as_deref().unwrap_or_default(),
                %message,
                "listing request rejected"
            );
            self.fail(message);
            return true;
        }

        let records = normalize_payload(envelope.response_data.as_ref());
        self.listings = map_to_listing_cards(records);
        self.view = if self.listings.is_empty() {
            ViewState::EmptyResult
        } else {
            ViewState::Populated
        };
        tracing::debug!(count = self.listings.len(), "listing response applied");
        true
    }

    /// Restores default filters and the initial listings without fetching.
    ///
    /// Requests still in flight are invalidated.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.listings.clone_from(&self.initial_listings);
        self.view = ViewState::Idle;
        self.latest_sequence += 1;
        let target = self.filters.location_target();
        self.location.replace(&target);
    }

    /// Held listings narrowed by the free-text query.
    ///
    /// Matches the trimmed query case-insensitively against title or
    /// location. A blank query shows everything.
    #[must_use]
    pub fn displayed_listings(&self) -> Vec<&ListingCard> {
        let Some(query) = self.filters.search_text() else {
            return self.listings.iter().collect();
        };
        let query = query.to_lowercase();
        self.listings
            .iter()
            .filter(|card| {
                card.title.to_lowercase().contains(&query)
                    || card.location.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Every listing currently held, before the free-text query.
    #[must_use]
    pub fn listings(&self) -> &[ListingCard] {
        &self.listings
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.view == ViewState::Loading
    }

    #[must_use]
    pub fn location(&self) -> &L {
        &self.location
    }

    fn fail(&mut self, message: String) {
        self.listings.clear();
        self.view = ViewState::Error(message);
    }
}

#[cfg(test)]
#[path = "explorer_test.rs"]
mod tests;
