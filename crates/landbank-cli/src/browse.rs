//! `browse` command: runs a listing explorer against the live API.

use clap::{builder::PossibleValuesParser, Args};
use landbank_client::LandbankClient;
use landbank_core::catalog::{
    LAND_SIZE_UNITS, LAND_TYPES, PAGE_SIZE_OPTIONS, PROPERTY_TYPES, STATUS_OPTIONS,
    VERIFICATION_OPTIONS,
};
use landbank_core::ListingCard;
use landbank_explorer::{FilterKey, ListingExplorer, MemoryLocation, ViewState, NO_RESULTS_MESSAGE};

/// Path the shareable link is rendered against.
const BROWSE_PATH: &str = "/lands";

const TITLE_WIDTH: usize = 36;

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Property type filter
    #[arg(long, value_parser = PossibleValuesParser::new(PROPERTY_TYPES.iter().copied()))]
    pub property_type: Option<String>,
    /// Land use filter
    #[arg(long, value_parser = PossibleValuesParser::new(LAND_TYPES.iter().copied()))]
    pub land_type: Option<String>,
    /// Unit the land size is quoted in
    #[arg(long, value_parser = PossibleValuesParser::new(LAND_SIZE_UNITS.iter().copied()))]
    pub land_size_unit: Option<String>,
    /// Listing status (defaults to ACTIVE)
    #[arg(long, value_parser = PossibleValuesParser::new(STATUS_OPTIONS.iter().copied()))]
    pub status: Option<String>,
    /// Verification state (defaults to VERIFIED)
    #[arg(long, value_parser = PossibleValuesParser::new(VERIFICATION_OPTIONS.iter().copied()))]
    pub verification: Option<String>,
    /// Only featured (true) or only non-featured (false) ads
    #[arg(long, value_parser = PossibleValuesParser::new(["true", "false"]))]
    pub featured: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    /// Results per page
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<u32>,
    /// Narrow the fetched listings by title or location
    #[arg(long)]
    pub query: Option<String>,
    /// Start from a shared link, e.g. "/lands?state=Lagos"; flags override it
    #[arg(long)]
    pub link: Option<String>,
    /// Print the listings as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl BrowseArgs {
    /// Flag values as filter overrides, in filter order.
    pub(crate) fn overrides(&self) -> Vec<(FilterKey, String)> {
        let page_size = self.page_size.map(|n| n.to_string());
        [
            (FilterKey::PropertyType, self.property_type.as_ref()),
            (FilterKey::LandType, self.land_type.as_ref()),
            (FilterKey::LandSizeUnit, self.land_size_unit.as_ref()),
            (FilterKey::Status, self.status.as_ref()),
            (FilterKey::Verification, self.verification.as_ref()),
            (FilterKey::IsFeatured, self.featured.as_ref()),
            (FilterKey::City, self.city.as_ref()),
            (FilterKey::State, self.state.as_ref()),
            (FilterKey::PageSize, page_size.as_ref()),
            (FilterKey::Query, self.query.as_ref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v.clone())))
        .collect()
    }
}

fn parse_page_size(raw: &str) -> Result<u32, String> {
    let size: u32 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {PAGE_SIZE_OPTIONS:?}"))
    }
}

/// Fetches listings for the given filters and prints them.
///
/// The explorer starts with no listings, so mounting it performs the fetch.
/// A `--link` seeds the filters first; explicit flags are then applied on
/// top of it.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub(crate) async fn run_browse(client: &LandbankClient, args: &BrowseArgs) -> anyhow::Result<()> {
    let location = MemoryLocation::new(args.link.as_deref().unwrap_or(BROWSE_PATH));
    let mut explorer = ListingExplorer::new(Vec::new(), &[], location);
    for (key, value) in args.overrides() {
        explorer.set_filter(key, &value);
    }
    explorer.mount(client).await;

    match explorer.view() {
        ViewState::Error(message) => anyhow::bail!("{message}"),
        ViewState::EmptyResult => {
            println!("{NO_RESULTS_MESSAGE}");
        }
        ViewState::Idle | ViewState::Loading | ViewState::Populated => {
            let shown = explorer.displayed_listings();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
                return Ok(());
            }
            if shown.is_empty() {
                println!(
                    "no listings match '{}'",
                    explorer.filters().search_text().unwrap_or_default()
                );
            } else {
                print_cards(&shown);
            }
        }
    }

    println!();
    println!(
        "share: {BROWSE_PATH}{}",
        share_suffix(&explorer.filters().location_target())
    );
    Ok(())
}

/// `/` means "no filters"; anything else is a `?query` to append.
fn share_suffix(target: &str) -> &str {
    if target == "/" {
        ""
    } else {
        target
    }
}

pub(crate) fn print_cards(cards: &[&ListingCard]) {
    println!(
        "{:<14}{:<width$}  {:<18}{:<18}LOCATION",
        "ID",
        "TITLE",
        "PRICE",
        "SIZE",
        width = TITLE_WIDTH
    );
    for card in cards {
        let marker = if card.featured { "*" } else { "" };
        let title = format!("{marker}{}", card.title);
        println!(
            "{:<14}{:<width$}  {:<18}{:<18}{}",
            card.id,
            truncate(&title, TITLE_WIDTH),
            card.price,
            card.size,
            card.location,
            width = TITLE_WIDTH
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width - 3).collect::<String>())
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_must_be_offered() {
        assert_eq!(parse_page_size("12"), Ok(12));
        assert!(parse_page_size("7").is_err());
        assert!(parse_page_size("many").is_err());
    }

    #[test]
    fn truncate_keeps_short_titles() {
        assert_eq!(truncate("Lekki Plot", 12), "Lekki Plot");
        assert_eq!(truncate("Waterfront acreage in Epe", 12), "Waterfron...");
    }

    #[test]
    fn share_suffix_drops_root() {
        assert_eq!(share_suffix("/"), "");
        assert_eq!(share_suffix("?state=Lagos"), "?state=Lagos");
    }
}
