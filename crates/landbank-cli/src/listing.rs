//! `show`, `merchant` and `options` commands.

use landbank_client::{AdsQuery, LandbankClient};
use landbank_core::catalog::{
    option_label, FEATURED_OPTIONS, LAND_SIZE_UNITS, LAND_TYPES, PAGE_SIZE_OPTIONS,
    PROPERTY_TYPES, STATUS_OPTIONS, TITLE_DOCUMENT_TYPES, VERIFICATION_OPTIONS,
};
use landbank_core::{listing_detail, map_to_listing_cards, merchant_info};

use crate::browse::print_cards;

/// Print the full detail view of one listing.
///
/// # Errors
///
/// Returns an error if the request fails or no listing has that ID.
pub(crate) async fn run_show(client: &LandbankClient, ad_id: &str) -> anyhow::Result<()> {
    let record = client
        .get_ad(ad_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("listing '{ad_id}' not found"))?;
    let detail = listing_detail(&record)
        .ok_or_else(|| anyhow::anyhow!("listing '{ad_id}' has no usable identifier"))?;
    let card = &detail.card;

    println!("{}", card.title);
    println!("{}  \u{b7}  {}", card.price, card.size);
    println!("{}", card.location);
    if let Some(name) = &card.merchant_name {
        println!("Listed by {name}");
    }
    println!("Listed on {}", detail.listed_on);
    println!();

    for stat in &detail.summary {
        println!("{:<16}{}", stat.label, stat.value);
    }
    println!();

    for amenity in &detail.amenities {
        let mark = if amenity.available { "x" } else { " " };
        println!("[{mark}] {}", amenity.label);
    }

    if let Some(description) = &detail.description {
        println!();
        println!("{description}");
    }
    if !detail.media_links.is_empty() {
        println!();
        println!("Media:");
        for link in &detail.media_links {
            println!("  {link}");
        }
    }

    Ok(())
}

/// Print a merchant's profile followed by its listings.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub(crate) async fn run_merchant(
    client: &LandbankClient,
    code: &str,
    page_size: u32,
) -> anyhow::Result<()> {
    let records = client
        .fetch_records(&AdsQuery::for_merchant(code, page_size))
        .await?;

    match merchant_info(&records, code) {
        Some(info) => {
            println!("{} ({})", info.merchant_name, info.merchant_code);
            if let Some(trading_name) = info
                .trading_name
                .as_deref()
                .filter(|t| *t != info.merchant_name)
            {
                println!("Trading as {trading_name}");
            }
            if let Some(email) = &info.contact_email {
                println!("Contact: {email}");
            }
            if let Some(description) = &info.business_description {
                println!("{description}");
            }
        }
        None => println!("Merchant ({code})"),
    }
    println!();

    let cards = map_to_listing_cards(&records);
    if cards.is_empty() {
        println!("no listings for merchant {code}");
        return Ok(());
    }
    let shown: Vec<_> = cards.iter().collect();
    print_cards(&shown);
    Ok(())
}

/// Print every accepted filter value with its display label.
pub(crate) fn run_options() {
    let groups: [(&str, &[&str]); 6] = [
        ("property types", PROPERTY_TYPES),
        ("land uses", LAND_TYPES),
        ("land size units", LAND_SIZE_UNITS),
        ("statuses", STATUS_OPTIONS),
        ("verification", VERIFICATION_OPTIONS),
        ("title documents", TITLE_DOCUMENT_TYPES),
    ];
    for (heading, codes) in groups {
        println!("{heading}:");
        for code in codes {
            println!("  {code:<26}{}", option_label(code));
        }
    }

    println!("featured:");
    for option in FEATURED_OPTIONS.iter().filter(|o| !o.value.is_empty()) {
        println!("  {:<26}{}", option.value, option.label);
    }

    let sizes: Vec<String> = PAGE_SIZE_OPTIONS.iter().map(u32::to_string).collect();
    println!("page sizes: {}", sizes.join(", "));
}
