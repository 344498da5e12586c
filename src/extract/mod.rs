// Source-agnostic listing extraction driven by a SourceProfile.
pub mod clean;
pub mod profiles;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::model::{ExtractError, Listing, SearchQuery};
use profiles::SourceProfile;

struct RowSelectors {
    row: Selector,
    name: Selector,
    specialization: Selector,
    rating: Selector,
    reviews: Selector,
    location: Selector,
    phone: Selector,
    link: Selector,
}

fn parse_selector(raw: &str) -> Result<Selector, ExtractError> {
    Selector::parse(raw).map_err(|_| ExtractError::Selector(raw.to_string()))
}

impl RowSelectors {
    fn compile(profile: &SourceProfile) -> Result<Self, ExtractError> {
        Ok(Self {
            row: parse_selector(profile.row)?,
            name: parse_selector(profile.name)?,
            specialization: parse_selector(profile.specialization)?,
            rating: parse_selector(profile.rating)?,
            reviews: parse_selector(profile.reviews)?,
            location: parse_selector(profile.location)?,
            phone: parse_selector(profile.phone)?,
            link: parse_selector(profile.link)?,
        })
    }
}

/// Pulls listings out of a search-results page, in document order.
///
/// Rows are handled independently: a row without a usable provider name is
/// skipped and logged, the rest of the page still goes through. Missing
/// location/specialization fall back to the caller-supplied search criteria.
pub fn extract_listings(
    html: &str,
    profile: &SourceProfile,
    query: &SearchQuery,
) -> Result<Vec<Listing>, ExtractError> {
    let document = Html::parse_document(html);
    let selectors = RowSelectors::compile(profile)?;

    let mut listings = Vec::new();
    for row in document.select(&selectors.row) {
        match extract_row(row, &selectors, profile, query) {
            Some(listing) => listings.push(listing),
            None => debug!(source = %profile.source, "skipped row without a usable provider name"),
        }
    }
    Ok(listings)
}

/// Trimmed text of the first element matching `selector` within `row`.
fn first_text(row: ElementRef<'_>, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Trimmed text of every match, joined with ", ". JustDial spreads the
/// specialization over several amenity tabs.
fn joined_text(row: ElementRef<'_>, selector: &Selector) -> String {
    row.select(selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn extract_row(
    row: ElementRef<'_>,
    selectors: &RowSelectors,
    profile: &SourceProfile,
    query: &SearchQuery,
) -> Option<Listing> {
    let provider_name = first_text(row, &selectors.name);
    if provider_name.chars().count() < 3 {
        return None;
    }

    let specialization = joined_text(row, &selectors.specialization);
    let location = first_text(row, &selectors.location);
    let href = row
        .select(&selectors.link)
        .next()
        .and_then(|el| el.value().attr("href"))
        .unwrap_or("");

    Some(Listing {
        provider_name,
        specialization: if specialization.is_empty() {
            query.description.clone()
        } else {
            specialization
        },
        rating: clean::clean_rating(&first_text(row, &selectors.rating)),
        reviews: clean::clean_reviews(&first_text(row, &selectors.reviews)),
        location: if location.is_empty() {
            query.location.clone()
        } else {
            location
        },
        phone: clean::clean_phone(&first_text(row, &selectors.phone)),
        website: clean::absolutize(href, profile.origin),
        source: profile.source,
    })
}
