//! Selector sets for each directory site.
//!
//! Selectors are data, not code: when a site reshuffles its markup the fix is
//! an edit here, the extractor itself stays untouched. Selector lists
//! ("a, b, c") are allowed wherever a site uses several layouts.

use crate::model::{SearchQuery, Source};

#[derive(Debug, Clone)]
pub struct SourceProfile {
    pub source: Source,
    /// Origin prefixed onto relative detail links.
    pub origin: &'static str,
    /// One matched element per listing; document order is preserved.
    pub row: &'static str,
    pub name: &'static str,
    pub specialization: &'static str,
    pub rating: &'static str,
    pub reviews: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    /// Element whose `href` is the detail link.
    pub link: &'static str,
}

impl SourceProfile {
    /// Search-results URL for this source.
    pub fn search_url(&self, query: &SearchQuery) -> String {
        match self.source {
            Source::JustDial => {
                format!("{}/{}/{}/", self.origin, query.location, query.description)
            }
            Source::Sulekha => {
                let slug = query
                    .description
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("-");
                format!("{}/{}/{}", self.origin, query.location, slug)
            }
            Source::UrbanPro => {
                let q = format!("{} in {}", query.description, query.location);
                format!("{}/search?q={}", self.origin, urlencoding::encode(&q))
            }
        }
    }
}

pub fn profiles() -> [SourceProfile; 3] {
    [
        SourceProfile {
            source: Source::JustDial,
            origin: "https://www.justdial.com",
            row: ".resultbox_info",
            name: ".resultbox_title_anchor.line_clamp_1",
            specialization: ".amenities_tabs.font12.fw500.color777",
            rating: ".resultbox_totalrate",
            reviews: ".resultbox_countrate",
            location: ".font15.fw400.color111",
            phone: ".callcontent",
            link: ".resultbox_title_anchorbox",
        },
        SourceProfile {
            source: Source::Sulekha,
            origin: "https://www.sulekha.com",
            row: ".provider-card, .business-listing, .service-provider, .listing-item",
            name: ".business-name, .provider-name, h3, .listing-title",
            specialization: ".services, .specialization, .category, .service-list",
            rating: ".rating, .star-rating, .rating-value",
            reviews: ".reviews, .review-count, .review-text",
            location: ".location, .address, .area",
            phone: ".phone, .contact, .mobile",
            link: "a",
        },
        SourceProfile {
            source: Source::UrbanPro,
            origin: "https://www.urbanpro.com",
            row: ".tutor-card, .provider-card, .professional-card, .listing-card",
            name: ".tutor-name, .provider-name, .professional-name, .listing-name, h3",
            specialization: ".subjects, .services, .skills, .categories",
            rating: ".rating, .stars, .rating-value",
            reviews: ".reviews, .review-count, .student-count",
            location: ".location, .area, .address",
            phone: ".phone, .contact, .mobile",
            link: "a",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> SearchQuery {
        SearchQuery {
            location: "Mumbai".to_string(),
            description: "home electrician".to_string(),
        }
    }

    #[test]
    fn justdial_url_is_path_based() {
        let [justdial, _, _] = profiles();
        assert_eq!(
            justdial.search_url(&query()),
            "https://www.justdial.com/Mumbai/home electrician/"
        );
    }

    #[test]
    fn sulekha_url_kebab_cases_the_description() {
        let [_, sulekha, _] = profiles();
        assert_eq!(
            sulekha.search_url(&query()),
            "https://www.sulekha.com/Mumbai/home-electrician"
        );
    }

    #[test]
    fn urbanpro_url_encodes_the_query() {
        let [_, _, urbanpro] = profiles();
        assert_eq!(
            urbanpro.search_url(&query()),
            "https://www.urbanpro.com/search?q=home%20electrician%20in%20Mumbai"
        );
    }
}
