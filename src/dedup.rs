use std::collections::HashSet;

use crate::model::Listing;

/// Drops invalid and duplicate listings in one order-preserving pass.
///
/// A listing is invalid when its trimmed provider name is shorter than 3
/// characters. Duplicates are detected by the lowercased name+phone key; the
/// first occurrence wins, so with the fixed merge order [JustDial, Sulekha,
/// UrbanPro] the survivor is deterministic. Note this keeps whichever copy
/// appears first, not the better-scored one.
pub fn dedup_and_filter(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen: HashSet<String> = HashSet::new();
    listings
        .into_iter()
        .filter(|listing| {
            if listing.provider_name.trim().chars().count() < 3 {
                return false;
            }
            seen.insert(listing.dedup_key())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Source;

    fn listing(name: &str, phone: &str, source: Source) -> Listing {
        Listing {
            provider_name: name.to_string(),
            specialization: "electrician".to_string(),
            rating: "4.0".to_string(),
            reviews: 10,
            location: "Mumbai".to_string(),
            phone: phone.to_string(),
            website: String::new(),
            source,
        }
    }

    #[test]
    fn short_and_empty_names_are_dropped() {
        let out = dedup_and_filter(vec![
            listing("", "1", Source::JustDial),
            listing("AB", "2", Source::JustDial),
            listing("ABC", "3", Source::JustDial),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].provider_name, "ABC");
    }

    #[test]
    fn first_occurrence_wins_across_sources() {
        let out = dedup_and_filter(vec![
            listing("ABC Electricals", "9876543210", Source::JustDial),
            listing("abc electricals", "9876543210", Source::Sulekha),
            listing("ABC Electricals", "0000000000", Source::UrbanPro),
        ]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].source, Source::JustDial);
        assert_eq!(out[1].source, Source::UrbanPro);
    }

    #[test]
    fn dedup_is_idempotent() {
        let input = vec![
            listing("ABC Electricals", "9876543210", Source::JustDial),
            listing("ABC Electricals", "9876543210", Source::Sulekha),
            listing("Volt Masters", "123", Source::UrbanPro),
        ];
        let once = dedup_and_filter(input);
        let names: Vec<String> = once.iter().map(|l| l.provider_name.clone()).collect();
        let twice = dedup_and_filter(once);
        let names_again: Vec<String> = twice.iter().map(|l| l.provider_name.clone()).collect();
        assert_eq!(names, names_again);
    }
}
