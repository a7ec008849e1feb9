//! Friendly result paths and the results query string.
//!
//! A selection maps to a compact path like
//! `/results_hiking-coffee_saturday-630pm`. Decoding is deliberately
//! lenient: three historical prefixes are accepted, category tokens may
//! be separated by `-`, `+`, `,` or whitespace, unknown categories are
//! dropped silently, and schedule slugs resolve through the alias table.
//! Only an unresolvable prefix or schedule rejects the whole path.

use crate::error::{Result, TrystError};
use crate::selection::{Category, ScheduleSlot, Selection};

/// The generic results path, used when the schedule is unrecognized.
pub const RESULTS_PATH: &str = "/results";

/// Token substituted when no recognized category remains.
pub const SURPRISE_TOKEN: &str = "surprise";

/// Accepted path prefixes, current spelling first.
const PATH_PREFIXES: [&str; 3] = ["/results_", "/results-", "/r/"];

/// Build the friendly path for a selection.
///
/// Unrecognized categories are silently dropped; if none remain the
/// literal `surprise` token stands in. An unrecognized schedule falls
/// back to the generic `/results` path.
pub fn results_path(categories: &[String], schedule: &str) -> String {
    let slot = match ScheduleSlot::from_display(schedule) {
        Some(slot) => slot,
        None => return RESULTS_PATH.to_string(),
    };

    let tokens: Vec<&str> = categories
        .iter()
        .filter_map(|token| Category::from_token(token))
        .map(|category| category.slug())
        .collect();
    let categories_part = if tokens.is_empty() {
        SURPRISE_TOKEN.to_string()
    } else {
        tokens.join("-")
    };

    format!("/results_{}_{}", categories_part, slot.slug())
}

/// Decode a friendly path back to a selection.
///
/// Returns the recognized subset of categories (lowercase slugs, original
/// order) and the exact schedule display text. Failures are typed here;
/// outward-facing callers flatten them to a "no saved selection" state.
pub fn parse_results_path(path: &str) -> Result<Selection> {
    let remainder = PATH_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .ok_or_else(|| TrystError::UnrecognizedRoute(format!("Not a results path: {}", path)))?;

    // Last-occurrence split: schedule slugs never contain '_', category
    // segments one day might.
    let (categories_part, schedule_part) = remainder
        .rsplit_once('_')
        .ok_or_else(|| TrystError::UnrecognizedRoute(format!("No schedule segment: {}", path)))?;

    let slot = ScheduleSlot::from_slug(schedule_part).ok_or_else(|| {
        TrystError::UnrecognizedRoute(format!("Unknown schedule slug: {}", schedule_part))
    })?;

    let categories = categories_part
        .split(|c: char| c == '-' || c == '+' || c == ',' || c.is_whitespace())
        .filter_map(|token| Category::from_token(token))
        .map(|category| category.slug().to_string())
        .collect();

    Ok(Selection {
        categories,
        schedule: slot.display_text().to_string(),
    })
}

/// Query parameters consumed by the results view.
///
/// `None` means the parameter was absent or empty; present values take
/// priority over saved state, field by field.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResultsQuery {
    pub categories: Option<Vec<String>>,
    pub schedule: Option<String>,
}

/// Build `/results?t=…&s=…` for a selection; parts are omitted when empty.
pub fn results_query_path(categories: &[String], schedule: &str) -> String {
    let mut parts = Vec::new();
    if !categories.is_empty() {
        parts.push(format!("t={}", encode_query_value(&categories.join(","))));
    }
    if !schedule.is_empty() {
        parts.push(format!("s={}", encode_query_value(schedule)));
    }
    if parts.is_empty() {
        RESULTS_PATH.to_string()
    } else {
        format!("{}?{}", RESULTS_PATH, parts.join("&"))
    }
}

/// Parse a results query string.
///
/// Accepts a bare query (`t=…&s=…`), one with a leading `?`, or a full
/// `/results?…` path. Unknown parameters are ignored; decoding errors in
/// a value drop that value rather than failing the whole query.
pub fn parse_results_query(query: &str) -> ResultsQuery {
    let query = query
        .split_once('?')
        .map(|(_, rest)| rest)
        .unwrap_or(query);

    let mut result = ResultsQuery::default();
    for pair in query.split('&') {
        let (name, raw_value) = match pair.split_once('=') {
            Some(split) => split,
            None => continue,
        };
        let value = match decode_query_value(raw_value) {
            Some(value) => value,
            None => continue,
        };
        match name {
            "t" => {
                let tokens: Vec<String> = value
                    .split(',')
                    .filter(|token| !token.is_empty())
                    .map(|token| token.to_string())
                    .collect();
                if !tokens.is_empty() {
                    result.categories = Some(tokens);
                }
            }
            "s" => {
                if !value.is_empty() {
                    result.schedule = Some(value);
                }
            }
            _ => {}
        }
    }
    result
}

/// Percent-encode a query value (RFC 3986 unreserved set kept verbatim).
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decode a percent-encoded query value; `+` counts as a space.
fn decode_query_value(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = value.get(i + 1..i + 3)?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_path_lowercases_and_joins() {
        let categories = vec!["Hiking".to_string(), "Coffee".to_string()];
        assert_eq!(
            results_path(&categories, "Saturday 6:30 PM"),
            "/results_hiking-coffee_saturday-630pm"
        );
    }

    #[test]
    fn test_empty_selection_falls_back_to_surprise() {
        assert_eq!(
            results_path(&[], "Friday 7:00 PM"),
            "/results_surprise_friday-7pm"
        );
        let unknown = vec!["unicorn".to_string()];
        assert_eq!(
            results_path(&unknown, "Friday 7:00 PM"),
            "/results_surprise_friday-7pm"
        );
    }

    #[test]
    fn test_unrecognized_schedule_falls_back_to_generic_path() {
        let categories = vec!["Movie".to_string()];
        assert_eq!(results_path(&categories, "whenever"), "/results");
        assert_eq!(results_path(&categories, ""), "/results");
    }

    #[test]
    fn test_parse_recovers_categories_and_schedule() {
        let selection = parse_results_path("/results_hiking-coffee_saturday-630pm").unwrap();
        assert_eq!(selection.categories, vec!["hiking", "coffee"]);
        assert_eq!(selection.schedule, "Saturday 6:30 PM");
    }

    #[test]
    fn test_parse_accepts_alias_prefixes() {
        let selection = parse_results_path("/r/dinner_sat-6-30pm").unwrap();
        assert_eq!(selection.categories, vec!["dinner"]);
        assert_eq!(selection.schedule, "Saturday 6:30 PM");

        let selection = parse_results_path("/results-movie_sunday-3pm").unwrap();
        assert_eq!(selection.categories, vec!["movie"]);
    }

    #[test]
    fn test_parse_drops_unknown_categories_silently() {
        let selection = parse_results_path("/results_unicorn-movie_sunday-3pm").unwrap();
        assert_eq!(selection.categories, vec!["movie"]);
    }

    #[test]
    fn test_parse_accepts_mixed_separators() {
        let selection = parse_results_path("/results_hiking+coffee,dinner_friday-7pm").unwrap();
        assert_eq!(selection.categories, vec!["hiking", "coffee", "dinner"]);
    }

    #[test]
    fn test_parse_rejects_unknown_schedule() {
        assert!(matches!(
            parse_results_path("/results_movie_whenever"),
            Err(TrystError::UnrecognizedRoute(_))
        ));
    }

    #[test]
    fn test_parse_rejects_foreign_paths() {
        for path in ["/decode", "/", "/resultsX_movie_sunday-3pm", "/r/"] {
            assert!(matches!(
                parse_results_path(path),
                Err(TrystError::UnrecognizedRoute(_))
            ));
        }
    }

    #[test]
    fn test_round_trip_over_legal_combinations() {
        let vocabulary = [
            vec![],
            vec!["Hiking".to_string()],
            vec!["Movie".to_string(), "Dinner".to_string()],
            vec![
                "Hiking".to_string(),
                "Movie".to_string(),
                "Coffee".to_string(),
                "Dinner".to_string(),
            ],
        ];
        for categories in &vocabulary {
            for slot in crate::selection::ScheduleSlot::ALL {
                let path = results_path(categories, slot.display_text());
                let parsed = parse_results_path(&path).unwrap();
                let expected: Vec<String> = categories
                    .iter()
                    .filter_map(|token| Category::from_token(token))
                    .map(|category| category.slug().to_string())
                    .collect();
                assert_eq!(parsed.categories, expected);
                assert_eq!(parsed.schedule, slot.display_text());
            }
        }
    }

    #[test]
    fn test_query_path_encodes_schedule() {
        let categories = vec!["hiking".to_string(), "coffee".to_string()];
        assert_eq!(
            results_query_path(&categories, "Saturday 6:30 PM"),
            "/results?t=hiking%2Ccoffee&s=Saturday%206%3A30%20PM"
        );
        assert_eq!(results_query_path(&[], ""), "/results");
    }

    #[test]
    fn test_query_round_trip() {
        let categories = vec!["hiking".to_string(), "coffee".to_string()];
        let query = results_query_path(&categories, "Saturday 6:30 PM");
        let parsed = parse_results_query(&query);
        assert_eq!(parsed.categories, Some(categories));
        assert_eq!(parsed.schedule, Some("Saturday 6:30 PM".to_string()));
    }

    #[test]
    fn test_query_accepts_plus_for_space() {
        let parsed = parse_results_query("t=dinner&s=Friday+7%3A00+PM");
        assert_eq!(parsed.schedule, Some("Friday 7:00 PM".to_string()));
    }

    #[test]
    fn test_empty_query_values_count_as_absent() {
        let parsed = parse_results_query("?t=&s=");
        assert_eq!(parsed, ResultsQuery::default());
        let parsed = parse_results_query("t=,,&other=1");
        assert_eq!(parsed, ResultsQuery::default());
    }
}
