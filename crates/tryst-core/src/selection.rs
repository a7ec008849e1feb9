//! Selection vocabulary: date categories and schedule slots.
//!
//! The vocabulary is closed: four categories and four schedule slots.
//! Each schedule slot has one canonical slug plus a fixed set of accepted
//! alternate spellings, so manually retyped links still resolve.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A user's current date-plan selection.
///
/// `categories` preserves insertion order and is not de-duplicated here;
/// both are caller policy. `schedule` holds the slot display text (e.g.
/// "Saturday 6:30 PM") or an empty string when nothing is chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub categories: Vec<String>,
    pub schedule: String,
}

impl Selection {
    /// Whether this selection is complete enough to display or share.
    pub fn has_data(&self) -> bool {
        !self.categories.is_empty() && !self.schedule.is_empty()
    }
}

/// One of the four recognized date categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Hiking,
    Movie,
    Coffee,
    Dinner,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Hiking,
        Category::Movie,
        Category::Coffee,
        Category::Dinner,
    ];

    /// Display name, as shown to the user.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Hiking => "Hiking",
            Category::Movie => "Movie",
            Category::Coffee => "Coffee",
            Category::Dinner => "Dinner",
        }
    }

    /// Lowercase slug used in friendly paths.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Hiking => "hiking",
            Category::Movie => "movie",
            Category::Coffee => "coffee",
            Category::Dinner => "dinner",
        }
    }

    /// Look up a category from an arbitrary token, case-insensitively.
    ///
    /// Returns `None` for anything outside the vocabulary; callers decide
    /// whether that is an error or a token to drop.
    pub fn from_token(token: &str) -> Option<Category> {
        let normalized = token.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == normalized)
    }
}

/// One of the four schedule slots offered by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSlot {
    Friday7pm,
    Saturday10am,
    Saturday630pm,
    Sunday3pm,
}

impl ScheduleSlot {
    /// All slots, in display order.
    pub const ALL: [ScheduleSlot; 4] = [
        ScheduleSlot::Friday7pm,
        ScheduleSlot::Saturday10am,
        ScheduleSlot::Saturday630pm,
        ScheduleSlot::Sunday3pm,
    ];

    /// Display text, as stored in selections and payloads.
    pub fn display_text(&self) -> &'static str {
        match self {
            ScheduleSlot::Friday7pm => "Friday 7:00 PM",
            ScheduleSlot::Saturday10am => "Saturday 10:00 AM",
            ScheduleSlot::Saturday630pm => "Saturday 6:30 PM",
            ScheduleSlot::Sunday3pm => "Sunday 3:00 PM",
        }
    }

    /// Canonical slug used when building friendly paths.
    pub fn slug(&self) -> &'static str {
        match self {
            ScheduleSlot::Friday7pm => "friday-7pm",
            ScheduleSlot::Saturday10am => "saturday-10am",
            ScheduleSlot::Saturday630pm => "saturday-630pm",
            ScheduleSlot::Sunday3pm => "sunday-3pm",
        }
    }

    /// Accepted spellings for this slot, canonical slug first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ScheduleSlot::Friday7pm => &["friday-7pm", "fri-7pm", "friday7pm"],
            ScheduleSlot::Saturday10am => &["saturday-10am", "sat-10am", "saturday10am"],
            ScheduleSlot::Saturday630pm => &[
                "saturday-630pm",
                "sat-630pm",
                "saturday6:30pm",
                "saturday6-30pm",
                "sat-6-30pm",
            ],
            ScheduleSlot::Sunday3pm => &["sunday-3pm", "sun-3pm", "sunday3pm"],
        }
    }

    /// Look up a slot from its exact display text.
    pub fn from_display(text: &str) -> Option<ScheduleSlot> {
        ScheduleSlot::ALL
            .into_iter()
            .find(|slot| slot.display_text() == text)
    }

    /// Resolve a slug through the alias table.
    ///
    /// The input is normalized first (lowercased, characters outside
    /// `[a-z0-9-]` stripped), so retyped variants like "Sat-6-30PM"
    /// still resolve.
    pub fn from_slug(slug: &str) -> Option<ScheduleSlot> {
        if slug.is_empty() {
            return None;
        }
        let normalized = normalize_slug(slug);
        alias_table().get(normalized.as_str()).copied()
    }
}

/// Lowercase and strip everything outside `[a-z0-9-]`.
fn normalize_slug(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Alias lookup table, keyed by normalized alias.
///
/// Built once on first use; insertion asserts that no alias resolves to
/// two different slots.
fn alias_table() -> &'static HashMap<String, ScheduleSlot> {
    static TABLE: Lazy<HashMap<String, ScheduleSlot>> = Lazy::new(|| {
        let mut table = HashMap::new();
        for slot in ScheduleSlot::ALL {
            for alias in slot.aliases() {
                let key = normalize_slug(alias);
                let previous = table.insert(key, slot);
                assert!(
                    previous.is_none() || previous == Some(slot),
                    "schedule alias {:?} resolves to two slots",
                    alias
                );
            }
        }
        table
    });
    &TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_token_case_insensitive() {
        assert_eq!(Category::from_token("Hiking"), Some(Category::Hiking));
        assert_eq!(Category::from_token("dinner"), Some(Category::Dinner));
        assert_eq!(Category::from_token(" COFFEE "), Some(Category::Coffee));
        assert_eq!(Category::from_token("unicorn"), None);
        assert_eq!(Category::from_token(""), None);
    }

    #[test]
    fn test_schedule_display_round_trip() {
        for slot in ScheduleSlot::ALL {
            assert_eq!(ScheduleSlot::from_display(slot.display_text()), Some(slot));
        }
        assert_eq!(ScheduleSlot::from_display("Monday 9:00 AM"), None);
    }

    #[test]
    fn test_schedule_slug_aliases_resolve() {
        assert_eq!(
            ScheduleSlot::from_slug("sat-6-30pm"),
            Some(ScheduleSlot::Saturday630pm)
        );
        assert_eq!(
            ScheduleSlot::from_slug("Saturday6:30PM"),
            Some(ScheduleSlot::Saturday630pm)
        );
        assert_eq!(
            ScheduleSlot::from_slug("FRI-7PM"),
            Some(ScheduleSlot::Friday7pm)
        );
        assert_eq!(ScheduleSlot::from_slug("whenever"), None);
        assert_eq!(ScheduleSlot::from_slug(""), None);
    }

    #[test]
    fn test_canonical_slug_is_accepted() {
        for slot in ScheduleSlot::ALL {
            assert_eq!(ScheduleSlot::from_slug(slot.slug()), Some(slot));
        }
    }

    #[test]
    fn test_alias_table_has_no_cross_slot_collisions() {
        // Forces the lazy table to build; the collision assert inside
        // would panic here if two slots shared a normalized alias.
        let table = alias_table();
        let alias_count: usize = ScheduleSlot::ALL
            .iter()
            .flat_map(|slot| slot.aliases())
            .map(|alias| normalize_slug(alias))
            .collect::<std::collections::HashSet<_>>()
            .len();
        assert_eq!(table.len(), alias_count);
    }

    #[test]
    fn test_selection_has_data() {
        let mut selection = Selection::default();
        assert!(!selection.has_data());
        selection.categories.push("Hiking".to_string());
        assert!(!selection.has_data());
        selection.schedule = "Friday 7:00 PM".to_string();
        assert!(selection.has_data());
    }
}
