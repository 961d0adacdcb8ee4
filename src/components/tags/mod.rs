use crate::components::events::Event;
use std::collections::{BTreeSet, HashMap};

/// Number of entries in the fixed tag palette
pub const PALETTE_SIZE: u32 = 5;

/// Display style for one tag
#[derive(Debug, Clone, PartialEq)]
pub struct TagStyle {
    pub name: String,
    /// Number of events carrying the tag
    pub frequency: usize,
    /// Position in the frequency order, starting at 0
    pub rank: usize,
    /// Hue in degrees, evenly spaced by rank
    pub hue: f64,
    pub background: String,
    pub foreground: String,
    /// Fixed palette slot in 1..=5
    pub palette_index: u32,
}

/// Tag styles in display order: most frequent first, then by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagStyles {
    styles: Vec<TagStyle>,
}

impl TagStyles {
    pub fn compute(events: &[Event]) -> Self {
        let ordered = sorted_tags(tag_frequencies(events));
        let total = ordered.len();

        let styles = ordered
            .into_iter()
            .enumerate()
            .map(|(rank, (name, frequency))| {
                let hue = hue_for_rank(rank, total);
                TagStyle {
                    palette_index: palette_index(&name),
                    background: format!("hsl({:.0}, 70%, 85%)", hue),
                    foreground: format!("hsl({:.0}, 70%, 25%)", hue),
                    name,
                    frequency,
                    rank,
                    hue,
                }
            })
            .collect();

        Self { styles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagStyle> {
        self.styles.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TagStyle> {
        self.styles.iter().find(|style| style.name == name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Number of events carrying each distinct tag
pub fn tag_frequencies(events: &[Event]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for event in events {
        let distinct: BTreeSet<&String> = event.tags.iter().collect();
        for tag in distinct {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Descending frequency, ties by ascending name
pub fn sorted_tags(frequencies: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut tags: Vec<(String, usize)> = frequencies.into_iter().collect();
    tags.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });
    tags
}

/// Evenly spaced hue for the tag at `rank` out of `total`
pub fn hue_for_rank(rank: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    rank as f64 * (360.0 / total as f64)
}

/// Palette slot derived from the tag's character codes
pub fn palette_index(tag: &str) -> u32 {
    let sum: u64 = tag.chars().map(|c| u64::from(u32::from(c))).sum();
    (sum % u64::from(PALETTE_SIZE)) as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tagged(tags: &[&str]) -> Event {
        Event {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            summary: String::new(),
            location: String::new(),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            screenshot_url: None,
        }
    }

    #[test]
    fn test_palette_index_deterministic_and_in_range() {
        assert_eq!(palette_index("work"), palette_index("work"));
        // w(119) + o(111) + r(114) + k(107) = 451
        assert_eq!(palette_index("work"), 2);
        for tag in ["", "a", "urgent", "日本語", "🎉 party"] {
            let index = palette_index(tag);
            assert!((1..=5).contains(&index), "{} -> {}", tag, index);
        }
    }

    #[test]
    fn test_order_by_frequency_then_name() {
        let events = vec![
            tagged(&["beta", "alpha"]),
            tagged(&["gamma", "beta"]),
            tagged(&["alpha", "delta"]),
        ];

        let styles = TagStyles::compute(&events);
        let names: Vec<&str> = styles.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["alpha", "beta", "delta", "gamma"]);
        assert_eq!(styles.get("alpha").unwrap().frequency, 2);
        assert_eq!(styles.get("gamma").unwrap().frequency, 1);
    }

    #[test]
    fn test_repeated_tag_counts_once_per_event() {
        let events = vec![tagged(&["a", "a"]), tagged(&["a", "b", "b"])];

        let frequencies = tag_frequencies(&events);

        assert_eq!(frequencies.get("a"), Some(&2));
        assert_eq!(frequencies.get("b"), Some(&1));
        assert_eq!(TagStyles::compute(&events).get("a").unwrap().frequency, 2);
    }

    #[test]
    fn test_hues_evenly_spaced() {
        let events = vec![tagged(&["a", "b", "c", "d"])];

        let styles = TagStyles::compute(&events);
        let hues: Vec<f64> = styles.iter().map(|s| s.hue).collect();

        assert_eq!(hues, vec![0.0, 90.0, 180.0, 270.0]);
        assert_eq!(styles.get("b").unwrap().background, "hsl(90, 70%, 85%)");
        assert_eq!(styles.get("b").unwrap().foreground, "hsl(90, 70%, 25%)");
    }

    #[test]
    fn test_empty_tag_set() {
        let styles = TagStyles::compute(&[tagged(&[])]);

        assert!(styles.is_empty());
        assert_eq!(hue_for_rank(0, 0), 0.0);
    }
}
