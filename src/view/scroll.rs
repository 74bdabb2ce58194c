//! Scroll spy
//!
//! Picks the section currently at the top of the viewport.

/// Vertical position of a section relative to the viewport top (rows,
/// negative once scrolled past)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPosition {
    pub id: String,
    pub top: i32,
}

impl SectionPosition {
    pub fn new(id: impl Into<String>, top: i32) -> Self {
        Self { id: id.into(), top }
    }
}

/// The section whose top is the lowest one still at or above `threshold`.
///
/// Ties go to the earlier section. `None` when every section is still
/// below the threshold.
pub fn active_section(positions: &[SectionPosition], threshold: i32) -> Option<&str> {
    let mut best: Option<&SectionPosition> = None;
    for pos in positions.iter().filter(|p| p.top <= threshold) {
        match best {
            Some(current) if pos.top <= current.top => {}
            _ => best = Some(pos),
        }
    }
    best.map(|p| p.id.as_str())
}

/// Positions of sections laid out at absolute `anchors` (row offsets in
/// the content) when the content is scrolled by `scroll` rows
pub fn positions_at(anchors: &[(String, usize)], scroll: usize) -> Vec<SectionPosition> {
    anchors
        .iter()
        .map(|(id, row)| SectionPosition::new(id.clone(), *row as i32 - scroll as i32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<(String, usize)> {
        vec![
            ("quick-tips".to_string(), 0),
            ("quest-keep".to_string(), 10),
            ("project-keep".to_string(), 30),
            ("recycle-safe".to_string(), 55),
        ]
    }

    #[test]
    fn test_top_of_page() {
        let positions = positions_at(&layout(), 0);
        assert_eq!(active_section(&positions, 2), Some("quick-tips"));
    }

    #[test]
    fn test_scrolled_into_section() {
        assert_eq!(active_section(&positions_at(&layout(), 12), 2), Some("quest-keep"));
        assert_eq!(active_section(&positions_at(&layout(), 28), 2), Some("project-keep"));
        assert_eq!(active_section(&positions_at(&layout(), 200), 2), Some("recycle-safe"));
    }

    #[test]
    fn test_nothing_above_threshold() {
        let positions = vec![SectionPosition::new("a", 5), SectionPosition::new("b", 9)];
        assert_eq!(active_section(&positions, 2), None);
        assert_eq!(active_section(&[], 2), None);
    }

    #[test]
    fn test_ties_prefer_earlier() {
        let positions = vec![
            SectionPosition::new("a", -3),
            SectionPosition::new("b", 1),
            SectionPosition::new("c", 1),
        ];
        assert_eq!(active_section(&positions, 2), Some("b"));
    }
}
