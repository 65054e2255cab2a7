//! Scroll-triggered reveals and the back-to-top flag.

use std::collections::HashSet;

use crate::config::BACK_TO_TOP_ROWS;

/// A page element opted into scroll reveal: a stable id plus its row range
/// within the virtual page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub id: String,
    pub top: usize,
    pub height: usize,
}

impl RevealTarget {
    pub fn new(id: impl Into<String>, top: usize, height: usize) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Whether a row range currently satisfies the visibility threshold:
/// its top has entered the lower `(1 - threshold)` of the viewport and its
/// bottom is still below the upper `threshold` line.
pub fn in_viewport(
    top: usize,
    height: usize,
    scroll: usize,
    viewport_rows: usize,
    threshold: f32,
) -> bool {
    let rel_top = top as i64 - scroll as i64;
    let rel_bottom = rel_top + height as i64;
    let vh = viewport_rows as f32;
    rel_top as f32 <= vh * (1.0 - threshold) && rel_bottom as f32 >= vh * threshold
}

/// The set of elements already revealed. Monotonic: nothing ever leaves.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: HashSet<String>,
    /// Gates the floating back-to-top control. Strict threshold comparison,
    /// re-evaluated on every check; no hysteresis.
    pub back_to_top: bool,
}

impl RevealSet {
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Evaluate every target against the current scroll position, marking
    /// newly visible ones revealed, and refresh the back-to-top flag.
    /// Returns true when anything changed.
    pub fn check(
        &mut self,
        targets: &[RevealTarget],
        scroll: usize,
        viewport_rows: usize,
        threshold: f32,
    ) -> bool {
        let mut changed = false;
        for target in targets {
            if self.revealed.contains(&target.id) {
                continue;
            }
            if in_viewport(target.top, target.height, scroll, viewport_rows, threshold) {
                self.revealed.insert(target.id.clone());
                changed = true;
            }
        }
        let past = scroll > BACK_TO_TOP_ROWS;
        if past != self.back_to_top {
            self.back_to_top = past;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REVEAL_THRESHOLD;

    #[test]
    fn test_element_below_viewport_not_visible() {
        // Viewport is 40 rows; element starts at row 100.
        assert!(!in_viewport(100, 5, 0, 40, REVEAL_THRESHOLD));
    }

    #[test]
    fn test_element_inside_viewport_visible() {
        assert!(in_viewport(10, 5, 0, 40, REVEAL_THRESHOLD));
    }

    #[test]
    fn test_element_barely_entering_is_not_yet_visible() {
        // With threshold 0.15 and a 40-row viewport the top must reach
        // row 34 of the viewport; an element whose top sits right at the
        // bottom edge has not crossed it.
        assert!(!in_viewport(39, 1, 0, 40, REVEAL_THRESHOLD));
        assert!(in_viewport(34, 2, 0, 40, REVEAL_THRESHOLD));
    }

    #[test]
    fn test_scrolled_past_element_not_visible() {
        // Element fully above the viewport once scrolled far enough.
        assert!(!in_viewport(10, 5, 100, 40, REVEAL_THRESHOLD));
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let targets = vec![RevealTarget::new("about", 30, 10)];
        let mut set = RevealSet::default();

        assert!(!set.is_revealed("about"));
        set.check(&targets, 20, 40, REVEAL_THRESHOLD);
        assert!(set.is_revealed("about"));

        // Scroll anywhere else; the element stays revealed.
        for scroll in [0usize, 500, 3, 999] {
            set.check(&targets, scroll, 40, REVEAL_THRESHOLD);
            assert!(set.is_revealed("about"));
        }
    }

    #[test]
    fn test_back_to_top_strict_threshold() {
        let mut set = RevealSet::default();
        set.check(&[], BACK_TO_TOP_ROWS, 40, REVEAL_THRESHOLD);
        assert!(!set.back_to_top);
        set.check(&[], BACK_TO_TOP_ROWS + 1, 40, REVEAL_THRESHOLD);
        assert!(set.back_to_top);
        // No hysteresis: drops back immediately.
        set.check(&[], BACK_TO_TOP_ROWS, 40, REVEAL_THRESHOLD);
        assert!(!set.back_to_top);
    }

    #[test]
    fn test_check_reports_changes() {
        // Tall enough that its bottom clears the 40 * 0.15 = 6 row line.
        let targets = vec![RevealTarget::new("a", 0, 10)];
        let mut set = RevealSet::default();
        assert!(set.check(&targets, 0, 40, REVEAL_THRESHOLD));
        // Second pass: nothing new.
        assert!(!set.check(&targets, 0, 40, REVEAL_THRESHOLD));
    }

    #[test]
    fn test_short_element_at_top_stays_below_threshold() {
        // Bottom at row 5 never crosses the 40 * 0.15 = 6 row line, so the
        // element does not count as visible and check reports no change.
        let targets = vec![RevealTarget::new("a", 0, 5)];
        let mut set = RevealSet::default();
        assert!(!set.check(&targets, 0, 40, REVEAL_THRESHOLD));
        assert!(!set.is_revealed("a"));
    }
}
