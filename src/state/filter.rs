//! Project filtering and the staggered card reveal.

use crate::config::{CARD_STAGGER_TICKS, FILTER_CATEGORIES};
use crate::models::ProjectRecord;

/// The active filter: everything, or one exact category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    All,
    Category(String),
}

impl FilterSelection {
    /// Exact, case-sensitive category match. No partial matching.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Category(wanted) => wanted == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterSelection::All => "All",
            FilterSelection::Category(c) => crate::models::category_label(c),
        }
    }
}

/// The ordered subsequence of `projects` matching `selection`. `All` is the
/// identity; an unknown category yields an empty list, never an error.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    selection: &FilterSelection,
) -> Vec<&'a ProjectRecord> {
    projects
        .iter()
        .filter(|p| selection.matches(&p.category))
        .collect()
}

/// Filter bar state: exactly one button active at a time, plus the tick at
/// which the selection last changed (the origin of the card stagger).
#[derive(Debug, Clone)]
pub struct FilterState {
    options: Vec<FilterSelection>,
    selected: usize,
    changed_tick: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        let mut options = vec![FilterSelection::All];
        options.extend(
            FILTER_CATEGORIES
                .iter()
                .map(|c| FilterSelection::Category((*c).to_string())),
        );
        Self {
            options,
            selected: 0,
            changed_tick: 0,
        }
    }
}

impl FilterState {
    pub fn options(&self) -> &[FilterSelection] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.options[self.selected]
    }

    /// Activate the button at `index`, deactivating every other one.
    pub fn select(&mut self, index: usize, tick: u64) {
        if index < self.options.len() && index != self.selected {
            self.selected = index;
            self.changed_tick = tick;
        }
    }

    pub fn select_next(&mut self, tick: u64) {
        let next = (self.selected + 1) % self.options.len();
        self.select(next, tick);
    }

    pub fn select_prev(&mut self, tick: u64) {
        let prev = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.options.len() - 1);
        self.select(prev, tick);
    }

    /// Whether card `index` of the current result set has entered view.
    /// Card i appears i stagger intervals after the selection changed, in
    /// list order.
    pub fn card_shown(&self, index: usize, tick: u64) -> bool {
        tick >= self.changed_tick + index as u64 * CARD_STAGGER_TICKS
    }

    /// True while some card in a `count`-card result set is still pending,
    /// i.e. the UI needs redraws to finish the stagger.
    pub fn stagger_running(&self, count: usize, tick: u64) -> bool {
        count > 0 && !self.card_shown(count - 1, tick)
    }
}
