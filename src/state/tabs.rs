//! The experience/education timeline tabs.

/// Which timeline panel is visible. The two are mutually exclusive; with no
/// initial marking the deterministic default is Experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineTab {
    #[default]
    Experience,
    Education,
}

impl TimelineTab {
    pub fn other(self) -> Self {
        match self {
            TimelineTab::Experience => TimelineTab::Education,
            TimelineTab::Education => TimelineTab::Experience,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimelineTab::Experience => "Experience",
            TimelineTab::Education => "Education",
        }
    }

    pub fn index(self) -> usize {
        match self {
            TimelineTab::Experience => 0,
            TimelineTab::Education => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_experience() {
        assert_eq!(TimelineTab::default(), TimelineTab::Experience);
    }

    #[test]
    fn test_other_is_involutive() {
        assert_eq!(TimelineTab::Experience.other(), TimelineTab::Education);
        assert_eq!(
            TimelineTab::Experience.other().other(),
            TimelineTab::Experience
        );
    }
}
