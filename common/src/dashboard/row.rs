pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;
pub const MAX_TECH_BADGES: usize = 3;

/// First 50 characters of the description followed by an ellipsis.
/// The ellipsis is appended even when nothing was cut.
pub fn description_preview(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Badges rendered in the tech stack column.
#[derive(Debug, PartialEq, Eq)]
pub struct TechBadges<'a> {
    pub shown: &'a [String],
    pub overflow: Option<usize>,
}

impl<'a> TechBadges<'a> {
    pub fn new(tech_stack: &'a [String]) -> Self {
        let cut = tech_stack.len().min(MAX_TECH_BADGES);
        let hidden = tech_stack.len() - cut;
        Self {
            shown: &tech_stack[..cut],
            overflow: (hidden > 0).then_some(hidden),
        }
    }

    pub fn overflow_label(&self) -> Option<String> {
        self.overflow.map(|hidden| format!("+{hidden}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_preview_always_appends_ellipsis() {
        assert_eq!(description_preview("short"), "short...");
        assert_eq!(description_preview(""), "...");
    }

    #[test]
    fn test_preview_cuts_at_fifty_characters() {
        let long = "x".repeat(80);
        let preview = description_preview(&long);
        assert_eq!(preview.len(), 53);
        assert!(preview.starts_with(&"x".repeat(50)));
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let accented = "é".repeat(60);
        assert_eq!(description_preview(&accented).chars().count(), 53);
    }

    #[test]
    fn test_badges_cap_at_three_with_overflow() {
        let stack = labels(&["A", "B", "C", "D", "E"]);
        let badges = TechBadges::new(&stack);
        assert_eq!(badges.shown, &stack[..3]);
        assert_eq!(badges.overflow_label().as_deref(), Some("+2"));
    }

    #[test]
    fn test_badges_without_overflow() {
        let stack = labels(&["A", "B", "C"]);
        let badges = TechBadges::new(&stack);
        assert_eq!(badges.shown.len(), 3);
        assert_eq!(badges.overflow, None);
        assert!(TechBadges::new(&[]).shown.is_empty());
    }
}
