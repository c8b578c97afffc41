//! Formatting utilities for terminal output

use crate::solver::{NO_PATH, STEP_SEPARATOR};

/// Join ladder words with the step separator
///
/// `None` renders as the "no path" message.
#[must_use]
pub fn format_path(path: Option<&[String]>) -> String {
    path.map_or_else(|| NO_PATH.to_string(), |words| words.join(STEP_SEPARATOR))
}

/// Format a distance, spelling out the unreachable case
#[must_use]
pub fn format_distance(distance: Option<usize>) -> String {
    distance.map_or_else(|| "unreachable".to_string(), |d| d.to_string())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_path_joins_words() {
        let path = vec!["cat".to_string(), "cot".to_string(), "cog".to_string()];
        assert_eq!(format_path(Some(path.as_slice())), "cat-->cot-->cog");
    }

    #[test]
    fn format_path_single_word() {
        let path = vec!["cat".to_string()];
        assert_eq!(format_path(Some(path.as_slice())), "cat");
    }

    #[test]
    fn format_path_none() {
        assert_eq!(format_path(None), "There is no path");
    }

    #[test]
    fn format_distance_values() {
        assert_eq!(format_distance(Some(0)), "0");
        assert_eq!(format_distance(Some(4)), "4");
        assert_eq!(format_distance(None), "unreachable");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
