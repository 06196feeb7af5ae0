// SPDX-License-Identifier: MPL-2.0
//! Gamified achievements computed from the journal store.
//!
//! The descriptor set is fixed at compile time; progress is re-evaluated
//! from the store on demand and never persisted separately.

use super::{Mood, Store};
use chrono::NaiveDate;

/// Static descriptor for one achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    /// Emoji glyph shown on the card.
    pub icon: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    /// Target value for the progress bar.
    pub goal: u32,
}

/// The fixed achievement set.
pub const ALL: [Achievement; 5] = [
    Achievement {
        id: "first-entry",
        icon: "🎤",
        title_key: "achievement-first-entry-title",
        description_key: "achievement-first-entry-description",
        goal: 1,
    },
    Achievement {
        id: "ten-entries",
        icon: "📚",
        title_key: "achievement-ten-entries-title",
        description_key: "achievement-ten-entries-description",
        goal: 10,
    },
    Achievement {
        id: "week-streak",
        icon: "🔥",
        title_key: "achievement-week-streak-title",
        description_key: "achievement-week-streak-description",
        goal: 7,
    },
    Achievement {
        id: "mood-explorer",
        icon: "🧭",
        title_key: "achievement-mood-explorer-title",
        description_key: "achievement-mood-explorer-description",
        goal: Mood::ALL.len() as u32,
    },
    Achievement {
        id: "active-month",
        icon: "📅",
        title_key: "achievement-active-month-title",
        description_key: "achievement-active-month-description",
        goal: 15,
    },
];

/// Progress toward a single achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub achievement: &'static Achievement,
    pub current: u32,
    pub unlocked: bool,
}

impl Progress {
    fn new(achievement: &'static Achievement, current: u32) -> Self {
        Self {
            achievement,
            current: current.min(achievement.goal),
            unlocked: current >= achievement.goal,
        }
    }
}

/// Evaluates every achievement against the store. `today` anchors the
/// streak computation.
#[must_use]
pub fn evaluate(store: &Store, today: NaiveDate) -> Vec<Progress> {
    ALL.iter()
        .map(|achievement| {
            let current = match achievement.id {
                "first-entry" | "ten-entries" => store.len() as u32,
                "week-streak" => store.current_streak(today),
                "mood-explorer" => store.moods_used() as u32,
                "active-month" => store.days_with_entries() as u32,
                _ => 0,
            };
            Progress::new(achievement, current)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::Entry;
    use chrono::{Local, TimeZone, Utc};

    fn entry_on(day: u32, mood: Mood) -> Entry {
        let recorded_at = Local
            .with_ymd_and_hms(2025, 3, day, 9, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        Entry {
            recorded_at,
            mood,
            summary: String::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn progress_for<'a>(progress: &'a [Progress], id: &str) -> &'a Progress {
        progress
            .iter()
            .find(|p| p.achievement.id == id)
            .expect("achievement exists")
    }

    #[test]
    fn empty_store_unlocks_nothing() {
        let progress = evaluate(&Store::new(), today());
        assert_eq!(progress.len(), ALL.len());
        assert!(progress.iter().all(|p| !p.unlocked));
        assert!(progress.iter().all(|p| p.current == 0));
    }

    #[test]
    fn first_entry_unlocks_immediately() {
        let mut store = Store::new();
        store.push(entry_on(10, Mood::Joy));

        let progress = evaluate(&store, today());
        assert!(progress_for(&progress, "first-entry").unlocked);
        assert!(!progress_for(&progress, "ten-entries").unlocked);
    }

    #[test]
    fn week_streak_tracks_consecutive_days() {
        let mut store = Store::new();
        for day in 4..=10 {
            store.push(entry_on(day, Mood::Neutral));
        }

        let progress = evaluate(&store, today());
        let streak = progress_for(&progress, "week-streak");
        assert_eq!(streak.current, 7);
        assert!(streak.unlocked);
    }

    #[test]
    fn mood_explorer_requires_all_moods() {
        let mut store = Store::new();
        for (day, mood) in Mood::ALL.iter().enumerate() {
            store.push(entry_on(day as u32 + 1, *mood));
        }

        let progress = evaluate(&store, today());
        assert!(progress_for(&progress, "mood-explorer").unlocked);
    }

    #[test]
    fn progress_is_capped_at_goal() {
        let mut store = Store::new();
        for _ in 0..25 {
            store.push(entry_on(10, Mood::Joy));
        }

        let progress = evaluate(&store, today());
        let ten = progress_for(&progress, "ten-entries");
        assert_eq!(ten.current, ten.achievement.goal);
        assert!(ten.unlocked);
    }
}
