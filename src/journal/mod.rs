// SPDX-License-Identifier: MPL-2.0
//! Journal domain model: moods, entries, and the persisted store.
//!
//! The store is the local source of truth for everything the content
//! panes display. Entries are recorded elsewhere (the capture pipeline
//! is not part of this application) and persisted as CBOR in the
//! platform data directory, separate from user-editable TOML settings.

pub mod achievements;

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Store file name within the app data directory.
const STORE_FILE: &str = "journal.cbor";

/// Application name used for directory naming.
const APP_NAME: &str = "VoxJournal";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "VOX_JOURNAL_DATA_DIR";

/// Emotion assigned to a journal entry by the analysis backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Joy,
        Mood::Sadness,
        Mood::Anger,
        Mood::Fear,
        Mood::Surprise,
        Mood::Neutral,
    ];

    /// Returns the i18n message key for this mood's display name.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Mood::Joy => "mood-joy",
            Mood::Sadness => "mood-sadness",
            Mood::Anger => "mood-anger",
            Mood::Fear => "mood-fear",
            Mood::Surprise => "mood-surprise",
            Mood::Neutral => "mood-neutral",
        }
    }

    /// Emoji glyph shown in the calendar grid and journal list.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Mood::Joy => "😊",
            Mood::Sadness => "😢",
            Mood::Anger => "😠",
            Mood::Fear => "😨",
            Mood::Surprise => "😮",
            Mood::Neutral => "😐",
        }
    }
}

/// A single analyzed voice memo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// When the memo was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Dominant emotion derived from the recording.
    pub mood: Mood,
    /// Short text summary of the memo.
    pub summary: String,
}

impl Entry {
    /// Calendar day of the entry in local time.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.recorded_at.with_timezone(&Local).date_naive()
    }
}

/// Aggregated per-day information used by the calendar pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub mood: Mood,
    pub records_count: usize,
}

/// The persisted collection of journal entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    entries: Vec<Entry>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Entries recorded on the given local day, in recording order.
    pub fn day_entries(&self, day: NaiveDate) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.day() == day)
    }

    /// Most frequent mood on the given day; ties are broken by the most
    /// recent occurrence.
    #[must_use]
    pub fn dominant_mood(&self, day: NaiveDate) -> Option<Mood> {
        let mut counts: HashMap<Mood, usize> = HashMap::new();
        let mut last_seen: HashMap<Mood, usize> = HashMap::new();

        for (index, entry) in self.day_entries(day).enumerate() {
            *counts.entry(entry.mood).or_insert(0) += 1;
            last_seen.insert(entry.mood, index);
        }

        counts
            .into_iter()
            .max_by_key(|&(mood, count)| (count, last_seen[&mood]))
            .map(|(mood, _)| mood)
    }

    /// Per-day summaries for a calendar month, keyed by day-of-month.
    #[must_use]
    pub fn month_summaries(&self, year: i32, month: u32) -> HashMap<u32, DaySummary> {
        let mut days: HashMap<u32, usize> = HashMap::new();
        for entry in &self.entries {
            let day = entry.day();
            if day.year() == year && day.month() == month {
                *days.entry(day.day()).or_insert(0) += 1;
            }
        }

        days.into_iter()
            .filter_map(|(day_of_month, records_count)| {
                let date = NaiveDate::from_ymd_opt(year, month, day_of_month)?;
                let mood = self.dominant_mood(date)?;
                Some((
                    day_of_month,
                    DaySummary {
                        mood,
                        records_count,
                    },
                ))
            })
            .collect()
    }

    /// Number of distinct local days with at least one entry.
    #[must_use]
    pub fn days_with_entries(&self) -> usize {
        let mut days: Vec<NaiveDate> = self.entries.iter().map(Entry::day).collect();
        days.sort_unstable();
        days.dedup();
        days.len()
    }

    /// Set of distinct moods appearing anywhere in the journal.
    #[must_use]
    pub fn moods_used(&self) -> usize {
        let mut moods: Vec<Mood> = self.entries.iter().map(|e| e.mood).collect();
        moods.sort_unstable_by_key(|m| *m as usize);
        moods.dedup();
        moods.len()
    }

    /// Length of the run of consecutive days with entries ending at
    /// `today`. A quiet `today` does not break a streak that ran through
    /// yesterday.
    #[must_use]
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let mut day = if self.day_entries(today).next().is_some() {
            today
        } else {
            match today.pred_opt() {
                Some(yesterday) => yesterday,
                None => return 0,
            }
        };

        let mut streak = 0;
        while self.day_entries(day).next().is_some() {
            streak += 1;
            match day.pred_opt() {
                Some(previous) => day = previous,
                None => break,
            }
        }
        streak
    }

    /// Loads the store from the default location.
    ///
    /// Returns a tuple of (store, optional warning key). A missing file is
    /// normal on first launch; a corrupt file degrades to an empty store
    /// with a warning key for the UI.
    #[must_use]
    pub fn load() -> (Self, Option<String>) {
        let Some(path) = store_path() else {
            return (Self::default(), Some("warning-store-no-dir".to_string()));
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::load_from(&path) {
            Ok(store) => (store, None),
            Err(_) => (Self::default(), Some("warning-store-invalid".to_string())),
        }
    }

    /// Saves the store to the default location.
    pub fn save(&self) -> Result<()> {
        let path =
            store_path().ok_or_else(|| Error::State("no data directory available".to_string()))?;
        self.save_to(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let reader = BufReader::new(file);
        ciborium::from_reader(reader).map_err(|e| Error::State(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        let writer = BufWriter::new(file);
        ciborium::into_writer(self, writer).map_err(|e| Error::State(e.to_string()))
    }
}

/// Resolves the store file path: `VOX_JOURNAL_DATA_DIR` if set, otherwise
/// the platform data directory.
fn store_path() -> Option<PathBuf> {
    let base = match std::env::var(ENV_DATA_DIR) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let mut dir = dirs::data_dir()?;
            dir.push(APP_NAME);
            dir
        }
    };
    Some(base.join(STORE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn entry_on(year: i32, month: u32, day: u32, hour: u32, mood: Mood) -> Entry {
        let recorded_at = Local
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        Entry {
            recorded_at,
            mood,
            summary: format!("{:?} on day {}", mood, day),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn dominant_mood_picks_most_frequent() {
        let mut store = Store::new();
        store.push(entry_on(2025, 3, 10, 8, Mood::Joy));
        store.push(entry_on(2025, 3, 10, 12, Mood::Sadness));
        store.push(entry_on(2025, 3, 10, 18, Mood::Joy));

        assert_eq!(store.dominant_mood(date(2025, 3, 10)), Some(Mood::Joy));
    }

    #[test]
    fn dominant_mood_tie_prefers_most_recent() {
        let mut store = Store::new();
        store.push(entry_on(2025, 3, 10, 8, Mood::Joy));
        store.push(entry_on(2025, 3, 10, 12, Mood::Anger));

        assert_eq!(store.dominant_mood(date(2025, 3, 10)), Some(Mood::Anger));
    }

    #[test]
    fn dominant_mood_empty_day_is_none() {
        let store = Store::new();
        assert_eq!(store.dominant_mood(date(2025, 3, 10)), None);
    }

    #[test]
    fn month_summaries_group_by_day_of_month() {
        let mut store = Store::new();
        store.push(entry_on(2025, 3, 10, 8, Mood::Joy));
        store.push(entry_on(2025, 3, 10, 12, Mood::Joy));
        store.push(entry_on(2025, 3, 21, 9, Mood::Fear));
        store.push(entry_on(2025, 4, 1, 9, Mood::Neutral));

        let summaries = store.month_summaries(2025, 3);
        assert_eq!(summaries.len(), 2);
        assert_eq!(
            summaries[&10],
            DaySummary {
                mood: Mood::Joy,
                records_count: 2
            }
        );
        assert_eq!(summaries[&21].records_count, 1);
        assert!(!summaries.contains_key(&1));
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        let mut store = Store::new();
        store.push(entry_on(2025, 3, 8, 9, Mood::Joy));
        store.push(entry_on(2025, 3, 9, 9, Mood::Neutral));
        store.push(entry_on(2025, 3, 10, 9, Mood::Joy));

        assert_eq!(store.current_streak(date(2025, 3, 10)), 3);
    }

    #[test]
    fn streak_survives_a_quiet_today() {
        let mut store = Store::new();
        store.push(entry_on(2025, 3, 8, 9, Mood::Joy));
        store.push(entry_on(2025, 3, 9, 9, Mood::Joy));

        assert_eq!(store.current_streak(date(2025, 3, 10)), 2);
    }

    #[test]
    fn streak_broken_by_gap() {
        let mut store = Store::new();
        store.push(entry_on(2025, 3, 5, 9, Mood::Joy));
        store.push(entry_on(2025, 3, 9, 9, Mood::Joy));

        assert_eq!(store.current_streak(date(2025, 3, 9)), 1);
    }

    #[test]
    fn streak_of_empty_store_is_zero() {
        let store = Store::new();
        assert_eq!(store.current_streak(date(2025, 3, 10)), 0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut store = Store::new();
        store.push(entry_on(2025, 3, 10, 8, Mood::Surprise));

        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("nested").join("journal.cbor");

        store.save_to(&path).expect("save");
        let loaded = Store::load_from(&path).expect("load");
        assert_eq!(loaded, store);
    }

    #[test]
    fn load_from_corrupt_file_errors() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("journal.cbor");
        fs::write(&path, b"not cbor at all \xff\xff").expect("write");

        assert!(Store::load_from(&path).is_err());
    }

    #[test]
    fn days_and_moods_counters() {
        let mut store = Store::new();
        store.push(entry_on(2025, 3, 10, 8, Mood::Joy));
        store.push(entry_on(2025, 3, 10, 12, Mood::Fear));
        store.push(entry_on(2025, 3, 11, 8, Mood::Joy));

        assert_eq!(store.days_with_entries(), 2);
        assert_eq!(store.moods_used(), 2);
    }
}
