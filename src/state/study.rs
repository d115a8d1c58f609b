//! Study session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! A study session moves through four phases: group selection, a short
//! loading gap while the card set is fetched, the learning loop, and the
//! summary screen. The transitions here are pure; the study page owns the
//! signal, drives the HTTP calls and feeds results back in, so the whole
//! flow can be exercised without a browser.

#[cfg(test)]
#[path = "study_test.rs"]
mod study_test;

use crate::net::types::StudyFlashcard;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudyPhase {
    #[default]
    Selection,
    Loading,
    Learning,
    Summary,
}

/// Per-session counters. Timestamps are `Date::now()` milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionStats {
    pub correct: u32,
    pub wrong: u32,
    pub skipped: u32,
    pub started_at_ms: f64,
    pub ended_at_ms: Option<f64>,
}

impl SessionStats {
    fn started(now_ms: f64) -> Self {
        Self {
            started_at_ms: now_ms,
            ..Self::default()
        }
    }

    /// Share of correct answers among all answered or skipped cards,
    /// rounded to whole percent. Zero for an empty session.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn accuracy_percent(&self) -> u32 {
        let total = self.correct + self.wrong + self.skipped;
        if total == 0 {
            return 0;
        }
        let percent = f64::from(self.correct) * 100.0 / f64::from(total);
        percent.round() as u32
    }

    pub fn duration_ms(&self) -> f64 {
        self.ended_at_ms
            .map_or(0.0, |ended| ended - self.started_at_ms)
    }
}

/// Render milliseconds as `m:ss` for the summary screen.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration_ms(ms: f64) -> String {
    let seconds = (ms / 1000.0).floor().max(0.0) as u64;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudyState {
    pub phase: StudyPhase,
    pub cards: Vec<StudyFlashcard>,
    pub current: usize,
    pub stats: SessionStats,
    pub mistakes: Vec<StudyFlashcard>,
}

impl StudyState {
    /// Enter the loading phase with fresh counters, dropping any leftovers
    /// from a previous run.
    pub fn begin_loading(&mut self, now_ms: f64) {
        self.phase = StudyPhase::Loading;
        self.cards.clear();
        self.current = 0;
        self.stats = SessionStats::started(now_ms);
        self.mistakes.clear();
    }

    /// Adopt the fetched card set and start learning.
    ///
    /// An empty set sends the user back to selection instead of presenting
    /// a zero-length session; returns whether learning actually started.
    pub fn adopt_cards(&mut self, cards: Vec<StudyFlashcard>) -> bool {
        if cards.is_empty() {
            self.phase = StudyPhase::Selection;
            return false;
        }
        self.cards = cards;
        self.current = 0;
        self.phase = StudyPhase::Learning;
        true
    }

    /// Abandon the attempt and return to group selection.
    pub fn back_to_selection(&mut self) {
        self.phase = StudyPhase::Selection;
    }

    pub fn current_card(&self) -> Option<&StudyFlashcard> {
        if self.phase != StudyPhase::Learning {
            return None;
        }
        self.cards.get(self.current)
    }

    /// Record the user's self-assessment for the current card and advance.
    /// Wrong cards are collected for the repeat round.
    pub fn record_result(&mut self, correct: bool, now_ms: f64) {
        let Some(card) = self.current_card().cloned() else {
            return;
        };
        if correct {
            self.stats.correct += 1;
        } else {
            self.stats.wrong += 1;
            self.mistakes.push(card);
        }
        self.advance(now_ms);
    }

    /// Skip the current card without judging it.
    pub fn record_skip(&mut self, now_ms: f64) {
        if self.current_card().is_none() {
            return;
        }
        self.stats.skipped += 1;
        self.advance(now_ms);
    }

    fn advance(&mut self, now_ms: f64) {
        if self.current + 1 < self.cards.len() {
            self.current += 1;
        } else {
            self.stats.ended_at_ms = Some(now_ms);
            self.phase = StudyPhase::Summary;
        }
    }

    /// Start a fresh learning round over the collected mistakes.
    /// Does nothing when there are none.
    pub fn repeat_mistakes(&mut self, now_ms: f64) {
        if self.mistakes.is_empty() {
            return;
        }
        self.cards = std::mem::take(&mut self.mistakes);
        self.current = 0;
        self.stats = SessionStats::started(now_ms);
        self.phase = StudyPhase::Learning;
    }

    /// Progress through the card set as a 0..=100 percentage for the bar.
    pub fn progress_percent(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = (self.current + 1) as f64 / self.cards.len() as f64;
        fraction * 100.0
    }
}
