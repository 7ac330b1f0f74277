//! Replacement mode session state
//!
//! The host owns one `ReplacementSession` per editor session and feeds it the
//! content changes from each document-change notification. The session decides
//! which inserted digits to rewrite and returns the edits for the host to apply.
//!
//! Edits applied by the host on the session's behalf come back as change
//! notifications too. Every planned replacement is counted as a pending
//! programmatic edit, and planning is suspended until the host has reported
//! each of them applied with `edit_applied`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::substitution::substitute_char;
use crate::text::{TextPos, TextRange};

/// Replacement mode toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReplacementMode {
    #[default]
    Off,
    On,
}

impl ReplacementMode {
    pub fn toggled(self) -> Self {
        match self {
            ReplacementMode::Off => ReplacementMode::On,
            ReplacementMode::On => ReplacementMode::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == ReplacementMode::On
    }
}

impl From<bool> for ReplacementMode {
    fn from(active: bool) -> Self {
        if active {
            ReplacementMode::On
        } else {
            ReplacementMode::Off
        }
    }
}

impl fmt::Display for ReplacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementMode::Off => write!(f, "OFF"),
            ReplacementMode::On => write!(f, "ON"),
        }
    }
}

/// Options supplied by the host when a session starts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionOptions {
    /// Start with replacement mode on
    pub replacement_mode: bool,
}

/// One entry of a host document-change notification
///
/// Extra fields the host sends along (offsets, lengths) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentChange {
    /// Range that was replaced, in pre-change coordinates
    pub range: TextRange,
    /// Text inserted in its place
    pub text: String,
}

impl ContentChange {
    pub fn insert(pos: TextPos, text: impl Into<String>) -> Self {
        Self {
            range: TextRange::new(pos, pos),
            text: text.into(),
        }
    }

    /// The inserted character, when exactly one was inserted
    fn single_char(&self) -> Option<char> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

/// An edit the host must apply: replace `range` with `text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub range: TextRange,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct ReplacementSession {
    mode: ReplacementMode,
    pending_edits: usize,
}

impl ReplacementSession {
    pub fn new(options: &SessionOptions) -> Self {
        Self {
            mode: options.replacement_mode.into(),
            pending_edits: 0,
        }
    }

    pub fn mode(&self) -> ReplacementMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_on()
    }

    /// Flip replacement mode and return the new mode
    pub fn toggle(&mut self) -> ReplacementMode {
        self.mode = self.mode.toggled();
        log::info!("Replacement mode: {}", self.mode);
        self.mode
    }

    /// True while edits planned by this session have not all been applied
    pub fn is_applying_edit(&self) -> bool {
        self.pending_edits > 0
    }

    /// Plan replacements for one batch of content changes
    ///
    /// Only single-character insertions with a mapped letter are rewritten.
    /// The replacement covers the inserted character, which starts where the
    /// changed range started.
    pub fn plan_replacements(&mut self, changes: &[ContentChange]) -> Vec<Replacement> {
        if !self.is_active() {
            return Vec::new();
        }
        if self.is_applying_edit() {
            log::debug!(
                "Skipping {} change(s) while {} edit(s) are pending",
                changes.len(),
                self.pending_edits
            );
            return Vec::new();
        }

        let replacements: Vec<Replacement> = changes
            .iter()
            .filter_map(|change| {
                let letter = substitute_char(change.single_char()?)?;
                Some(Replacement {
                    range: TextRange::single_char(change.range.start),
                    text: letter.to_string(),
                })
            })
            .collect();

        self.pending_edits += replacements.len();
        if !replacements.is_empty() {
            log::debug!("Planned {} replacement(s)", replacements.len());
        }
        replacements
    }

    /// Mark one planned replacement as applied by the host
    pub fn edit_applied(&mut self) {
        self.pending_edits = self.pending_edits.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(line: usize, character: usize, text: &str) -> ContentChange {
        ContentChange::insert(TextPos::new(line, character), text)
    }

    fn active_session() -> ReplacementSession {
        ReplacementSession::new(&SessionOptions {
            replacement_mode: true,
        })
    }

    #[test]
    fn test_mode_toggles() {
        let mut session = ReplacementSession::default();
        assert_eq!(session.mode(), ReplacementMode::Off);
        assert_eq!(session.toggle(), ReplacementMode::On);
        assert!(session.is_active());
        assert_eq!(session.toggle(), ReplacementMode::Off);
        assert!(!session.is_active());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ReplacementMode::On.to_string(), "ON");
        assert_eq!(ReplacementMode::Off.to_string(), "OFF");
    }

    #[test]
    fn test_inactive_session_plans_nothing() {
        let mut session = ReplacementSession::default();
        assert!(session.plan_replacements(&[typed(0, 4, "5")]).is_empty());
        assert!(!session.is_applying_edit());
    }

    #[test]
    fn test_plans_replacement_for_mapped_digit() {
        let mut session = active_session();
        let planned = session.plan_replacements(&[typed(2, 9, "5")]);

        assert_eq!(
            planned,
            vec![Replacement {
                range: TextRange::new(TextPos::new(2, 9), TextPos::new(2, 10)),
                text: "E".to_string(),
            }]
        );
        assert!(session.is_applying_edit());
    }

    #[test]
    fn test_unmapped_and_multi_char_pass_through() {
        let mut session = active_session();
        let planned = session.plan_replacements(&[
            typed(0, 0, "9"),
            typed(0, 1, "a"),
            typed(0, 2, "12"),
            typed(0, 3, ""),
        ]);
        assert!(planned.is_empty());
        assert!(!session.is_applying_edit());
    }

    #[test]
    fn test_replacing_a_selection_uses_range_start() {
        let mut session = active_session();
        let change = ContentChange {
            range: TextRange::new(TextPos::new(1, 4), TextPos::new(1, 7)),
            text: "0".to_string(),
        };
        let planned = session.plan_replacements(&[change]);
        assert_eq!(planned[0].range, TextRange::single_char(TextPos::new(1, 4)));
        assert_eq!(planned[0].text, "X");
    }

    #[test]
    fn test_guard_suppresses_own_edits_until_applied() {
        let mut session = active_session();
        let planned = session.plan_replacements(&[typed(0, 0, "1"), typed(3, 2, "2")]);
        assert_eq!(planned.len(), 2);

        // The host's edit comes back as a change notification
        assert!(session.plan_replacements(&[typed(0, 0, "3")]).is_empty());

        session.edit_applied();
        assert!(session.is_applying_edit());
        session.edit_applied();
        assert!(!session.is_applying_edit());

        assert_eq!(session.plan_replacements(&[typed(0, 1, "3")])[0].text, "C");
    }

    #[test]
    fn test_edit_applied_saturates() {
        let mut session = active_session();
        session.edit_applied();
        assert!(!session.is_applying_edit());
    }

    #[test]
    fn test_options_from_host_object() {
        let options: SessionOptions = serde_json::from_str(r#"{"replacementMode": true}"#).unwrap();
        assert!(options.replacement_mode);

        let options: SessionOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SessionOptions::default());
    }

    #[test]
    fn test_change_ignores_extra_host_fields() {
        let json = r#"{
            "range": {"start": {"line": 0, "character": 8}, "end": {"line": 0, "character": 8}},
            "rangeOffset": 8,
            "rangeLength": 0,
            "text": "4"
        }"#;
        let change: ContentChange = serde_json::from_str(json).unwrap();
        assert_eq!(change, typed(0, 8, "4"));
    }
}
