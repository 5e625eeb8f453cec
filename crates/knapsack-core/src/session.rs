//! Session state and the action state machine driving it.
//!
//! All game mutation flows through [`Session::apply`]: the front end
//! translates input into an [`Action`], applies it, and displays the
//! resulting [`Outcome`] or [`ActionError`]. The session owns its
//! catalog and keeps the capacity invariant (capacity is always derived
//! from the current level) by construction.

use crate::catalog::{Catalog, Item, MIN_LEVEL};
use crate::solver;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Points awarded for an optimal submission
pub const SCORE_BONUS: u64 = 100;

/// A player request against the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flip membership of an item index in the selection
    Toggle(usize),
    /// Check the current selection against the optimum
    Submit,
    /// Reveal one optimal item set
    Hint,
    /// Clear selection and hint for the current level
    Reset,
    /// Move to the next or previous level
    ChangeLevel(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// What an accepted action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Item toggled; `selected` is its new membership state
    Toggled { index: usize, selected: bool },
    /// Selection exceeds the weight budget
    Overweight { total_weight: u32, capacity: u32 },
    /// Selection matches the optimal value; level completed
    Optimal { score: u64 },
    /// Selection is feasible but beatable
    Suboptimal { total_value: u64, optimal_value: u64 },
    /// Hint set computed and stored
    HintShown,
    /// Selection and hint cleared
    Cleared,
    /// Level changed
    LevelChanged { level: u8, capacity: u32 },
}

impl Outcome {
    /// Whether the caller should write the progress record now
    pub fn persist(&self) -> bool {
        matches!(self, Self::Optimal { .. } | Self::LevelChanged { .. })
    }

    /// The player-facing message for this outcome
    pub fn message(&self) -> String {
        match self {
            Self::Toggled { .. } => String::new(),
            Self::Overweight { .. } => "Too heavy! Try again.".to_string(),
            Self::Optimal { .. } => "Victory! You found the optimal combo!".to_string(),
            Self::Suboptimal { optimal_value, .. } => {
                format!("Not optimal. Best value is {}.", optimal_value)
            }
            Self::HintShown => "Hint shown. Highlighted = optimal combo.".to_string(),
            Self::Cleared => String::new(),
            Self::LevelChanged { level, .. } => format!("Welcome to Level {}!", level),
        }
    }
}

/// Recoverable errors from [`Session::apply`]; nothing is mutated when
/// one of these comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Toggle index outside the current level's item range
    InvalidIndex { index: usize, item_count: usize },
    /// ChangeLevel would leave the valid level range
    LevelOutOfRange { direction: Direction },
    /// Next level requested before completing the current one
    LevelLocked,
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, item_count } => {
                write!(f, "item {} does not exist (level has {})", index, item_count)
            }
            Self::LevelOutOfRange { direction } => match direction {
                Direction::Next => write!(f, "already at the last level"),
                Direction::Previous => write!(f, "already at the first level"),
            },
            Self::LevelLocked => write!(f, "Complete the current level first!"),
        }
    }
}

impl std::error::Error for ActionError {}

/// The durable slice of a session, shaped like the original save file:
/// level keys are stringified for the JSON mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub level: u8,
    #[serde(default)]
    pub scores: HashMap<String, u64>,
    #[serde(default)]
    pub completed: HashMap<String, bool>,
}

/// Live game state for one play session
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    level: u8,
    capacity: u32,
    selection: Vec<usize>,
    hint: Vec<usize>,
    score: u64,
    best_scores: HashMap<u8, u64>,
    completed: HashMap<u8, bool>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Session {
    /// Fresh session at level 1 with no progress
    pub fn new(catalog: Catalog) -> Self {
        let capacity = catalog.capacity_for(MIN_LEVEL);
        Self {
            catalog,
            level: MIN_LEVEL,
            capacity,
            selection: Vec::new(),
            hint: Vec::new(),
            score: 0,
            best_scores: HashMap::new(),
            completed: HashMap::new(),
        }
    }

    /// Session restored from a saved progress record. Unknown levels in
    /// the record are ignored; an out-of-range saved level clamps into
    /// the catalog's range. The capacity is re-derived from the level,
    /// never read from the record.
    pub fn restore(catalog: Catalog, progress: &Progress) -> Self {
        let mut session = Self::new(catalog);
        session.level = progress.level.clamp(MIN_LEVEL, session.catalog.max_level());
        session.capacity = session.catalog.capacity_for(session.level);
        for (key, &score) in &progress.scores {
            if let Ok(level) = key.parse::<u8>() {
                if session.catalog.contains(level) {
                    session.best_scores.insert(level, score);
                }
            }
        }
        for (key, &done) in &progress.completed {
            if let Ok(level) = key.parse::<u8>() {
                if done && session.catalog.contains(level) {
                    session.completed.insert(level, true);
                }
            }
        }
        session
    }

    /// The durable fields, ready for the progress store
    pub fn snapshot(&self) -> Progress {
        Progress {
            level: self.level,
            scores: self
                .best_scores
                .iter()
                .map(|(level, &score)| (level.to_string(), score))
                .collect(),
            completed: self
                .completed
                .iter()
                .map(|(level, &done)| (level.to_string(), done))
                .collect(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn hint(&self) -> &[usize] {
        &self.hint
    }

    /// Items for the current level
    pub fn items(&self) -> &[Item] {
        // The level is kept in range by construction.
        self.catalog.items(self.level).unwrap_or(&[])
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    pub fn is_hinted(&self, index: usize) -> bool {
        self.hint.contains(&index)
    }

    /// Best score recorded for a level, if any
    pub fn best_score(&self, level: u8) -> Option<u64> {
        self.best_scores.get(&level).copied()
    }

    pub fn is_completed(&self, level: u8) -> bool {
        self.completed.get(&level).copied().unwrap_or(false)
    }

    /// Total (weight, value) of the current selection
    pub fn totals(&self) -> (u32, u64) {
        let items = self.items();
        let weight = self.selection.iter().map(|&i| items[i].weight).sum();
        let value = self.selection.iter().map(|&i| items[i].value).sum();
        (weight, value)
    }

    /// Apply one player action. On error nothing has changed.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, ActionError> {
        match action {
            Action::Toggle(index) => self.toggle(index),
            Action::Submit => Ok(self.submit()),
            Action::Hint => Ok(self.show_hint()),
            Action::Reset => Ok(self.reset()),
            Action::ChangeLevel(direction) => self.change_level(direction),
        }
    }

    fn toggle(&mut self, index: usize) -> Result<Outcome, ActionError> {
        let item_count = self.items().len();
        if index >= item_count {
            return Err(ActionError::InvalidIndex { index, item_count });
        }

        let selected = match self.selection.iter().position(|&i| i == index) {
            Some(pos) => {
                self.selection.remove(pos);
                false
            }
            None => {
                self.selection.push(index);
                true
            }
        };
        // The old hint no longer reflects the player's picks.
        self.hint.clear();
        Ok(Outcome::Toggled { index, selected })
    }

    fn submit(&mut self) -> Outcome {
        let (total_weight, total_value) = self.totals();
        if total_weight > self.capacity {
            return Outcome::Overweight {
                total_weight,
                capacity: self.capacity,
            };
        }

        let optimal_value = solver::optimal_value(self.capacity, self.items());
        if total_value == optimal_value {
            self.score += SCORE_BONUS;
            let best = self.best_scores.entry(self.level).or_insert(0);
            *best = (*best).max(self.score);
            self.completed.insert(self.level, true);
            Outcome::Optimal { score: self.score }
        } else {
            Outcome::Suboptimal {
                total_value,
                optimal_value,
            }
        }
    }

    fn show_hint(&mut self) -> Outcome {
        self.hint = solver::optimal_item_set(self.capacity, self.items());
        Outcome::HintShown
    }

    fn reset(&mut self) -> Outcome {
        self.selection.clear();
        self.hint.clear();
        Outcome::Cleared
    }

    fn change_level(&mut self, direction: Direction) -> Result<Outcome, ActionError> {
        match direction {
            Direction::Next => {
                if self.level >= self.catalog.max_level() {
                    return Err(ActionError::LevelOutOfRange { direction });
                }
                if !self.is_completed(self.level) {
                    return Err(ActionError::LevelLocked);
                }
                self.level += 1;
            }
            Direction::Previous => {
                // No completion gate going back, matching the original.
                if self.level <= MIN_LEVEL {
                    return Err(ActionError::LevelOutOfRange { direction });
                }
                self.level -= 1;
            }
        }
        self.capacity = self.catalog.capacity_for(self.level);
        self.selection.clear();
        self.hint.clear();
        Ok(Outcome::LevelChanged {
            level: self.level,
            capacity: self.capacity,
        })
    }
}
