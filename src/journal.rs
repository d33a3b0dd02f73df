//! The application-state object: owns the record list and every operation
//! over it. Pure in-memory; persistence is the store's job.

use crate::model::{Classification, SortMode, Thought};
use crate::stats::{tally_by, Tally};
use crate::{IntroResult, IntrospectError};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Journal {
    thoughts: Vec<Thought>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_thoughts(thoughts: Vec<Thought>) -> Self {
        Self { thoughts }
    }

    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    pub fn len(&self) -> usize {
        self.thoughts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thoughts.is_empty()
    }

    pub fn find(&self, id: u64) -> Option<&Thought> {
        self.thoughts.iter().find(|t| t.id == id)
    }

    /// Log a new thought at the front of the list.
    pub fn add(
        &mut self,
        content: &str,
        root_cause: &str,
        classification: Classification,
    ) -> IntroResult<&Thought> {
        if content.trim().is_empty() {
            return Err(IntrospectError::Validation(
                "thought content must not be empty".to_string(),
            ));
        }
        if root_cause.trim().is_empty() {
            return Err(IntrospectError::Validation(
                "root cause must not be empty".to_string(),
            ));
        }

        let mut thought = Thought::new(content.trim(), root_cause.trim(), classification);
        // Ids are creation-time millis; consecutive in-process adds can
        // land in the same millisecond, so bump until unique.
        while self.find(thought.id).is_some() {
            thought.id += 1;
        }
        self.thoughts.insert(0, thought);
        Ok(&self.thoughts[0])
    }

    /// Update fields of an existing thought. Id, score and timestamp are
    /// kept; history stays anchored at the original creation time.
    pub fn edit(
        &mut self,
        id: u64,
        content: Option<&str>,
        root_cause: Option<&str>,
        classification: Option<Classification>,
    ) -> IntroResult<&Thought> {
        let idx = self
            .thoughts
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| IntrospectError::Validation(format!("no thought with id {}", id)))?;

        if let Some(content) = content {
            if content.trim().is_empty() {
                return Err(IntrospectError::Validation(
                    "thought content must not be empty".to_string(),
                ));
            }
            self.thoughts[idx].content = content.trim().to_string();
        }
        if let Some(cause) = root_cause {
            if cause.trim().is_empty() {
                return Err(IntrospectError::Validation(
                    "root cause must not be empty".to_string(),
                ));
            }
            self.thoughts[idx].root_cause = cause.trim().to_string();
        }
        if let Some(classification) = classification {
            self.thoughts[idx].classification = classification;
        }
        Ok(&self.thoughts[idx])
    }

    pub fn remove(&mut self, id: u64) -> IntroResult<Thought> {
        let idx = self
            .thoughts
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| IntrospectError::Validation(format!("no thought with id {}", id)))?;
        Ok(self.thoughts.remove(idx))
    }

    /// Adjust the recurrence score; returns the new value.
    pub fn vote(&mut self, id: u64, delta: i64) -> IntroResult<i64> {
        let thought = self
            .thoughts
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| IntrospectError::Validation(format!("no thought with id {}", id)))?;
        thought.score += delta;
        Ok(thought.score)
    }

    pub fn clear(&mut self) {
        self.thoughts.clear();
    }

    /// Filter by substring query, then sort. Returns references in display
    /// order; the stored order is untouched.
    pub fn select(&self, query: Option<&str>, sort: SortMode) -> Vec<&Thought> {
        let mut selected: Vec<&Thought> = match query {
            Some(q) if !q.trim().is_empty() => {
                self.thoughts.iter().filter(|t| t.matches(q)).collect()
            }
            _ => self.thoughts.iter().collect(),
        };

        match sort {
            SortMode::Newest => selected.sort_by(|a, b| b.id.cmp(&a.id)),
            SortMode::Oldest => selected.sort_by(|a, b| a.id.cmp(&b.id)),
            SortMode::Recurring => selected.sort_by(|a, b| b.score.cmp(&a.score)),
        }
        selected
    }

    pub fn tally_root_causes(&self) -> Tally {
        tally_by(self.thoughts.iter(), |t| t.root_cause.clone())
    }

    pub fn tally_natures(&self) -> Tally {
        tally_by(self.thoughts.iter(), |t| t.classification.to_string())
    }
}
