//! Idea entity
//!
//! A rateable record: `votes` and `rating` can only change together, through
//! `add_rating`, which is the only mutator. No external code can observe an
//! intermediate state where one updated and the other didn't.

use serde::{Deserialize, Serialize};

use super::Identifiable;

/// A rateable idea.
///
/// Invariant: `votes >= 0` (enforced by the `u32` type itself) and `rating`
/// is only ever modified through [`Idea::add_rating`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    id: String,
    votes: u32,
    rating: f64,
}

impl Idea {
    /// Construct a new idea with no votes yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            votes: 0,
            rating: 0.0,
        }
    }

    /// Construct with an existing vote/rating history (e.g. when loading
    /// from a Repository).
    pub fn with_history(id: impl Into<String>, votes: u32, rating: f64) -> Self {
        Self {
            id: id.into(),
            votes,
            rating,
        }
    }

    pub fn votes(&self) -> u32 {
        self.votes
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Fold `value` into the running average rating and increment `votes`
    /// by exactly 1, as a single atomic step.
    ///
    /// Callers that need to reject out-of-range values should do so in a
    /// `Strategy` before calling this — this method has no notion of a
    /// valid range, only of how to fold one already-accepted value in.
    pub fn add_rating(&mut self, value: f64) {
        let new_votes = self.votes + 1;
        self.rating = (self.rating * self.votes as f64 + value) / new_votes as f64;
        self.votes = new_votes;
    }
}

impl Identifiable for Idea {
    fn id(&self) -> &str {
        &self.id
    }
}
