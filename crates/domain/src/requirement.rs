use derive_more::Deref;

use crate::{Exercise, MuscleGroup, Name};

/// Relative importance of a required muscle group.
#[derive(Deref, Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub const UNIT: Weight = Weight(1.0);

    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !value.is_finite() || value < 0.0 {
            return Err(WeightError::Invalid(value));
        }
        Ok(Self(value))
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::UNIT
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("weight must be a finite, non-negative number ({0})")]
    Invalid(f64),
}

/// Muscle groups a candidate is judged against.
///
/// Every group carries a weight, aligned by position. Unless replaced with
/// [`Requirement::with_weights`] all weights are [`Weight::UNIT`].
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    groups: Vec<MuscleGroup>,
    weights: Vec<Weight>,
    slots: Option<usize>,
}

impl Requirement {
    #[must_use]
    pub fn new(groups: Vec<MuscleGroup>) -> Self {
        let weights = vec![Weight::UNIT; groups.len()];
        Self {
            groups,
            weights,
            slots: None,
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: Vec<Weight>) -> Self {
        self.weights = weights;
        self
    }

    /// Number of exercises a candidate is expected to contain. Not enforced when scoring.
    #[must_use]
    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = Some(slots);
        self
    }

    #[must_use]
    pub fn groups(&self) -> &[MuscleGroup] {
        &self.groups
    }

    #[must_use]
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    #[must_use]
    pub fn slots(&self) -> Option<usize> {
        self.slots
    }

    pub fn weighted_groups(&self) -> impl Iterator<Item = (&MuscleGroup, Weight)> {
        self.groups.iter().zip(self.weights.iter().copied())
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|w| **w).sum()
    }

    pub fn validate(&self) -> Result<(), RequirementError> {
        if self.groups.is_empty() {
            return Err(RequirementError::Empty);
        }
        if self.groups.len() != self.weights.len() {
            return Err(RequirementError::WeightCountMismatch {
                groups: self.groups.len(),
                weights: self.weights.len(),
            });
        }
        let total = self.total_weight();
        if total <= 0.0 {
            return Err(RequirementError::NonPositiveTotalWeight(total));
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RequirementError {
    #[error("requirement must contain at least one muscle group")]
    Empty,
    #[error("requirement has {groups} muscle groups but {weights} weights")]
    WeightCountMismatch { groups: usize, weights: usize },
    #[error("total weight must be positive ({0})")]
    NonPositiveTotalWeight(f64),
}

/// Concrete workout to be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: Name,
    pub exercises: Vec<Exercise>,
}

impl Candidate {
    #[must_use]
    pub fn new(name: Name, exercises: Vec<Exercise>) -> Self {
        Self { name, exercises }
    }
}

/// Training template: one requirement and the candidates competing for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub name: Name,
    pub requirement: Requirement,
    pub candidates: Vec<Candidate>,
}
