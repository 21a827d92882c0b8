use log::{error, warn};

use crate::{Candidate, Evaluation, Plan, ReferenceData, Requirement, Score, ScoreError, score};

/// Scoring engine bound to one set of reference data.
pub struct ScoringService<R> {
    reference: R,
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: expr) => {{
        let result = $result;
        if let Err(ref err) = result {
            match err {
                ScoreError::InvalidRequirement(_) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                ScoreError::UnknownGroup(_) | ScoreError::UnknownExercise(_) => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            }
        }
        result
    }};
}

impl<R: ReferenceData> ScoringService<R> {
    pub fn new(reference: R) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    pub fn score(
        &self,
        requirement: &Requirement,
        candidate: &Candidate,
    ) -> Result<Score, ScoreError> {
        log_on_error!(
            score::score(&self.reference, requirement, candidate),
            "score",
            format_args!("\"{}\"", candidate.name)
        )
    }

    pub fn evaluate(
        &self,
        requirement: &Requirement,
        candidate: &Candidate,
    ) -> Result<Evaluation, ScoreError> {
        log_on_error!(
            score::evaluate(&self.reference, requirement, candidate),
            "evaluate",
            format_args!("\"{}\"", candidate.name)
        )
    }

    pub fn rank<'a>(
        &self,
        requirement: &Requirement,
        candidates: &'a [Candidate],
    ) -> Result<Vec<(&'a Candidate, Evaluation)>, ScoreError> {
        log_on_error!(
            score::rank(&self.reference, requirement, candidates),
            "rank",
            format_args!("{} candidates", candidates.len())
        )
    }

    /// Rank the candidates of a plan against its requirement.
    pub fn report<'a>(
        &self,
        plan: &'a Plan,
    ) -> Result<Vec<(&'a Candidate, Evaluation)>, ScoreError> {
        log_on_error!(
            score::rank(&self.reference, &plan.requirement, &plan.candidates),
            "rank candidates of plan",
            format_args!("\"{}\"", plan.name)
        )
    }
}
