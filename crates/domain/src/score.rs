use std::fmt::{self, Display};

use derive_more::Deref;
use log::{debug, trace};

use crate::{
    ActivationProfile, Candidate, Exercise, LookupError, MuscleGroup, ReferenceData, Requirement,
    RequirementError, SubMuscle, Weight,
};

/// Overall fitness of a candidate for a requirement.
///
/// Zero if any required group is left untouched. Well matched candidates end up around one or
/// above, there is no upper bound.
#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub const ZERO: Score = Score(0.0);
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupScore {
    pub group: MuscleGroup,
    pub weight: Weight,
    /// Sum of the compressed qualities of all exercises for this group.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub groups: Vec<GroupScore>,
    pub score: Score,
}

impl Evaluation {
    /// Required groups not engaged by any exercise of the candidate.
    pub fn neglected(&self) -> impl Iterator<Item = &MuscleGroup> {
        self.groups
            .iter()
            .filter(|g| g.value <= 0.0)
            .map(|g| &g.group)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("unknown muscle group \"{0}\"")]
    UnknownGroup(MuscleGroup),
    #[error("unknown exercise \"{0}\"")]
    UnknownExercise(Exercise),
    #[error("invalid requirement: {0}")]
    InvalidRequirement(#[from] RequirementError),
}

impl From<LookupError> for ScoreError {
    fn from(value: LookupError) -> Self {
        match value {
            LookupError::UnknownGroup(group) => ScoreError::UnknownGroup(group),
            LookupError::UnknownExercise(exercise) => ScoreError::UnknownExercise(exercise),
        }
    }
}

/// Map the overlap of an exercise with a muscle group to `log2(1 + 9 * overlap)`.
///
/// Zero overlap yields zero, full overlap of a single sub-muscle yields `log2(10)`.
#[must_use]
pub fn compressed_quality(overlap: f64) -> f64 {
    if overlap > 0.0 {
        (1.0 + overlap * 9.0).log2()
    } else {
        0.0
    }
}

/// Weighted geometric mean of the group scores.
///
/// A single group score of zero makes the whole result zero, independent of its weight.
fn aggregate(groups: &[GroupScore]) -> Score {
    if groups.iter().any(|g| g.value <= 0.0) {
        return Score::ZERO;
    }

    // Summed in log space, the plain product under- or overflows for wide requirements and
    // large weights.
    let total_weight: f64 = groups.iter().map(|g| *g.weight).sum();
    let log_sum: f64 = groups.iter().map(|g| *g.weight * g.value.ln()).sum();

    Score((log_sum / total_weight).exp())
}

pub fn evaluate(
    reference: &impl ReferenceData,
    requirement: &Requirement,
    candidate: &Candidate,
) -> Result<Evaluation, ScoreError> {
    requirement.validate()?;

    let members = requirement
        .groups()
        .iter()
        .map(|g| reference.sub_muscles(g))
        .collect::<Result<Vec<&[SubMuscle]>, _>>()?;
    let profiles = candidate
        .exercises
        .iter()
        .map(|e| reference.activation_profile(e))
        .collect::<Result<Vec<&ActivationProfile>, _>>()?;

    let groups = requirement
        .weighted_groups()
        .zip(members)
        .map(|((group, weight), sub_muscles)| {
            let value: f64 = profiles
                .iter()
                .map(|p| compressed_quality(p.overlap(sub_muscles)))
                .sum();
            trace!("group \"{group}\" of \"{}\": {value:.4}", candidate.name);
            GroupScore {
                group: group.clone(),
                weight,
                value,
            }
        })
        .collect::<Vec<_>>();

    let score = aggregate(&groups);

    debug!(
        "scored \"{}\" ({} exercises) against {} muscle groups: {score}",
        candidate.name,
        candidate.exercises.len(),
        groups.len()
    );

    Ok(Evaluation { groups, score })
}

pub fn score(
    reference: &impl ReferenceData,
    requirement: &Requirement,
    candidate: &Candidate,
) -> Result<Score, ScoreError> {
    Ok(evaluate(reference, requirement, candidate)?.score)
}

/// Evaluate all candidates and order them by descending score.
///
/// Candidates with equal scores keep their relative order.
pub fn rank<'a>(
    reference: &impl ReferenceData,
    requirement: &Requirement,
    candidates: &'a [Candidate],
) -> Result<Vec<(&'a Candidate, Evaluation)>, ScoreError> {
    let mut ranking = candidates
        .iter()
        .map(|c| Ok((c, evaluate(reference, requirement, c)?)))
        .collect::<Result<Vec<_>, ScoreError>>()?;
    ranking.sort_by(|(_, a), (_, b)| b.score.total_cmp(&a.score));
    Ok(ranking)
}
