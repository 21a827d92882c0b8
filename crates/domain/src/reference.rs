use std::collections::BTreeMap;

use crate::{ActivationProfile, Exercise, MuscleGroup, SubMuscle};

/// Read-only lookup tables the scoring engine is evaluated against.
pub trait ReferenceData {
    /// Sub-muscles constituting `group`, in catalog order.
    fn sub_muscles(&self, group: &MuscleGroup) -> Result<&[SubMuscle], LookupError>;

    fn activation_profile(&self, exercise: &Exercise) -> Result<&ActivationProfile, LookupError>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown muscle group \"{0}\"")]
    UnknownGroup(MuscleGroup),
    #[error("unknown exercise \"{0}\"")]
    UnknownExercise(Exercise),
}

/// In-memory reference data.
///
/// The groups partition the set of sub-muscles and every activation profile only refers to
/// sub-muscles of some group. Both properties are checked on construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: BTreeMap<MuscleGroup, Vec<SubMuscle>>,
    owners: BTreeMap<SubMuscle, MuscleGroup>,
    exercises: BTreeMap<Exercise, ActivationProfile>,
}

impl Catalog {
    pub fn new(
        groups: impl IntoIterator<Item = (MuscleGroup, Vec<SubMuscle>)>,
        exercises: impl IntoIterator<Item = (Exercise, ActivationProfile)>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();

        for (group, sub_muscles) in groups {
            if catalog.groups.contains_key(&group) {
                return Err(CatalogError::DuplicateGroup(group));
            }
            if sub_muscles.is_empty() {
                return Err(CatalogError::EmptyGroup(group));
            }
            for sub_muscle in &sub_muscles {
                if let Some(owner) = catalog.owners.get(sub_muscle) {
                    return Err(CatalogError::SharedSubMuscle {
                        sub_muscle: sub_muscle.clone(),
                        first: owner.clone(),
                        second: group,
                    });
                }
                catalog.owners.insert(sub_muscle.clone(), group.clone());
            }
            catalog.groups.insert(group, sub_muscles);
        }

        for (exercise, profile) in exercises {
            if catalog.exercises.contains_key(&exercise) {
                return Err(CatalogError::DuplicateExercise(exercise));
            }
            if let Some((sub_muscle, _)) = profile
                .iter()
                .find(|(m, _)| !catalog.owners.contains_key(*m))
            {
                return Err(CatalogError::UnknownSubMuscle {
                    sub_muscle: sub_muscle.clone(),
                    exercise,
                });
            }
            catalog.exercises.insert(exercise, profile);
        }

        log::debug!(
            "created catalog with {} muscle groups, {} sub-muscles and {} exercises",
            catalog.groups.len(),
            catalog.owners.len(),
            catalog.exercises.len()
        );

        Ok(catalog)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&MuscleGroup, &[SubMuscle])> {
        self.groups.iter().map(|(g, m)| (g, m.as_slice()))
    }

    pub fn exercises(&self) -> impl Iterator<Item = (&Exercise, &ActivationProfile)> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn group_of(&self, sub_muscle: &SubMuscle) -> Option<&MuscleGroup> {
        self.owners.get(sub_muscle)
    }
}

impl ReferenceData for Catalog {
    fn sub_muscles(&self, group: &MuscleGroup) -> Result<&[SubMuscle], LookupError> {
        self.groups
            .get(group)
            .map(Vec::as_slice)
            .ok_or_else(|| LookupError::UnknownGroup(group.clone()))
    }

    fn activation_profile(&self, exercise: &Exercise) -> Result<&ActivationProfile, LookupError> {
        self.exercises
            .get(exercise)
            .ok_or_else(|| LookupError::UnknownExercise(exercise.clone()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("duplicate muscle group \"{0}\"")]
    DuplicateGroup(MuscleGroup),
    #[error("muscle group \"{0}\" has no sub-muscles")]
    EmptyGroup(MuscleGroup),
    #[error("sub-muscle \"{sub_muscle}\" belongs to both \"{first}\" and \"{second}\"")]
    SharedSubMuscle {
        sub_muscle: SubMuscle,
        first: MuscleGroup,
        second: MuscleGroup,
    },
    #[error("duplicate exercise \"{0}\"")]
    DuplicateExercise(Exercise),
    #[error("exercise \"{exercise}\" activates unknown sub-muscle \"{sub_muscle}\"")]
    UnknownSubMuscle {
        exercise: Exercise,
        sub_muscle: SubMuscle,
    },
    #[error(transparent)]
    Name(#[from] crate::NameError),
    #[error(transparent)]
    Activation(#[from] crate::ActivationError),
    #[error(transparent)]
    Profile(#[from] crate::ProfileError),
}
