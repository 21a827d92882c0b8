use std::collections::BTreeMap;

use derive_more::{Deref, Display};

use crate::{Name, NameError, SubMuscle};

/// Movement whose recruitment is described by an [`ActivationProfile`].
#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exercise(Name);

impl Exercise {
    pub fn new(name: &str) -> Result<Self, NameError> {
        Ok(Self(Name::new(name)?))
    }
}

impl From<Name> for Exercise {
    fn from(value: Name) -> Self {
        Self(value)
    }
}

/// Relative recruitment intensity of a sub-muscle, within `0.0..=1.0`.
#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Activation(f64);

impl Activation {
    pub const NONE: Activation = Activation(0.0);
    pub const FULL: Activation = Activation(1.0);

    pub fn new(value: f64) -> Result<Self, ActivationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ActivationError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ActivationError {
    #[error("activation must be between 0 and 1 ({0})")]
    OutOfRange(f64),
}

/// Activation per sub-muscle for one exercise.
///
/// Sub-muscles without an entry are not engaged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ActivationProfile(BTreeMap<SubMuscle, Activation>);

impl ActivationProfile {
    pub fn new(
        entries: impl IntoIterator<Item = (SubMuscle, Activation)>,
    ) -> Result<Self, ProfileError> {
        let mut profile = BTreeMap::new();
        for (sub_muscle, activation) in entries {
            if profile.contains_key(&sub_muscle) {
                return Err(ProfileError::DuplicateSubMuscle(sub_muscle));
            }
            profile.insert(sub_muscle, activation);
        }
        Ok(Self(profile))
    }

    #[must_use]
    pub fn activation(&self, sub_muscle: &SubMuscle) -> Activation {
        self.0.get(sub_muscle).copied().unwrap_or(Activation::NONE)
    }

    /// Sum of the activations of all given sub-muscles.
    #[must_use]
    pub fn overlap<'a>(&self, sub_muscles: impl IntoIterator<Item = &'a SubMuscle>) -> f64 {
        sub_muscles
            .into_iter()
            .map(|m| *self.activation(m))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SubMuscle, Activation)> {
        self.0.iter().map(|(m, a)| (m, *a))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("duplicate activation entry for sub-muscle \"{0}\"")]
    DuplicateSubMuscle(SubMuscle),
}
