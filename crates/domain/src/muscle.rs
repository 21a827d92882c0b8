use derive_more::{Deref, Display};

use crate::{Name, NameError};

/// Major muscular region a requirement asks to be trained.
#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MuscleGroup(Name);

impl MuscleGroup {
    pub fn new(name: &str) -> Result<Self, NameError> {
        Ok(Self(Name::new(name)?))
    }
}

impl From<Name> for MuscleGroup {
    fn from(value: Name) -> Self {
        Self(value)
    }
}

/// Specific muscle or muscle head. Belongs to exactly one [`MuscleGroup`] of a catalog.
#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubMuscle(Name);

impl SubMuscle {
    pub fn new(name: &str) -> Result<Self, NameError> {
        Ok(Self(Name::new(name)?))
    }
}

impl From<Name> for SubMuscle {
    fn from(value: Name) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_muscle_group_new() {
        assert_eq!(MuscleGroup::new(" Chest ").unwrap().to_string(), "Chest");
        assert_eq!(MuscleGroup::new(""), Err(NameError::Empty));
    }

    #[test]
    fn test_sub_muscle_new() {
        assert_eq!(SubMuscle::new("Upper Chest").unwrap().as_str(), "Upper Chest");
        assert_eq!(SubMuscle::new(" "), Err(NameError::Empty));
    }

    #[test]
    fn test_labels_are_distinct_types_with_equal_text() {
        let name = Name::new("Core").unwrap();
        let group = MuscleGroup::from(name.clone());
        let sub_muscle = SubMuscle::from(name.clone());

        assert_eq!(*group, name);
        assert_eq!(*sub_muscle, name);
    }
}
