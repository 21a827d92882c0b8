use std::{collections::BTreeMap, path::Path};

use anyhow::Context;
use forma_domain as domain;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct CatalogData {
    pub groups: Vec<GroupData>,
    pub exercises: Vec<ExerciseData>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct GroupData {
    pub name: String,
    pub sub_muscles: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ExerciseData {
    pub name: String,
    pub activation: BTreeMap<String, f64>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct PlanData {
    pub name: String,
    pub groups: Vec<String>,
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    #[serde(default)]
    pub slots: Option<usize>,
    pub candidates: Vec<CandidateData>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct CandidateData {
    pub name: String,
    pub exercises: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
    #[error(transparent)]
    Catalog(#[from] domain::CatalogError),
}

impl TryFrom<CatalogData> for domain::Catalog {
    type Error = DataError;

    fn try_from(value: CatalogData) -> Result<Self, Self::Error> {
        let groups = value
            .groups
            .into_iter()
            .map(|g| -> Result<_, DataError> {
                Ok((
                    domain::MuscleGroup::new(&g.name)?,
                    g.sub_muscles
                        .iter()
                        .map(|m| domain::SubMuscle::new(m))
                        .collect::<Result<Vec<_>, _>>()?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let exercises = value
            .exercises
            .into_iter()
            .map(|e| -> Result<_, DataError> {
                let activations = e
                    .activation
                    .iter()
                    .map(|(m, a)| -> Result<_, DataError> {
                        Ok((
                            domain::SubMuscle::new(m)?,
                            domain::Activation::new(*a).map_err(domain::CatalogError::from)?,
                        ))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((
                    domain::Exercise::new(&e.name)?,
                    domain::ActivationProfile::new(activations)
                        .map_err(domain::CatalogError::from)?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(domain::Catalog::new(groups, exercises)?)
    }
}

impl TryFrom<PlanData> for domain::Plan {
    type Error = DataError;

    fn try_from(value: PlanData) -> Result<Self, Self::Error> {
        let mut requirement = domain::Requirement::new(
            value
                .groups
                .iter()
                .map(|g| domain::MuscleGroup::new(g))
                .collect::<Result<Vec<_>, _>>()?,
        );
        if let Some(weights) = value.weights {
            requirement = requirement.with_weights(
                weights
                    .into_iter()
                    .map(domain::Weight::new)
                    .collect::<Result<Vec<_>, _>>()?,
            );
        }
        if let Some(slots) = value.slots {
            requirement = requirement.with_slots(slots);
        }

        Ok(domain::Plan {
            name: domain::Name::new(&value.name)?,
            requirement,
            candidates: value
                .candidates
                .into_iter()
                .map(|c| -> Result<_, DataError> {
                    Ok(domain::Candidate::new(
                        domain::Name::new(&c.name)?,
                        c.exercises
                            .iter()
                            .map(|e| domain::Exercise::new(e))
                            .collect::<Result<Vec<_>, _>>()?,
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

pub fn read_catalog(path: &Path) -> anyhow::Result<domain::Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog from {}", path.display()))?;
    let data: CatalogData = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse catalog in {}", path.display()))?;
    domain::Catalog::try_from(data)
        .with_context(|| format!("invalid catalog in {}", path.display()))
}

pub fn read_plans(path: &Path) -> anyhow::Result<Vec<domain::Plan>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plans from {}", path.display()))?;
    let data: Vec<PlanData> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse plans in {}", path.display()))?;
    data.into_iter()
        .map(|p| {
            let name = p.name.clone();
            domain::Plan::try_from(p).with_context(|| format!("invalid plan \"{name}\""))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use forma_domain::ReferenceData;
    use pretty_assertions::assert_eq;

    use super::*;

    const CATALOG: &str = r#"{
        "groups": [
            {"name": "Calves", "sub_muscles": ["Gastrocnemius", "Soleus"]},
            {"name": "Biceps", "sub_muscles": ["Short Head", "Long Head"]}
        ],
        "exercises": [
            {"name": "Seated Calf Raise", "activation": {"Soleus": 0.9, "Gastrocnemius": 0.2}},
            {"name": "Preacher Curl", "activation": {"Short Head": 0.8, "Long Head": 0.4}}
        ]
    }"#;

    #[test]
    fn test_catalog_try_from() {
        let catalog =
            domain::Catalog::try_from(serde_json::from_str::<CatalogData>(CATALOG).unwrap())
                .unwrap();

        assert_eq!(
            catalog
                .sub_muscles(&domain::MuscleGroup::new("Calves").unwrap())
                .unwrap()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["Gastrocnemius", "Soleus"]
        );
        assert_eq!(
            *catalog
                .activation_profile(&domain::Exercise::new("Seated Calf Raise").unwrap())
                .unwrap()
                .activation(&domain::SubMuscle::new("Soleus").unwrap()),
            0.9
        );
    }

    #[test]
    fn test_catalog_try_from_invalid_activation() {
        let data = serde_json::from_str::<CatalogData>(
            r#"{
                "groups": [{"name": "Calves", "sub_muscles": ["Soleus"]}],
                "exercises": [{"name": "Calf Raise", "activation": {"Soleus": 1.5}}]
            }"#,
        )
        .unwrap();

        assert!(matches!(
            domain::Catalog::try_from(data),
            Err(DataError::Catalog(domain::CatalogError::Activation(_)))
        ));
    }

    #[test]
    fn test_catalog_try_from_shared_sub_muscle() {
        let data = serde_json::from_str::<CatalogData>(
            r#"{
                "groups": [
                    {"name": "Abdominals", "sub_muscles": ["Transverse"]},
                    {"name": "Core", "sub_muscles": ["Transverse"]}
                ],
                "exercises": []
            }"#,
        )
        .unwrap();

        assert!(matches!(
            domain::Catalog::try_from(data),
            Err(DataError::Catalog(domain::CatalogError::SharedSubMuscle { .. }))
        ));
    }

    #[test]
    fn test_plan_try_from() {
        let data = serde_json::from_str::<PlanData>(
            r#"{
                "name": "Arms",
                "groups": ["Biceps", "Calves"],
                "weights": [2.0, 1.0],
                "slots": 2,
                "candidates": [{"name": "Curl", "exercises": ["Preacher Curl"]}]
            }"#,
        )
        .unwrap();

        let plan = domain::Plan::try_from(data).unwrap();

        assert_eq!(plan.name.as_str(), "Arms");
        assert_eq!(plan.requirement.slots(), Some(2));
        assert_eq!(
            plan.requirement
                .weights()
                .iter()
                .map(|w| **w)
                .collect::<Vec<_>>(),
            vec![2.0, 1.0]
        );
        assert_eq!(plan.candidates.len(), 1);
        assert_eq!(plan.candidates[0].exercises.len(), 1);
    }

    #[test]
    fn test_plan_try_from_negative_weight() {
        let data = serde_json::from_str::<PlanData>(
            r#"{"name": "Arms", "groups": ["Biceps"], "weights": [-1.0], "candidates": []}"#,
        )
        .unwrap();

        assert!(matches!(
            domain::Plan::try_from(data),
            Err(DataError::Weight(domain::WeightError::Invalid(_)))
        ));
    }

    #[test]
    fn test_read_plans_unknown_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plans.json");
        std::fs::write(
            &path,
            r#"[{"name": "Arms", "groups": ["Biceps"], "candidates": [], "level": 3}]"#,
        )
        .unwrap();

        assert!(read_plans(&path).is_err());
    }

    #[test]
    fn test_read_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, CATALOG).unwrap();

        assert_eq!(read_catalog(&path).unwrap().exercises().count(), 2);
    }
}
