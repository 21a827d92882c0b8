use forma_domain::{Candidate, Evaluation};
use serde::Serialize;

use crate::settings::{Rating, Settings};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlanReport {
    pub plan: String,
    pub candidates: Vec<CandidateReport>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CandidateReport {
    pub rank: usize,
    pub candidate: String,
    pub score: f64,
    pub rating: Rating,
    pub groups: Vec<GroupReport>,
    pub neglected: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GroupReport {
    pub group: String,
    pub weight: f64,
    pub value: f64,
}

impl CandidateReport {
    pub fn new(
        rank: usize,
        candidate: &Candidate,
        evaluation: &Evaluation,
        settings: &Settings,
    ) -> Self {
        Self {
            rank,
            candidate: candidate.name.to_string(),
            score: *evaluation.score,
            rating: settings.rating(*evaluation.score),
            groups: evaluation
                .groups
                .iter()
                .map(|g| GroupReport {
                    group: g.group.to_string(),
                    weight: *g.weight,
                    value: g.value,
                })
                .collect(),
            neglected: evaluation.neglected().map(ToString::to_string).collect(),
        }
    }

    fn line(&self) -> String {
        let mut line = format!(
            "{:>3}. {} {:>8.4}  {}",
            self.rank,
            self.rating.icon(),
            self.score,
            self.candidate
        );
        if !self.neglected.is_empty() {
            line.push_str(&format!("  [neglected: {}]", self.neglected.join(", ")));
        }
        line
    }
}

impl PlanReport {
    pub fn new(plan: &str, ranking: &[(&Candidate, Evaluation)], settings: &Settings) -> Self {
        Self {
            plan: plan.to_string(),
            candidates: ranking
                .iter()
                .enumerate()
                .map(|(i, (candidate, evaluation))| {
                    CandidateReport::new(i + 1, candidate, evaluation, settings)
                })
                .collect(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n", self.plan);
        for candidate in &self.candidates {
            text.push_str(&candidate.line());
            text.push('\n');
        }
        text
    }
}

/// Detailed breakdown of a single evaluation, one line per required group.
pub fn evaluation_text(report: &CandidateReport) -> String {
    let mut text = format!(
        "{} {:.4}  {}\n",
        report.rating.icon(),
        report.score,
        report.rating.name()
    );
    for group in &report.groups {
        text.push_str(&format!(
            "  {:<16} weight {:<6} {:>8.4}\n",
            group.group, group.weight, group.value
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use forma_domain::{
        Activation, ActivationProfile, Catalog, Exercise, MuscleGroup, Name, Requirement,
        SubMuscle, evaluate,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Catalog {
        let soleus = SubMuscle::new("Soleus").unwrap();
        Catalog::new(
            [
                (MuscleGroup::new("Calves").unwrap(), vec![soleus.clone()]),
                (
                    MuscleGroup::new("Biceps").unwrap(),
                    vec![SubMuscle::new("Short Head").unwrap()],
                ),
            ],
            [(
                Exercise::new("Seated Calf Raise").unwrap(),
                ActivationProfile::new([(soleus, Activation::FULL)]).unwrap(),
            )],
        )
        .unwrap()
    }

    fn candidate(name: &str, exercises: &[&str]) -> Candidate {
        Candidate::new(
            Name::new(name).unwrap(),
            exercises.iter().map(|e| Exercise::new(e).unwrap()).collect(),
        )
    }

    fn requirement(groups: &[&str]) -> Requirement {
        Requirement::new(groups.iter().map(|g| MuscleGroup::new(g).unwrap()).collect())
    }

    #[test]
    fn test_plan_report_text() {
        let catalog = catalog();
        let requirement = requirement(&["Calves"]);
        let first = candidate("Calf Raises", &["Seated Calf Raise"]);
        let second = candidate("Empty", &[]);
        let ranking = vec![
            (&first, evaluate(&catalog, &requirement, &first).unwrap()),
            (&second, evaluate(&catalog, &requirement, &second).unwrap()),
        ];

        let report = PlanReport::new("Calves", &ranking, &Settings::default());

        assert_eq!(
            report.to_text(),
            "Calves\n  1. ⚠️   3.3219  Calf Raises\n  2. ❌   0.0000  Empty  [neglected: Calves]\n"
        );
    }

    #[test]
    fn test_candidate_report_json() {
        let catalog = catalog();
        let requirement = requirement(&["Calves", "Biceps"]);
        let candidate = candidate("Calf Raises", &["Seated Calf Raise"]);

        let report = CandidateReport::new(
            1,
            &candidate,
            &evaluate(&catalog, &requirement, &candidate).unwrap(),
            &Settings::default(),
        );

        assert_eq!(report.score, 0.0);
        assert_eq!(report.rating, Rating::Failed);
        assert_eq!(report.neglected, vec!["Biceps"]);
        assert_eq!(
            serde_json::to_value(&report).unwrap()["groups"][1],
            serde_json::json!({"group": "Biceps", "weight": 1.0, "value": 0.0})
        );
        assert_eq!(serde_json::to_value(&report).unwrap()["rating"], "failed");
    }

    #[test]
    fn test_evaluation_text() {
        let catalog = catalog();
        let requirement = requirement(&["Calves"]);
        let candidate = candidate("Calf Raises", &["Seated Calf Raise", "Seated Calf Raise"]);

        let report = CandidateReport::new(
            1,
            &candidate,
            &evaluate(&catalog, &requirement, &candidate).unwrap(),
            &Settings::default(),
        );

        assert_eq!(
            evaluation_text(&report),
            "👍 6.6439  good\n  Calves           weight 1        6.6439\n"
        );
    }
}
