//! Sample reference data: a gym taxonomy of twelve muscle groups and three training plans.

use crate::{
    Activation, ActivationProfile, Candidate, Catalog, CatalogError, Exercise, MuscleGroup, Name,
    NameError, Plan, Requirement, SubMuscle,
};

struct BasePlan {
    name: &'static str,
    groups: &'static [&'static str],
    slots: usize,
    candidates: &'static [(&'static str, &'static [&'static str])],
}

const MUSCLE_GROUPS: [(&str, &[&str]); 12] = [
    ("Chest", &["Upper Chest", "Mid Chest", "Lower Chest"]),
    ("Back", &["Upper Lats", "Mid Back", "Lower Lats", "Lower Back"]),
    ("Shoulders", &["Front Delts", "Side Delts", "Rear Delts"]),
    ("Biceps", &["Biceps Short Head", "Biceps Long Head"]),
    ("Triceps", &["Triceps Long Head", "Triceps Lateral Head", "Triceps Medial Head"]),
    ("Forearms", &["Forearm Flexors", "Forearm Extensors"]),
    (
        "Quadriceps",
        &["Rectus Femoris", "Vastus Lateralis", "Vastus Medialis", "Vastus Intermedius"],
    ),
    ("Hamstrings", &["Biceps Femoris", "Semitendinosus", "Semimembranosus"]),
    ("Glutes", &["Gluteus Maximus", "Gluteus Medius", "Gluteus Minimus"]),
    ("Calves", &["Gastrocnemius", "Soleus"]),
    (
        "Abdominals",
        &["Rectus Abdominis", "External Obliques", "Internal Obliques", "Transverse Abdominis"],
    ),
    ("Core", &["Anterior Core", "Lateral Core", "Posterior Core"]),
];

const EXERCISES: [(&str, &[(&str, f64)]); 38] = [
    (
        "Bench Press",
        &[
            ("Mid Chest", 0.7),
            ("Upper Chest", 0.2),
            ("Lower Chest", 0.1),
            ("Front Delts", 0.3),
            ("Triceps Lateral Head", 0.4),
        ],
    ),
    (
        "Incline Bench Press",
        &[
            ("Upper Chest", 0.7),
            ("Mid Chest", 0.3),
            ("Front Delts", 0.4),
            ("Triceps Lateral Head", 0.3),
        ],
    ),
    (
        "Decline Bench Press",
        &[
            ("Lower Chest", 0.7),
            ("Mid Chest", 0.3),
            ("Triceps Lateral Head", 0.4),
        ],
    ),
    (
        "Chest Fly",
        &[
            ("Mid Chest", 0.6),
            ("Upper Chest", 0.2),
            ("Lower Chest", 0.2),
        ],
    ),
    (
        "Push Up",
        &[
            ("Mid Chest", 0.6),
            ("Lower Chest", 0.2),
            ("Front Delts", 0.3),
            ("Triceps Lateral Head", 0.4),
            ("Anterior Core", 0.3),
        ],
    ),
    (
        "Pull Up",
        &[
            ("Upper Lats", 0.7),
            ("Mid Back", 0.5),
            ("Biceps Long Head", 0.5),
            ("Rear Delts", 0.3),
        ],
    ),
    (
        "Bent Over Row",
        &[
            ("Mid Back", 0.7),
            ("Upper Lats", 0.4),
            ("Rear Delts", 0.4),
            ("Biceps Long Head", 0.3),
            ("Lower Back", 0.3),
        ],
    ),
    (
        "Lat Pulldown",
        &[
            ("Upper Lats", 0.8),
            ("Mid Back", 0.4),
            ("Biceps Long Head", 0.4),
        ],
    ),
    (
        "Seated Cable Row",
        &[
            ("Mid Back", 0.7),
            ("Lower Lats", 0.4),
            ("Biceps Short Head", 0.3),
            ("Rear Delts", 0.3),
        ],
    ),
    (
        "Deadlift",
        &[
            ("Lower Back", 0.8),
            ("Gluteus Maximus", 0.7),
            ("Biceps Femoris", 0.6),
            ("Lower Lats", 0.5),
            ("Posterior Core", 0.6),
        ],
    ),
    (
        "Overhead Press",
        &[
            ("Front Delts", 0.6),
            ("Side Delts", 0.4),
            ("Triceps Lateral Head", 0.3),
            ("Upper Chest", 0.2),
        ],
    ),
    (
        "Lateral Raise",
        &[
            ("Side Delts", 0.9),
            ("Front Delts", 0.1),
        ],
    ),
    (
        "Front Raise",
        &[
            ("Front Delts", 0.8),
            ("Upper Chest", 0.2),
        ],
    ),
    (
        "Reverse Fly",
        &[
            ("Rear Delts", 0.8),
            ("Upper Lats", 0.3),
        ],
    ),
    (
        "Barbell Curl",
        &[
            ("Biceps Short Head", 0.7),
            ("Biceps Long Head", 0.5),
            ("Forearm Flexors", 0.3),
        ],
    ),
    (
        "Alternating Dumbbell Curl",
        &[
            ("Biceps Short Head", 0.6),
            ("Biceps Long Head", 0.6),
            ("Forearm Flexors", 0.3),
        ],
    ),
    (
        "Hammer Curl",
        &[
            ("Biceps Long Head", 0.7),
            ("Forearm Flexors", 0.5),
        ],
    ),
    (
        "Preacher Curl",
        &[
            ("Biceps Short Head", 0.8),
            ("Biceps Long Head", 0.4),
        ],
    ),
    (
        "Wrist Curl",
        &[
            ("Forearm Flexors", 0.9),
            ("Forearm Extensors", 0.2),
        ],
    ),
    (
        "Skull Crusher",
        &[
            ("Triceps Long Head", 0.8),
            ("Triceps Lateral Head", 0.4),
        ],
    ),
    (
        "Triceps Pushdown",
        &[
            ("Triceps Lateral Head", 0.7),
            ("Triceps Medial Head", 0.5),
        ],
    ),
    (
        "Dip",
        &[
            ("Triceps Lateral Head", 0.7),
            ("Triceps Long Head", 0.5),
            ("Lower Chest", 0.4),
            ("Front Delts", 0.3),
        ],
    ),
    (
        "French Press",
        &[
            ("Triceps Long Head", 0.9),
            ("Triceps Lateral Head", 0.3),
        ],
    ),
    (
        "Rope Pushdown",
        &[
            ("Triceps Lateral Head", 0.8),
            ("Triceps Medial Head", 0.6),
            ("Triceps Long Head", 0.3),
        ],
    ),
    (
        "Squat",
        &[
            ("Rectus Femoris", 0.7),
            ("Vastus Lateralis", 0.7),
            ("Vastus Medialis", 0.7),
            ("Gluteus Maximus", 0.6),
            ("Anterior Core", 0.4),
        ],
    ),
    (
        "Leg Press",
        &[
            ("Rectus Femoris", 0.8),
            ("Vastus Lateralis", 0.8),
            ("Vastus Medialis", 0.8),
            ("Gluteus Maximus", 0.5),
        ],
    ),
    (
        "Leg Extension",
        &[
            ("Rectus Femoris", 0.8),
            ("Vastus Lateralis", 0.7),
            ("Vastus Medialis", 0.7),
            ("Vastus Intermedius", 0.6),
        ],
    ),
    (
        "Lying Leg Curl",
        &[
            ("Biceps Femoris", 0.9),
            ("Semitendinosus", 0.7),
            ("Semimembranosus", 0.7),
        ],
    ),
    (
        "Stiff Leg Deadlift",
        &[
            ("Biceps Femoris", 0.8),
            ("Semitendinosus", 0.7),
            ("Gluteus Maximus", 0.6),
            ("Lower Back", 0.4),
        ],
    ),
    (
        "Hip Abduction",
        &[
            ("Gluteus Medius", 0.8),
            ("Gluteus Minimus", 0.6),
        ],
    ),
    (
        "Hip Adduction",
        &[
            ("Vastus Medialis", 0.5),
        ],
    ),
    (
        "Hip Thrust",
        &[
            ("Gluteus Maximus", 0.9),
            ("Biceps Femoris", 0.5),
        ],
    ),
    (
        "Standing Calf Raise",
        &[
            ("Gastrocnemius", 0.9),
            ("Soleus", 0.3),
        ],
    ),
    (
        "Seated Calf Raise",
        &[
            ("Soleus", 0.9),
            ("Gastrocnemius", 0.2),
        ],
    ),
    (
        "Crunch",
        &[
            ("Rectus Abdominis", 0.8),
            ("External Obliques", 0.3),
        ],
    ),
    (
        "Plank",
        &[
            ("Rectus Abdominis", 0.7),
            ("Transverse Abdominis", 0.8),
            ("Anterior Core", 0.9),
        ],
    ),
    (
        "Oblique Crunch",
        &[
            ("External Obliques", 0.8),
            ("Internal Obliques", 0.7),
            ("Rectus Abdominis", 0.4),
        ],
    ),
    (
        "Jackknife",
        &[
            ("Rectus Abdominis", 0.9),
            ("Anterior Core", 0.6),
        ],
    ),
];

const PLANS: [BasePlan; 3] = [
    BasePlan {
        name: "Push",
        groups: &["Chest", "Shoulders", "Triceps"],
        slots: 5,
        candidates: &[
            (
                "Complete Push",
                &[
                    "Bench Press",
                    "Incline Bench Press",
                    "Overhead Press",
                    "Lateral Raise",
                    "Skull Crusher",
                ],
            ),
            (
                "No Triceps Isolation",
                &["Bench Press", "Chest Fly", "Overhead Press", "Lateral Raise", "Front Raise"],
            ),
            (
                "Balanced Push",
                &[
                    "Incline Bench Press",
                    "Chest Fly",
                    "Front Raise",
                    "Reverse Fly",
                    "Triceps Pushdown",
                ],
            ),
            (
                "No Chest",
                &[
                    "Overhead Press",
                    "Lateral Raise",
                    "Front Raise",
                    "Skull Crusher",
                    "Rope Pushdown",
                ],
            ),
            (
                "Functional Push",
                &["Push Up", "Bench Press", "Overhead Press", "Lateral Raise", "Dip"],
            ),
            (
                "No Shoulders",
                &[
                    "Bench Press",
                    "Decline Bench Press",
                    "Chest Fly",
                    "Skull Crusher",
                    "Triceps Pushdown",
                ],
            ),
            (
                "Wrong Focus (Legs)",
                &["Squat", "Leg Press", "Lying Leg Curl", "Leg Extension", "Standing Calf Raise"],
            ),
        ],
    },
    BasePlan {
        name: "Pull",
        groups: &["Back", "Biceps", "Forearms"],
        slots: 5,
        candidates: &[
            (
                "Complete Pull",
                &["Pull Up", "Bent Over Row", "Lat Pulldown", "Barbell Curl", "Hammer Curl"],
            ),
            (
                "No Forearms",
                &[
                    "Pull Up",
                    "Bent Over Row",
                    "Lat Pulldown",
                    "Barbell Curl",
                    "Alternating Dumbbell Curl",
                ],
            ),
            (
                "Pull with Deadlift",
                &[
                    "Deadlift",
                    "Seated Cable Row",
                    "Pull Up",
                    "Alternating Dumbbell Curl",
                    "Preacher Curl",
                ],
            ),
            (
                "No Back",
                &[
                    "Barbell Curl",
                    "Alternating Dumbbell Curl",
                    "Preacher Curl",
                    "Hammer Curl",
                    "Wrist Curl",
                ],
            ),
            (
                "Traditional Pull",
                &[
                    "Lat Pulldown",
                    "Bent Over Row",
                    "Seated Cable Row",
                    "Hammer Curl",
                    "Barbell Curl",
                ],
            ),
            (
                "No Biceps Isolation",
                &["Pull Up", "Bent Over Row", "Lat Pulldown", "Seated Cable Row", "Hammer Curl"],
            ),
            (
                "Wrong Focus (Push)",
                &[
                    "Bench Press",
                    "Overhead Press",
                    "Lateral Raise",
                    "Skull Crusher",
                    "Triceps Pushdown",
                ],
            ),
        ],
    },
    BasePlan {
        name: "Legs",
        groups: &["Quadriceps", "Hamstrings", "Glutes", "Calves", "Abdominals"],
        slots: 6,
        candidates: &[
            (
                "Complete Legs",
                &[
                    "Squat",
                    "Leg Press",
                    "Lying Leg Curl",
                    "Hip Thrust",
                    "Standing Calf Raise",
                    "Crunch",
                ],
            ),
            (
                "No Hamstrings",
                &[
                    "Squat",
                    "Leg Press",
                    "Leg Extension",
                    "Hip Thrust",
                    "Standing Calf Raise",
                    "Plank",
                ],
            ),
            (
                "Isolated Legs",
                &[
                    "Leg Press",
                    "Leg Extension",
                    "Stiff Leg Deadlift",
                    "Hip Abduction",
                    "Seated Calf Raise",
                    "Plank",
                ],
            ),
            (
                "No Glutes",
                &[
                    "Squat",
                    "Leg Press",
                    "Leg Extension",
                    "Lying Leg Curl",
                    "Standing Calf Raise",
                    "Crunch",
                ],
            ),
            (
                "Legs and Core",
                &[
                    "Squat",
                    "Leg Extension",
                    "Stiff Leg Deadlift",
                    "Hip Thrust",
                    "Standing Calf Raise",
                    "Oblique Crunch",
                ],
            ),
            (
                "No Calves",
                &["Squat", "Leg Press", "Lying Leg Curl", "Hip Thrust", "Hip Abduction", "Plank"],
            ),
            (
                "Wrong Focus (Pull)",
                &[
                    "Pull Up",
                    "Bent Over Row",
                    "Lat Pulldown",
                    "Barbell Curl",
                    "Hammer Curl",
                    "Seated Cable Row",
                ],
            ),
        ],
    },
];

pub fn reference() -> Result<Catalog, CatalogError> {
    let groups = MUSCLE_GROUPS
        .iter()
        .map(|(group, sub_muscles)| {
            Ok((
                MuscleGroup::new(group)?,
                sub_muscles
                    .iter()
                    .map(|m| SubMuscle::new(m))
                    .collect::<Result<Vec<_>, _>>()?,
            ))
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;
    let exercises = EXERCISES
        .iter()
        .map(|(exercise, activations)| {
            Ok((
                Exercise::new(exercise)?,
                ActivationProfile::new(
                    activations
                        .iter()
                        .map(|(m, a)| Ok((SubMuscle::new(m)?, Activation::new(*a)?)))
                        .collect::<Result<Vec<_>, CatalogError>>()?,
                )?,
            ))
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    Catalog::new(groups, exercises)
}

pub fn plans() -> Result<Vec<Plan>, NameError> {
    PLANS
        .iter()
        .map(|plan| {
            let groups = plan
                .groups
                .iter()
                .map(|g| MuscleGroup::new(g))
                .collect::<Result<Vec<_>, _>>()?;
            let candidates = plan
                .candidates
                .iter()
                .map(|(name, exercises)| {
                    Ok(Candidate::new(
                        Name::new(name)?,
                        exercises
                            .iter()
                            .map(|e| Exercise::new(e))
                            .collect::<Result<Vec<_>, _>>()?,
                    ))
                })
                .collect::<Result<Vec<_>, NameError>>()?;
            Ok(Plan {
                name: Name::new(plan.name)?,
                requirement: Requirement::new(groups).with_slots(plan.slots),
                candidates,
            })
        })
        .collect()
}
