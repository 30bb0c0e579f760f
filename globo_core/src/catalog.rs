//! Built-in catalog of workouts, routines and exercises.
//!
//! The catalog is pure configuration data: it is rebuilt fresh on every run
//! and nothing in it is persisted. Routine constructors validate their
//! pools, so a bad definition fails here, at load time, before any
//! selection is attempted.

use crate::exercise::Exercise;
use crate::routine::Routine;
use crate::workout::Workout;
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// The complete catalog of workouts, keyed by id.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub workouts: HashMap<String, Arc<Workout>>,
}

impl Catalog {
    /// Look up a workout by id.
    pub fn workout(&self, id: &str) -> Result<Arc<Workout>> {
        self.workouts
            .get(id)
            .cloned()
            .ok_or_else(|| Error::Catalog(format!("unknown workout '{}'", id)))
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, workout) in &self.workouts {
            if id.is_empty() {
                errors.push("Workout has empty id".to_string());
            }
            if workout.name().is_empty() {
                errors.push(format!("Workout '{}' has empty name", id));
            }
            if workout.routines().is_empty() {
                errors.push(format!("Workout '{}' has no routines", id));
            }
        }

        errors
    }
}

fn ex(name: &str, url: &str) -> Exercise {
    Exercise::new(name, url)
}

// ============================================================================
// Shared exercise pools
// ============================================================================

fn rear_delt_pool() -> Vec<Exercise> {
    vec![
        ex("Rear delt flyes", "https://www.youtube.com/watch?v=0GSu6Z-Oj7U"),
        ex("Scarecrows", "https://www.youtube.com/watch?v=YakiNOaMMAA"),
        ex("Face pulls", "https://www.youtube.com/watch?v=rep-qVOkqgk"),
        ex("Seated DB 'power cleans'", "https://www.youtube.com/watch?v=kvVEz-tBgvg"),
        ex("Band pull-aparts", "https://www.youtube.com/watch?v=fo3ogdhMFLo"),
    ]
}

fn shrug_pool() -> Vec<Exercise> {
    vec![
        ex("DB shrugs", "https://www.youtube.com/watch?v=g6qbq4Lf1FI"),
        ex("Barbell shrugs", "https://www.youtube.com/watch?v=NAqCVe2mwzM"),
    ]
}

fn curl_pool() -> Vec<Exercise> {
    vec![
        ex("Barbell curls (regular or thick bar)", "https://www.youtube.com/watch?v=kwG2ipFRgfo"),
        ex("DB curls (standing)", "https://www.youtube.com/watch?v=av7-8igSXTs"),
        ex("Seated incline DB curls", "https://www.youtube.com/watch?v=soxrZlIl35U"),
        ex("Hammer curls", "https://www.youtube.com/watch?v=TwD-YGVP4Bk"),
        ex("Zottmann curls", "https://www.youtube.com/watch?v=FSGDM9-dZ9w"),
        ex("Iso-hold DB curls", "https://www.youtube.com/watch?v=ooXEcYEdyGo"),
    ]
}

fn hip_extension_pool() -> Vec<Exercise> {
    vec![
        ex("45-degree hyperextensions", "https://www.youtube.com/watch?v=ry45nfO-PAU"),
        ex("Reverse hyperextensions", "https://www.youtube.com/watch?v=3d9_W--eUcI"),
        ex("Pull-throughs", "https://www.youtube.com/watch?v=DbSF7ipBh5Y"),
        ex("Swiss ball back bridge + leg curl", "https://www.youtube.com/watch?v=65W4XfSzP8U"),
        ex("Glute-ham raises", "https://www.youtube.com/watch?v=vSOCqsr1wlg"),
        ex("Romanian deadlift", "https://www.youtube.com/watch?v=2SHsk9AzdjA"),
    ]
}

fn db_press_pool() -> Vec<Exercise> {
    vec![
        ex("Flat DB bench press (palms in or out)", "https://www.youtube.com/watch?v=omGiL5h2R_I"),
        ex("Incline DB bench press (palms in or out)", "https://www.youtube.com/watch?v=0G2_XV7slIg"),
        ex("DB floor press (palms in)", "https://www.youtube.com/watch?v=A2dfGvoykPc"),
    ]
}

// ============================================================================
// WS4SB routines
// ============================================================================

fn max_effort_exercise() -> Result<Routine> {
    Routine::new(
        "Max-Effort Exercise",
        "Work up to a max set of 3-5 reps.",
        vec![
            ex("Bench Press", "https://www.youtube.com/watch?v=UaOwz6DNdjw"),
            ex("Barbell floor press", "https://www.youtube.com/watch?v=9vYCwtHkWgI"),
            ex(
                "Incline barbell bench press (regular grip or close grip)",
                "https://www.youtube.com/watch?v=11gY7Q5D5wo",
            ),
            ex("Weighted chin-ups", "https://www.youtube.com/watch?v=7FiR9W_gVF0"),
        ],
    )
}

fn supplemental_exercise() -> Result<Routine> {
    Routine::new(
        "Supplemental Exercise",
        "Perform 2 sets of max reps. Choose a weight you can perform 15-20 reps on the 1st set. \
         Use the same weight for both sets and rest 3-4 minutes in between.",
        db_press_pool(),
    )
}

fn rear_delt_superset() -> Result<Routine> {
    Routine::superset(
        "Horizontal pulling / Rear delt superset",
        "Superset! Perform 3-4 supersets of 8-12 reps of each exercise.",
        vec![
            vec![
                ex("DB rows", "https://www.youtube.com/watch?v=PgpQ4-jHiq4"),
                ex("Barbell rows", "https://www.youtube.com/watch?v=I-qgwlP0J90"),
                ex("Seated cable rows (various bars)", "https://www.youtube.com/watch?v=a8qvJ2VDd9g"),
                ex("T-bar rows", "https://www.youtube.com/watch?v=KDEl3AmZbVE"),
                ex("Chest supported rows", "https://www.youtube.com/watch?v=H75im9fAUMc"),
            ],
            rear_delt_pool(),
        ],
    )
}

fn traps() -> Result<Routine> {
    Routine::new("Traps", "Perform 3-4 sets of 8-15 reps.", shrug_pool())
}

fn elbow_flexors() -> Result<Routine> {
    Routine::new(
        "Elbow flexor exercise",
        "Perform 3-4 sets of 8-15 reps.",
        curl_pool(),
    )
}

fn jump_training() -> Result<Routine> {
    Routine::new(
        "Jump training",
        "Perform 5-8 sets of 1-3 jumps.",
        vec![
            ex("Box jumps", "http://www.youtube.com/watch?v=VK11KovyaP8&mode=related&search="),
            ex("Vertical jumps", "https://youtu.be/RgboWFzSUKo?t=46"),
            ex("Broad jumps", "https://youtu.be/P0N68OQDhNs?t=95"),
            ex(
                "Hurdle hops (jump over hurdle and land on ground)",
                "https://youtu.be/0H_fXWTUSiY?t=49",
            ),
            ex("Box squat into box jump", "http://www.youtube.com/watch?v=9PEdhxELbDQ"),
            ex("Depth jumps (onto box)", "http://www.youtube.com/watch?v=S6664b4UrGs"),
        ],
    )
}

fn unilateral_exercise() -> Result<Routine> {
    Routine::new(
        "Unilateral exercise (w/ added ROM)",
        "Perform 2-3 sets of 8-10 reps.",
        vec![
            ex(
                "Bulgarian split squats, front leg elevated (holding DB's or with a barbell)",
                "http://www.youtube.com/watch?v=RZlodHgCipk",
            ),
            ex(
                "Barbell reverse lunge, front foot elevated",
                "https://www.youtube.com/watch?v=zJkMQPZiwAc",
            ),
            ex(
                "Barbell reverse lunge with knee lift (front foot elevated)",
                "https://www.youtube.com/watch?v=jU9y6hvJ40o",
            ),
            ex(
                "Step-ups (box height slightly above knee)",
                "https://www.youtube.com/watch?v=sZsmorjSzBM",
            ),
        ],
    )
}

fn hip_extension_exercise() -> Result<Routine> {
    Routine::new(
        "Hip extension exercise",
        "Perform 3 sets of 8-12 reps.",
        hip_extension_pool(),
    )
}

fn weighted_abdominals() -> Result<Routine> {
    Routine::new(
        "Weighted Abdominals",
        "Perform 4 sets of 10-15 reps.",
        vec![
            ex("DB side bends", "https://www.youtube.com/watch?v=dL9ZzqtQI5c"),
            ex("Offset barbell side bends", "https://www.youtube.com/watch?v=1uI-7cwf9Tw"),
            ex("Barbell Russian twists", "https://www.youtube.com/watch?v=TImmxdzX0gk"),
            ex("Low cable or band pull-ins", "https://www.youtube.com/watch?v=sKtxdAgznB4"),
            ex("Hanging leg raises", "https://www.youtube.com/watch?v=arWjJtMsqvA"),
            ex("Weighted Swiss ball crunches", "https://www.youtube.com/watch?v=Xdqgs6wK8eY"),
            ex(
                "Spread-eagle sit-ups (holding DB over chest)",
                "https://www.youtube.com/watch?v=kuMlr3Lkd8A",
            ),
            ex(
                "Standing sit-ups (using a band or a high pulley)",
                "https://www.youtube.com/watch?v=ij3lWMnoFzA",
            ),
        ],
    )
}

fn repetition_exercise() -> Result<Routine> {
    let mut pool = db_press_pool();
    pool.extend([
        ex(
            "DB bench press on Swiss ball (palms in or out)",
            "https://www.youtube.com/watch?v=uxgA5qEi2mc",
        ),
        ex(
            "Push-up variations (choose 1 and do it)",
            "https://www.youtube.com/watch?v=FU_5LPjtjus",
        ),
        ex(
            "Chin-up variations (choose 1 and do it)",
            "https://www.youtube.com/watch?v=zaJQtvKkl6g",
        ),
        ex(
            "Barbell bench press (55-60% of 1RM)",
            "http://www.youtube.com/watch?v=E-kNUEv0YgA",
        ),
    ]);
    Routine::new(
        "Repetition Exercise",
        "Perform 3 sets of max reps OR 4 sets of 12-15 reps.",
        pool,
    )
}

fn vertical_pulling_superset() -> Result<Routine> {
    Routine::superset(
        "Vertical pulling / Rear delt superset",
        "Superset! Perform 3-4 supersets of 8-12 reps of each exercise.",
        vec![
            vec![
                ex("Lat pulldowns (various bars)", "https://www.youtube.com/watch?v=84oCEetzdS4"),
                ex("Straight arm pulldowns", "https://www.youtube.com/watch?v=n3O1jkQyXC4"),
            ],
            rear_delt_pool(),
        ],
    )
}

fn medial_delts() -> Result<Routine> {
    Routine::new(
        "Medial delts",
        "Perform 4 sets of 8-12 reps.",
        vec![
            ex("DB lateral raises", "https://www.youtube.com/watch?v=geenhiHju-o"),
            ex("L-lateral raises", "https://www.youtube.com/watch?v=bXC7eL0H7AA"),
            ex("Cable lateral raises", "https://www.youtube.com/watch?v=IVBacQ0Q3Bw"),
            ex("DB military press", "https://www.youtube.com/watch?v=qEwKCR5JCog"),
            ex("DB side press", "https://www.youtube.com/watch?v=Eyd-e7J3zFI"),
        ],
    )
}

fn traps_arms_superset() -> Result<Routine> {
    Routine::superset(
        "Traps / Arms superset",
        "Superset! Perform 3 supersets of 8-10 reps of each exercise.",
        vec![shrug_pool(), curl_pool()],
    )
}

fn max_effort_lift() -> Result<Routine> {
    Routine::new(
        "Max-effort lift",
        "Work up to a max set of 3-5 reps.",
        vec![
            ex(
                "Box squats (regular bar, safety squat bar, cambered bar, buffalo bar)",
                "http://www.youtube.com/watch?v=paAR3wjFFks",
            ),
            ex(
                "Free squats (regular bar, safety squat bar, cambered bar, buffalo bar)",
                "http://www.youtube.com/watch?v=7IkyiekPIrg&NR=1",
            ),
            ex("Straight bar deadlifts", "https://www.youtube.com/watch?v=L0vuwx9Q9VI"),
            ex("Rack pulls", "https://www.youtube.com/watch?v=e11lVmLsvFU"),
        ],
    )
}

fn unilateral_movement() -> Result<Routine> {
    Routine::new(
        "Unilateral Movement",
        "Perform 3 sets of 6-12 reps.",
        vec![
            ex(
                "Bulgarian split squats, front leg elevated (holding DB's or with a barbell)",
                "http://www.youtube.com/watch?v=RZlodHgCipk",
            ),
            ex("Reverse lunge variations", "https://www.youtube.com/watch?v=k_KoxW5Kpus"),
            ex("Step up variations", "https://www.youtube.com/watch?v=dQqApCGd5Ss"),
        ],
    )
}

fn hamstring_movement() -> Result<Routine> {
    Routine::new(
        "Hamstring / Posterior Chain Movement",
        "Perform 3 sets of 8-12 reps.",
        hip_extension_pool(),
    )
}

fn ab_circuit() -> Result<Routine> {
    Routine::circuit(
        "Ground-based, high-rep abdominal circuit",
        "Perform 10-20 reps of each exercise and go through the circuit 2-3 times. \
         Rest 1-2 mins between circuits.",
        vec![ex("Abdominal circuit", "https://www.youtube.com/watch?v=izDf0MCR2DU")],
    )
}

// ============================================================================
// r/Fitness basic beginner routines
// ============================================================================

fn barbell_rows() -> Result<Routine> {
    Routine::circuit(
        "Barbell rows",
        "Perform 3 sets of 5+ reps.",
        vec![ex("Barbell rows", "https://www.youtube.com/watch?v=I-qgwlP0J90")],
    )
}

fn bench_press() -> Result<Routine> {
    Routine::circuit(
        "Bench press",
        "Perform 3 sets of 5+ reps.",
        vec![ex("Bench Press", "https://www.youtube.com/watch?v=UaOwz6DNdjw")],
    )
}

fn squats() -> Result<Routine> {
    Routine::circuit(
        "Squats",
        "Perform 3 sets of 5+ reps.",
        vec![ex(
            "Free squats (regular bar, safety squat bar, cambered bar, buffalo bar)",
            "http://www.youtube.com/watch?v=7IkyiekPIrg&NR=1",
        )],
    )
}

fn pullups() -> Result<Routine> {
    Routine::circuit(
        "Pullups",
        "Perform 3 sets of 5+ reps.",
        vec![ex("Pullups", "https://www.youtube.com/watch?v=eGo4IYlbE5g")],
    )
}

fn overhead_press() -> Result<Routine> {
    Routine::circuit(
        "Overhead press",
        "Perform 3 sets of 5+ reps.",
        vec![ex("Barbell Overhead Press", "https://www.youtube.com/watch?v=_RlRDWO2jfg")],
    )
}

fn deadlifts() -> Result<Routine> {
    Routine::circuit(
        "Deadlifts",
        "Perform 3 sets of 5+ reps.",
        vec![ex("Straight bar deadlifts", "https://www.youtube.com/watch?v=L0vuwx9Q9VI")],
    )
}

fn conditioning() -> Result<Routine> {
    Routine::new(
        "Conditioning",
        "Perform 3 rounds of 30 seconds on, 30 seconds off.",
        vec![
            ex("Burpees", "https://www.youtube.com/watch?v=qLBImHhCXSw"),
            ex("Squats (bodyweight)", "https://youtu.be/R1v152b72lo?t=64"),
        ],
    )
}

// ============================================================================
// Dumbbell stop-gap routines
// ============================================================================

fn db_press() -> Result<Routine> {
    Routine::new("DB press", "Perform 3 sets of 8-12 reps.", db_press_pool())
}

fn db_rows() -> Result<Routine> {
    Routine::new(
        "DB rows",
        "Perform 3 sets of 8-12 reps per arm.",
        vec![
            ex("DB rows", "https://www.youtube.com/watch?v=PgpQ4-jHiq4"),
            ex("Chest supported rows", "https://www.youtube.com/watch?v=H75im9fAUMc"),
        ],
    )
}

fn goblet_squats() -> Result<Routine> {
    Routine::circuit(
        "Goblet squats",
        "Perform 3 sets of 10-15 reps.",
        vec![ex("Goblet squats", "https://www.youtube.com/watch?v=MeIiIdhvXT4")],
    )
}

fn db_overhead_press() -> Result<Routine> {
    Routine::new(
        "DB overhead press",
        "Perform 3 sets of 8-12 reps.",
        vec![
            ex("DB military press", "https://www.youtube.com/watch?v=qEwKCR5JCog"),
            ex("DB side press", "https://www.youtube.com/watch?v=Eyd-e7J3zFI"),
        ],
    )
}

fn db_curls() -> Result<Routine> {
    Routine::new("DB curls", "Perform 3 sets of 8-15 reps.", curl_pool())
}

fn db_romanian_deadlift() -> Result<Routine> {
    Routine::circuit(
        "DB Romanian deadlift",
        "Perform 3 sets of 10-12 reps.",
        vec![ex("DB Romanian deadlift", "https://www.youtube.com/watch?v=FQKfr1YDhEk")],
    )
}

// ============================================================================
// Recovery routines
// ============================================================================

fn stretch_circuit() -> Result<Routine> {
    Routine::circuit(
        "Stretching",
        "Go through the full routine slowly. Hold each stretch for 30-60 seconds.",
        vec![ex(
            "AGT Stretch Routine (follow link)",
            "https://agt.degreesofclarity.com/stretching/",
        )],
    )
}

fn yoga_flow() -> Result<Routine> {
    Routine::circuit(
        "Yoga flow",
        "Follow the video at an easy pace. Breathe.",
        vec![ex(
            "Yoga for athletes (30 min flow)",
            "https://www.youtube.com/watch?v=4pKly2JojMw",
        )],
    )
}

fn yoga_strength() -> Result<Routine> {
    Routine::circuit(
        "Yoga strength",
        "Follow the video. Hold positions as long as the instructor does.",
        vec![ex(
            "Power yoga (strength focus)",
            "https://www.youtube.com/watch?v=Eml2xnoLpYE",
        )],
    )
}

// ============================================================================
// Catalog assembly
// ============================================================================

/// Build the full catalog of known workouts.
///
/// Fails if any routine definition is invalid (empty pool, empty group,
/// bad exercise data).
pub fn build_catalog() -> Result<Catalog> {
    let mut workouts = HashMap::new();

    let mut insert = |id: &str, workout: Workout| {
        workouts.insert(id.to_string(), Arc::new(workout));
    };

    // WS4SB
    insert(
        "max_effort_upper_body",
        Workout::new(
            "Max-Effort Upper Body",
            vec![
                Arc::new(max_effort_exercise()?),
                Arc::new(supplemental_exercise()?),
                Arc::new(rear_delt_superset()?),
                Arc::new(traps()?),
                Arc::new(elbow_flexors()?),
            ],
        ),
    );

    insert(
        "dynamic_effort_lower_body",
        Workout::new(
            "Dynamic-Effort Lower Body",
            vec![
                Arc::new(jump_training()?),
                Arc::new(unilateral_exercise()?),
                Arc::new(hip_extension_exercise()?),
                Arc::new(weighted_abdominals()?),
            ],
        ),
    );

    insert(
        "repetition_upper_body",
        Workout::new(
            "Repetition Upper Body",
            vec![
                Arc::new(repetition_exercise()?),
                Arc::new(vertical_pulling_superset()?),
                Arc::new(medial_delts()?),
                Arc::new(traps_arms_superset()?),
            ],
        ),
    );

    insert(
        "max_effort_lower_body",
        Workout::new(
            "Max-Effort Lower Body",
            vec![
                Arc::new(max_effort_lift()?),
                Arc::new(unilateral_movement()?),
                Arc::new(hamstring_movement()?),
                Arc::new(ab_circuit()?),
            ],
        ),
    );

    // r/Fitness basic beginner workouts. The plain and conditioning
    // variants share routine instances, so they show the same draws.
    let rows = Arc::new(barbell_rows()?);
    let bench = Arc::new(bench_press()?);
    let squat = Arc::new(squats()?);
    let pulls = Arc::new(pullups()?);
    let ohp = Arc::new(overhead_press()?);
    let dead = Arc::new(deadlifts()?);
    let cond = Arc::new(conditioning()?);

    insert(
        "workout_a",
        Workout::new(
            "Workout A",
            vec![Arc::clone(&rows), Arc::clone(&bench), Arc::clone(&squat)],
        ),
    );
    insert(
        "workout_b",
        Workout::new(
            "Workout B",
            vec![Arc::clone(&pulls), Arc::clone(&ohp), Arc::clone(&dead)],
        ),
    );
    insert(
        "workout_a_conditioning",
        Workout::new(
            "Workout A + Conditioning",
            vec![rows, bench, squat, Arc::clone(&cond)],
        ),
    );
    insert(
        "workout_b_conditioning",
        Workout::new("Workout B + Conditioning", vec![pulls, ohp, dead, cond]),
    );

    // Dumbbell stop-gap
    insert(
        "dumbbell_a",
        Workout::new(
            "Dumbbell Workout A",
            vec![
                Arc::new(db_press()?),
                Arc::new(db_rows()?),
                Arc::new(goblet_squats()?),
                Arc::new(weighted_abdominals()?),
            ],
        ),
    );
    insert(
        "dumbbell_b",
        Workout::new(
            "Dumbbell Workout B",
            vec![
                Arc::new(db_overhead_press()?),
                Arc::new(db_romanian_deadlift()?),
                Arc::new(db_curls()?),
                Arc::new(Routine::new(
                    "Traps",
                    "Perform 3-4 sets of 8-15 reps.",
                    vec![ex("DB shrugs", "https://www.youtube.com/watch?v=g6qbq4Lf1FI")],
                )?),
            ],
        ),
    );

    // Recovery
    insert(
        "stretch",
        Workout::new("Stretch Workout", vec![Arc::new(stretch_circuit()?)]),
    );
    insert(
        "yoga_flow",
        Workout::new("Yoga (Flow)", vec![Arc::new(yoga_flow()?)]),
    );
    insert(
        "yoga_strength",
        Workout::new("Yoga (Strength)", vec![Arc::new(yoga_strength()?)]),
    );

    Ok(Catalog { workouts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_catalog().unwrap();
        assert_eq!(catalog.workouts.len(), 13);
    }

    #[test]
    fn test_catalog_validates() {
        let catalog = build_catalog().unwrap();
        let errors = catalog.validate();
        assert!(errors.is_empty(), "catalog has validation errors: {:?}", errors);
    }

    #[test]
    fn test_workout_lookup() {
        let catalog = build_catalog().unwrap();
        let workout = catalog.workout("max_effort_upper_body").unwrap();
        assert_eq!(workout.name(), "Max-Effort Upper Body");
        assert_eq!(workout.routines().len(), 5);
    }

    #[test]
    fn test_unknown_workout_errors() {
        let catalog = build_catalog().unwrap();
        assert!(catalog.workout("leg_day_every_day").is_err());
    }

    #[test]
    fn test_conditioning_variants_share_routines() {
        let catalog = build_catalog().unwrap();
        let plain = catalog.workout("workout_a").unwrap();
        let conditioning = catalog.workout("workout_a_conditioning").unwrap();

        assert!(Arc::ptr_eq(&plain.routines()[0], &conditioning.routines()[0]));
    }

    #[test]
    fn test_every_workout_has_routines() {
        let catalog = build_catalog().unwrap();
        for (id, workout) in &catalog.workouts {
            assert!(!workout.routines().is_empty(), "workout '{}' is empty", id);
        }
    }
}
