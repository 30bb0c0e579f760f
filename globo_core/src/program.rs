//! Weekly programs: the weekday → workout schedule.
//!
//! Programs that vary week to week derive their schedule from a
//! [`WeekCycle`], which is computed from an injected date. Nothing in this
//! module reads the clock; "today" is resolved once, at the outermost entry
//! point.

use crate::catalog::Catalog;
use crate::workout::Workout;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// Week-derived inputs for dynamic program construction.
///
/// `parity` alternates the A/B workout pairs; `rotation` cycles the weekend
/// recovery slot through its three variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekCycle {
    pub parity: u8,
    pub rotation: u8,
}

impl WeekCycle {
    /// Derive the cycle from a date's ISO week number.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_week(date.iso_week().week())
    }

    /// Derive the cycle from an ISO week number directly.
    pub fn from_week(week: u32) -> Self {
        Self {
            parity: (week % 2) as u8,
            rotation: (week % 3) as u8,
        }
    }
}

/// The built-in weekly programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramKind {
    /// Westside for Skinny Bastards: fixed four-day split.
    Ws4sb,
    /// r/Fitness basic beginner routine with alternating A/B weeks.
    BasicStrength,
    /// Dumbbell-only stop-gap with a rotating recovery day.
    DumbbellStopgap,
}

impl FromStr for ProgramKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ws4sb" => Ok(ProgramKind::Ws4sb),
            "basic_strength" => Ok(ProgramKind::BasicStrength),
            "dumbbell_stopgap" => Ok(ProgramKind::DumbbellStopgap),
            other => Err(Error::UnknownProgram(other.to_string())),
        }
    }
}

/// A weekday → workout mapping. Days absent from the schedule are rest days.
#[derive(Clone, Debug)]
pub struct WeeklyProgram {
    name: String,
    schedule: HashMap<Weekday, Arc<Workout>>,
}

impl WeeklyProgram {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The workout for the given weekday, if any.
    pub fn lookup(&self, day: Weekday) -> Option<&Workout> {
        self.schedule.get(&day).map(Arc::as_ref)
    }

    /// Build the named program from the catalog.
    pub fn build(kind: ProgramKind, catalog: &Catalog, cycle: WeekCycle) -> Result<Self> {
        match kind {
            ProgramKind::Ws4sb => ws4sb(catalog),
            ProgramKind::BasicStrength => basic_strength(catalog, cycle),
            ProgramKind::DumbbellStopgap => dumbbell_stopgap(catalog, cycle),
        }
    }
}

/// The WS4SB split. Fixed; no week-to-week variation.
pub fn ws4sb(catalog: &Catalog) -> Result<WeeklyProgram> {
    let mut schedule = HashMap::new();
    schedule.insert(Weekday::Mon, catalog.workout("max_effort_upper_body")?);
    schedule.insert(Weekday::Wed, catalog.workout("dynamic_effort_lower_body")?);
    schedule.insert(Weekday::Fri, catalog.workout("repetition_upper_body")?);
    schedule.insert(Weekday::Sat, catalog.workout("max_effort_lower_body")?);
    Ok(WeeklyProgram {
        name: "WS4SB".into(),
        schedule,
    })
}

/// The r/Fitness basic beginner routine.
///
/// A and B swap places on alternating weeks so the order goes
/// A, B, A, B, ... across the whole cycle.
pub fn basic_strength(catalog: &Catalog, cycle: WeekCycle) -> Result<WeeklyProgram> {
    let (first, second, sunday) = if cycle.parity == 0 {
        ("workout_a_conditioning", "workout_b_conditioning", "workout_a")
    } else {
        ("workout_b_conditioning", "workout_a_conditioning", "workout_b")
    };

    let mut schedule = HashMap::new();
    schedule.insert(Weekday::Tue, catalog.workout(first)?);
    schedule.insert(Weekday::Fri, catalog.workout(second)?);
    schedule.insert(Weekday::Sat, catalog.workout("stretch")?);
    schedule.insert(Weekday::Sun, catalog.workout(sunday)?);
    Ok(WeeklyProgram {
        name: "Basic Strength Training".into(),
        schedule,
    })
}

/// Dumbbell-only stop-gap program.
///
/// Two lifting days alternate A/B by week parity; the Saturday recovery
/// slot rotates through two yoga variants and a stretch-only day.
pub fn dumbbell_stopgap(catalog: &Catalog, cycle: WeekCycle) -> Result<WeeklyProgram> {
    let (first, second) = if cycle.parity == 0 {
        ("dumbbell_a", "dumbbell_b")
    } else {
        ("dumbbell_b", "dumbbell_a")
    };

    let recovery = match cycle.rotation {
        0 => "yoga_flow",
        1 => "yoga_strength",
        _ => "stretch",
    };

    let mut schedule = HashMap::new();
    schedule.insert(Weekday::Mon, catalog.workout(first)?);
    schedule.insert(Weekday::Thu, catalog.workout(second)?);
    schedule.insert(Weekday::Sat, catalog.workout(recovery)?);
    Ok(WeeklyProgram {
        name: "Dumbbell Stop-Gap".into(),
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;

    #[test]
    fn test_week_cycle_from_week() {
        assert_eq!(WeekCycle::from_week(6), WeekCycle { parity: 0, rotation: 0 });
        assert_eq!(WeekCycle::from_week(7), WeekCycle { parity: 1, rotation: 1 });
        assert_eq!(WeekCycle::from_week(8), WeekCycle { parity: 0, rotation: 2 });
    }

    #[test]
    fn test_week_cycle_from_date() {
        // 2024-01-01 is a Monday in ISO week 1.
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(WeekCycle::from_date(date), WeekCycle::from_week(1));
    }

    #[test]
    fn test_ws4sb_schedule() {
        let catalog = build_catalog().unwrap();
        let program = ws4sb(&catalog).unwrap();

        assert_eq!(
            program.lookup(Weekday::Mon).map(Workout::name),
            Some("Max-Effort Upper Body")
        );
        assert_eq!(
            program.lookup(Weekday::Sat).map(Workout::name),
            Some("Max-Effort Lower Body")
        );
    }

    #[test]
    fn test_rest_day_lookup_is_none() {
        let catalog = build_catalog().unwrap();
        let program = ws4sb(&catalog).unwrap();
        assert!(program.lookup(Weekday::Tue).is_none());
        assert!(program.lookup(Weekday::Sun).is_none());
    }

    #[test]
    fn test_basic_strength_parity_swaps_ab() {
        let catalog = build_catalog().unwrap();

        let even = basic_strength(&catalog, WeekCycle { parity: 0, rotation: 0 }).unwrap();
        assert_eq!(
            even.lookup(Weekday::Tue).map(Workout::name),
            Some("Workout A + Conditioning")
        );
        assert_eq!(
            even.lookup(Weekday::Fri).map(Workout::name),
            Some("Workout B + Conditioning")
        );
        assert_eq!(even.lookup(Weekday::Sun).map(Workout::name), Some("Workout A"));

        let odd = basic_strength(&catalog, WeekCycle { parity: 1, rotation: 0 }).unwrap();
        assert_eq!(
            odd.lookup(Weekday::Tue).map(Workout::name),
            Some("Workout B + Conditioning")
        );
        assert_eq!(
            odd.lookup(Weekday::Fri).map(Workout::name),
            Some("Workout A + Conditioning")
        );
        assert_eq!(odd.lookup(Weekday::Sun).map(Workout::name), Some("Workout B"));
    }

    #[test]
    fn test_basic_strength_saturday_is_stretch() {
        let catalog = build_catalog().unwrap();
        let program = basic_strength(&catalog, WeekCycle::from_week(10)).unwrap();
        assert_eq!(
            program.lookup(Weekday::Sat).map(Workout::name),
            Some("Stretch Workout")
        );
    }

    #[test]
    fn test_dumbbell_recovery_rotation() {
        let catalog = build_catalog().unwrap();

        let names: Vec<_> = (0u8..3)
            .map(|rotation| {
                let program =
                    dumbbell_stopgap(&catalog, WeekCycle { parity: 0, rotation }).unwrap();
                program.lookup(Weekday::Sat).map(Workout::name).unwrap().to_string()
            })
            .collect();

        assert_eq!(names, vec!["Yoga (Flow)", "Yoga (Strength)", "Stretch Workout"]);
    }

    #[test]
    fn test_dumbbell_parity_swaps_ab() {
        let catalog = build_catalog().unwrap();

        let even = dumbbell_stopgap(&catalog, WeekCycle { parity: 0, rotation: 0 }).unwrap();
        assert_eq!(
            even.lookup(Weekday::Mon).map(Workout::name),
            Some("Dumbbell Workout A")
        );

        let odd = dumbbell_stopgap(&catalog, WeekCycle { parity: 1, rotation: 0 }).unwrap();
        assert_eq!(
            odd.lookup(Weekday::Mon).map(Workout::name),
            Some("Dumbbell Workout B")
        );
    }

    #[test]
    fn test_program_kind_parses() {
        assert_eq!("ws4sb".parse::<ProgramKind>().unwrap(), ProgramKind::Ws4sb);
        assert_eq!(
            "basic-strength".parse::<ProgramKind>().unwrap(),
            ProgramKind::BasicStrength
        );
        assert_eq!(
            "dumbbell_stopgap".parse::<ProgramKind>().unwrap(),
            ProgramKind::DumbbellStopgap
        );
        assert!("leg_day".parse::<ProgramKind>().is_err());
    }
}
