//! Routines: candidate exercise pools and the per-session selection.
//!
//! A routine owns one or more pools of candidate exercises and draws a
//! subset of them once per process run. The draw is memoized so that a
//! routine rendered twice in one run always shows the same exercises.

use crate::exercise::{Exercise, Markup};
use crate::{Error, Result};
use once_cell::sync::OnceCell;
use rand::Rng;

/// Shape of a routine's candidate pool.
///
/// The original distinction between plain and superset routines is only a
/// difference in how the pool is shaped, so it is a tagged variant rather
/// than two types.
#[derive(Clone, Debug)]
pub enum CandidatePool {
    /// A single ordered pool to draw from.
    Flat(Vec<Exercise>),
    /// Parallel pools; one independent draw per group (superset).
    Grouped(Vec<Vec<Exercise>>),
}

/// A named group of candidate exercises with selection rules.
#[derive(Debug)]
pub struct Routine {
    name: String,
    instructions: String,
    pool: CandidatePool,
    picks: usize,
    select_all: bool,
    // Populated at most once; never re-rolled for the lifetime of the instance.
    selected: OnceCell<Vec<Exercise>>,
}

impl Routine {
    /// A routine drawing one exercise from a single pool.
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        exercises: Vec<Exercise>,
    ) -> Result<Self> {
        Self::with_picks(name, instructions, exercises, 1)
    }

    /// A routine drawing `picks` distinct exercises from a single pool.
    pub fn with_picks(
        name: impl Into<String>,
        instructions: impl Into<String>,
        exercises: Vec<Exercise>,
        picks: usize,
    ) -> Result<Self> {
        let name = name.into();
        validate_pool(&name, &exercises, picks)?;
        Ok(Self {
            name,
            instructions: instructions.into(),
            pool: CandidatePool::Flat(exercises),
            picks,
            select_all: false,
            selected: OnceCell::new(),
        })
    }

    /// A circuit: every exercise in the pool is performed, in order.
    pub fn circuit(
        name: impl Into<String>,
        instructions: impl Into<String>,
        exercises: Vec<Exercise>,
    ) -> Result<Self> {
        let name = name.into();
        validate_pool(&name, &exercises, 1)?;
        Ok(Self {
            name,
            instructions: instructions.into(),
            pool: CandidatePool::Flat(exercises),
            picks: 1,
            select_all: true,
            selected: OnceCell::new(),
        })
    }

    /// A superset: one independent draw from each group, in group order.
    pub fn superset(
        name: impl Into<String>,
        instructions: impl Into<String>,
        groups: Vec<Vec<Exercise>>,
    ) -> Result<Self> {
        Self::superset_with_picks(name, instructions, groups, 1)
    }

    /// A superset drawing `picks` distinct exercises from each group.
    pub fn superset_with_picks(
        name: impl Into<String>,
        instructions: impl Into<String>,
        groups: Vec<Vec<Exercise>>,
        picks: usize,
    ) -> Result<Self> {
        let name = name.into();
        if groups.is_empty() {
            return Err(Error::Catalog(format!(
                "routine '{}' has no exercise groups",
                name
            )));
        }
        for group in &groups {
            validate_pool(&name, group, picks)?;
        }
        Ok(Self {
            name,
            instructions: instructions.into(),
            pool: CandidatePool::Grouped(groups),
            picks,
            select_all: false,
            selected: OnceCell::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The exercises chosen for this run.
    ///
    /// The first call draws from the candidate pool; every later call
    /// returns the same selection.
    pub fn exercises(&self) -> &[Exercise] {
        self.selected
            .get_or_init(|| self.select(&mut rand::thread_rng()))
    }

    /// Like [`exercises`](Self::exercises), drawing from the given RNG if
    /// no selection has been memoized yet.
    pub fn exercises_with<R: Rng>(&self, rng: &mut R) -> &[Exercise] {
        self.selected.get_or_init(|| self.select(rng))
    }

    fn select<R: Rng>(&self, rng: &mut R) -> Vec<Exercise> {
        match &self.pool {
            CandidatePool::Flat(exercises) => {
                if self.select_all {
                    exercises.clone()
                } else {
                    draw(rng, exercises, self.picks)
                }
            }
            CandidatePool::Grouped(groups) => {
                let mut chosen = Vec::with_capacity(groups.len() * self.picks);
                for group in groups {
                    chosen.extend(draw(rng, group, self.picks));
                }
                chosen
            }
        }
    }

    /// Render the routine as a list fragment with a nested exercise list.
    pub fn render(&self, markup: Markup) -> String {
        let instructions = self.instructions.trim_end_matches('.');
        match markup {
            Markup::Html => {
                let exercises: String = self
                    .exercises()
                    .iter()
                    .map(|ex| format!("<li>{}</li>", ex.render(markup)))
                    .collect();
                format!(
                    "<li><b>{}</b> {}:<ul>{}</ul></li>",
                    self.name, instructions, exercises
                )
            }
            Markup::Markdown => {
                let exercises: String = self
                    .exercises()
                    .iter()
                    .map(|ex| format!("\n  - {}", ex.render(markup)))
                    .collect();
                format!("- **{}** {}:{}", self.name, instructions, exercises)
            }
        }
    }
}

/// Draw `picks` distinct exercises from `pool`, uniformly at random.
fn draw<R: Rng>(rng: &mut R, pool: &[Exercise], picks: usize) -> Vec<Exercise> {
    let mut candidates = pool.to_vec();
    let mut chosen = Vec::with_capacity(picks);
    for _ in 0..picks {
        let i = rng.gen_range(0..candidates.len());
        chosen.push(candidates.swap_remove(i));
    }
    chosen
}

fn validate_pool(name: &str, pool: &[Exercise], picks: usize) -> Result<()> {
    if pool.is_empty() {
        return Err(Error::Catalog(format!(
            "routine '{}' has an empty exercise pool",
            name
        )));
    }
    if picks == 0 {
        return Err(Error::Catalog(format!(
            "routine '{}' must pick at least one exercise",
            name
        )));
    }
    if picks > pool.len() {
        return Err(Error::Catalog(format!(
            "routine '{}' picks {} exercises from a pool of {}",
            name,
            picks,
            pool.len()
        )));
    }
    for exercise in pool {
        if exercise.name.is_empty() {
            return Err(Error::Catalog(format!(
                "routine '{}' contains an exercise with an empty name",
                name
            )));
        }
        if exercise.demo_url.is_empty() {
            return Err(Error::Catalog(format!(
                "routine '{}': exercise '{}' has an empty demo URL",
                name, exercise.name
            )));
        }
    }
    Ok(())
}
