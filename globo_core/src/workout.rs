//! Workouts: an ordered set of routines performed together on one day.

use crate::exercise::Markup;
use crate::routine::Routine;
use std::sync::Arc;

const WARM_UP_URL: &str = "https://www.youtube.com/watch?v=qQ96oXp5RTU";

/// A full day's workout.
///
/// Routines are shared by `Arc` so that two workouts reusing the same named
/// routine also share its memoized exercise selection.
#[derive(Clone, Debug)]
pub struct Workout {
    name: String,
    routines: Vec<Arc<Routine>>,
}

impl Workout {
    /// Expected to be non-empty; the catalog validator flags workouts
    /// without routines.
    pub fn new(name: impl Into<String>, routines: Vec<Arc<Routine>>) -> Self {
        Self {
            name: name.into(),
            routines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn routines(&self) -> &[Arc<Routine>] {
        &self.routines
    }

    /// Render the workout as a document: heading, warm-up reminder, then
    /// one list item per routine. All variability lives in the routines.
    pub fn render(&self, markup: Markup) -> String {
        match markup {
            Markup::Html => {
                let routines: String = self.routines.iter().map(|r| r.render(markup)).collect();
                format!(
                    "<p><b>{}</b></p>\
                     <p>Don't forget to <a href=\"{}\">warm up</a>!</p>\
                     <ul>{}</ul>",
                    self.name, WARM_UP_URL, routines
                )
            }
            Markup::Markdown => {
                let routines: Vec<String> =
                    self.routines.iter().map(|r| r.render(markup)).collect();
                format!(
                    "**{}**\n\nDon't forget to [warm up]({})!\n\n{}",
                    self.name,
                    WARM_UP_URL,
                    routines.join("\n")
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::Exercise;

    #[test]
    fn test_render_single_routine_document() {
        let routine = Routine::circuit(
            "Bench Press",
            "5x5.",
            vec![Exercise::new(
                "Barbell Bench Press",
                "https://example.com/bench",
            )],
        )
        .unwrap();
        let workout = Workout::new("Workout A", vec![Arc::new(routine)]);

        let html = workout.render(Markup::Html);
        assert!(html.starts_with("<p><b>Workout A</b></p>"));
        assert!(html.contains("<li><b>Bench Press</b> 5x5:"));
        assert!(html.contains("Barbell Bench Press (<a href=\"https://example.com/bench\">example</a>)"));
    }

    #[test]
    fn test_shared_routine_selection_is_shared() {
        let routine = Arc::new(
            Routine::new(
                "Squats",
                "3x5.",
                vec![
                    Exercise::new("Back squat", "https://example.com/back"),
                    Exercise::new("Front squat", "https://example.com/front"),
                    Exercise::new("Box squat", "https://example.com/box"),
                ],
            )
            .unwrap(),
        );

        let a = Workout::new("Workout A", vec![Arc::clone(&routine)]);
        let b = Workout::new("Workout A + Conditioning", vec![Arc::clone(&routine)]);

        // Both workouts see the same one-time draw.
        let doc_a = a.render(Markup::Markdown);
        let doc_b = b.render(Markup::Markdown);
        assert_eq!(doc_a.lines().last(), doc_b.lines().last());
    }
}
