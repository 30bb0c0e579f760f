//! The dispatcher: look up today's workout and hand it to a delivery sink.

use crate::delivery::DeliverySink;
use crate::exercise::Markup;
use crate::program::WeeklyProgram;
use crate::Result;
use chrono::{NaiveDate, Weekday};

/// What the dispatcher did for the day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A workout was rendered and delivered.
    Delivered { workout: String },
    /// The weekday has no mapped workout; nothing was sent.
    RestDay,
}

/// Title for the delivered document.
///
/// Email subjects carry the date (there will be many of them in an inbox);
/// Todoist tasks do not, matching the original.
fn title(workout_name: &str, date: NaiveDate, markup: Markup) -> String {
    match markup {
        Markup::Html => format!("{} WORKOUT: {}", date, workout_name),
        Markup::Markdown => format!("WORKOUT: {}", workout_name),
    }
}

/// Look up the workout for `weekday`, render it in the sink's markup and
/// deliver it. A rest day is a normal, successful no-op.
pub fn dispatch(
    program: &WeeklyProgram,
    weekday: Weekday,
    date: NaiveDate,
    sink: &dyn DeliverySink,
) -> Result<Outcome> {
    let Some(workout) = program.lookup(weekday) else {
        tracing::info!("{:?} is a rest day in {}", weekday, program.name());
        return Ok(Outcome::RestDay);
    };

    let markup = sink.markup();
    let body = workout.render(markup);
    sink.deliver(&title(workout.name(), date, markup), &body)?;

    tracing::info!("Delivered workout '{}'", workout.name());
    Ok(Outcome::Delivered {
        workout: workout.name().to_string(),
    })
}
