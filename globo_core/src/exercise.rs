//! Exercises: named movements with a demonstration link.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Markup dialect for rendered documents.
///
/// Email bodies are HTML; Todoist task descriptions are Markdown.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Markup {
    Html,
    Markdown,
}

/// A named exercise with a URL demonstrating proper form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub demo_url: String,
}

impl Exercise {
    pub fn new(name: impl Into<String>, demo_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            demo_url: demo_url.into(),
        }
    }

    /// Render the exercise as a link fragment in the given markup.
    pub fn render(&self, markup: Markup) -> String {
        match markup {
            Markup::Html => format!(
                "{} (<a href=\"{}\">example</a>)",
                self.name, self.demo_url
            ),
            Markup::Markdown => format!("{} ([example]({}))", self.name, self.demo_url),
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_html_link() {
        let ex = Exercise::new("Bench Press", "https://example.com/bench");
        assert_eq!(
            ex.render(Markup::Html),
            "Bench Press (<a href=\"https://example.com/bench\">example</a>)"
        );
    }

    #[test]
    fn test_render_markdown_link() {
        let ex = Exercise::new("Bench Press", "https://example.com/bench");
        assert_eq!(
            ex.render(Markup::Markdown),
            "Bench Press ([example](https://example.com/bench))"
        );
    }
}
