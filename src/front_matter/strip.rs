use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// One ordered text transformation in the description pipeline
pub struct StripStep {
    /// Short name used in trace logs and tests
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
    /// Maximum replacements, 0 meaning all
    pub limit: usize,
}

impl StripStep {
    fn new(name: &'static str, pattern: &str, replacement: &'static str, limit: usize) -> Self {
        StripStep {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
            limit,
        }
    }

    /// Apply this step to `text`
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replacen(text, self.limit, self.replacement)
            .into_owned()
    }
}

lazy_static! {
    /// Markup removal applied to the heading section before it is split into lines
    pub static ref MARKUP_STEPS: Vec<StripStep> = vec![
        StripStep::new("heading", r"(?m)^[ \t]*#+[ \t]?", "", 0),
        StripStep::new("image", r"!\[.*?\]\(.*?\)", "", 0),
        StripStep::new("link", r"\[(.*?)\]\(.*?\)", "$1", 0),
        StripStep::new("bold", r"\*\*(.*?)\*\*", "$1", 0),
    ];

    /// Cleanup applied to the joined excerpt lines
    pub static ref EXCERPT_STEPS: Vec<StripStep> = vec![
        StripStep::new("blockquote", r">(.*)", "", 1),
    ];
}

/// Run `text` through `steps` in order
pub fn apply_steps(text: &str, steps: &[StripStep]) -> String {
    steps
        .iter()
        .fold(text.to_string(), |acc, step| {
            let next = step.apply(&acc);
            if next != acc {
                trace!("strip step '{}' changed the excerpt", step.name);
            }
            next
        })
}
