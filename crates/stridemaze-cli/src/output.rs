//! Output format selection for solver results.

use anyhow::Result;
use clap::ValueEnum;

use stridemaze_lib::{render_json, render_text, Outcome};

/// How the solver result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<cost> <length>` followed by one `<row> <col>` line per cell, or `NO PATH`.
    #[default]
    Text,
    /// Pretty-printed JSON document tagged with a `status` field.
    Json,
}

impl OutputFormat {
    /// Render `outcome`, always ending with a newline.
    pub fn render(self, outcome: &Outcome) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_text(outcome)),
            OutputFormat::Json => {
                let mut document = render_json(outcome)?;
                document.push('\n');
                Ok(document)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_no_path_is_a_single_line() {
        let rendered = OutputFormat::Text.render(&Outcome::NoPath).unwrap();
        assert_eq!(rendered, "NO PATH\n");
    }

    #[test]
    fn json_ends_with_newline() {
        let rendered = OutputFormat::Json.render(&Outcome::NoPath).unwrap();
        assert!(rendered.ends_with("}\n"));
        assert!(rendered.contains("\"no_path\""));
    }
}
