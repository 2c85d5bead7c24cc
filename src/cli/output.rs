//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexitrieArgs, OutputFormat};
use crate::correction::TokenOutcome;
use crate::error::Result;

/// Result structure for the `total` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TotalResult {
    pub total: usize,
    pub tokens: usize,
    pub exact_matches: usize,
    pub unresolved: usize,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<TokenOutcome>>,
}

/// Result structure for the `distance` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub word: String,
    pub distance: Option<usize>,
}

/// Result structure for the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexStatsResult {
    pub words: usize,
    pub nodes: usize,
    pub max_depth: usize,
    pub min_word_len: Option<usize>,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    /// Lines printed in human mode.
    fn human_lines(&self, args: &LexitrieArgs) -> Vec<String>;
}

impl HumanOutput for TotalResult {
    fn human_lines(&self, args: &LexitrieArgs) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(details) = &self.details {
            for outcome in details {
                let distance = outcome
                    .distance
                    .map_or_else(|| "-".to_string(), |d| d.to_string());
                lines.push(format!("{}\t{}", outcome.token, distance));
            }
        }

        if args.verbosity() > 1 {
            lines.push(format!(
                "Tokens: {} ({} exact, {} unresolved) in {} ms",
                self.tokens, self.exact_matches, self.unresolved, self.duration_ms
            ));
        }

        lines.push(self.total.to_string());
        lines
    }
}

impl HumanOutput for DistanceResult {
    fn human_lines(&self, _args: &LexitrieArgs) -> Vec<String> {
        match self.distance {
            Some(distance) => vec![format!("{}\t{}", self.word, distance)],
            None => vec![format!("{}\t-", self.word)],
        }
    }
}

impl HumanOutput for IndexStatsResult {
    fn human_lines(&self, _args: &LexitrieArgs) -> Vec<String> {
        vec![
            format!("Words: {}", self.words),
            format!("Nodes: {}", self.nodes),
            format!("Max depth: {}", self.max_depth),
            format!(
                "Shortest word: {}",
                self.min_word_len
                    .map_or_else(|| "-".to_string(), |len| len.to_string())
            ),
        ]
    }
}

/// Render a result in the requested format.
pub fn render_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &LexitrieArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => {
            let mut lines = Vec::new();
            if args.verbosity() > 1 {
                lines.push(message.to_string());
            }
            lines.extend(result.human_lines(args));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            if args.pretty {
                Ok(serde_json::to_string_pretty(result)?)
            } else {
                Ok(serde_json::to_string(result)?)
            }
        }
    }
}

/// Print a result in the requested format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &LexitrieArgs,
) -> Result<()> {
    println!("{}", render_result(message, result, args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> LexitrieArgs {
        let mut argv = vec!["lexitrie"];
        argv.extend_from_slice(extra);
        argv.push("stats");
        LexitrieArgs::try_parse_from(argv).unwrap()
    }

    fn total_result() -> TotalResult {
        TotalResult {
            total: 2,
            tokens: 3,
            exact_matches: 1,
            unresolved: 0,
            duration_ms: 0,
            details: Some(vec![
                TokenOutcome {
                    token: "CAT".to_string(),
                    distance: Some(0),
                },
                TokenOutcome {
                    token: "COT".to_string(),
                    distance: Some(1),
                },
            ]),
        }
    }

    #[test]
    fn test_human_total_ends_with_sum() {
        let rendered = render_result("Done", &total_result(), &args(&[])).unwrap();
        assert_eq!(rendered, "CAT\t0\nCOT\t1\n2");
    }

    #[test]
    fn test_json_total() {
        let rendered = render_result("Done", &total_result(), &args(&["--format", "json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["details"][1]["token"], "COT");
    }

    #[test]
    fn test_json_omits_missing_details() {
        let mut result = total_result();
        result.details = None;
        let rendered = render_result("Done", &result, &args(&["-f", "json"])).unwrap();
        assert!(!rendered.contains("details"));
    }

    #[test]
    fn test_unresolved_distance_renders_dash() {
        let result = DistanceResult {
            word: "ZEBRA".to_string(),
            distance: None,
        };
        assert_eq!(render_result("", &result, &args(&[])).unwrap(), "ZEBRA\t-");
    }
}
