//! Rendering a solve result for the terminal or as JSON.

use owo_colors::OwoColorize;
use raises::{DiceSet, Group, SolveResult};
use serde::Serialize;

use crate::error::Result;

/// Flat, presentation-oriented view of a result.
#[derive(Debug, Serialize)]
pub struct Report {
    pub dice: Vec<u8>,
    pub mode: raises::ScoringMode,
    pub successes: u32,
    pub groups: Vec<Vec<u8>>,
    pub group_scores: Vec<u32>,
    pub reserved_groups: usize,
    pub timed_out: bool,
    pub exhaustive: bool,
    pub termination: raises::TerminationReason,
    pub elapsed_ms: u64,
    pub nodes_explored: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Report {
    pub fn new(dice: &DiceSet, result: &SolveResult, seed: Option<u64>) -> Self {
        Self {
            dice: dice.values(),
            mode: result.mode,
            successes: result.score.get(),
            groups: result.group_values(),
            group_scores: result
                .groups
                .iter()
                .map(|g| group_score(g, result))
                .collect(),
            reserved_groups: reserved_count(result),
            timed_out: result.timed_out,
            exhaustive: result.exhaustive,
            termination: result.termination,
            elapsed_ms: result.elapsed.as_millis() as u64,
            nodes_explored: result.stats.nodes_explored,
            seed,
        }
    }
}

fn group_score(group: &Group, result: &SolveResult) -> u32 {
    group.successes(result.mode).map_or(0, |s| s.get())
}

fn reserved_count(result: &SolveResult) -> usize {
    result.reserved_groups.as_ref().map_or(0, Vec::len)
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(dice: &DiceSet, result: &SolveResult, seed: Option<u64>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}", "Roll:".bold(), dice));
    if let Some(seed) = seed {
        out.push_str(&format!(" {}", format!("(seed {})", seed).bright_black()));
    }
    out.push('\n');
    out.push_str(&format!("{} {}\n", "Mode:".bold(), result.mode));

    let status = if result.exhaustive {
        "optimal".bright_green().to_string()
    } else {
        format!("best found, {}", result.termination).yellow().to_string()
    };
    out.push_str(&format!(
        "{} {} ({})\n",
        "Raises:".bold(),
        result.score.get().bright_green().bold(),
        status
    ));

    let reserved = reserved_count(result);
    for (i, group) in result.groups.iter().enumerate() {
        let score = group_score(group, result);
        let line = format!("  {}", group);
        let line = if score > 0 {
            line.white().to_string()
        } else {
            line.bright_black().to_string()
        };
        out.push_str(&line);
        if score > 0 {
            out.push_str(&format!("  {}", format!("+{}", score).bright_green()));
        }
        if i < reserved {
            out.push_str(&format!("  {}", "guaranteed".bright_cyan()));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{}\n",
        format!(
            "{} nodes in {}ms",
            result.stats.nodes_explored,
            result.elapsed.as_millis()
        )
        .bright_black()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use raises::ScoringMode;

    fn solved(values: &[i64], mode: ScoringMode) -> (DiceSet, SolveResult) {
        let dice = DiceSet::from_values(values.iter().copied()).unwrap();
        let result = raises::solve(&dice, mode).unwrap();
        (dice, result)
    }

    #[test]
    fn test_report_lists_groups_and_scores() {
        let (dice, result) = solved(&[9, 1, 5, 5, 5], ScoringMode::TensOrFifteens);
        let report = Report::new(&dice, &result, None);

        assert_eq!(report.successes, 3);
        assert_eq!(report.reserved_groups, 0);
        assert_eq!(report.group_scores.iter().sum::<u32>(), 3);
        assert_eq!(report.groups.iter().map(Vec::len).sum::<usize>(), 5);
        assert!(report.exhaustive);
    }

    #[test]
    fn test_json_shape() {
        let (dice, result) = solved(&[10, 3], ScoringMode::TensOnly);
        let json = render_json(&Report::new(&dice, &result, Some(7))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["successes"], 1);
        assert_eq!(value["mode"], "tens_only");
        assert_eq!(value["reserved_groups"], 1);
        assert_eq!(value["groups"][0], serde_json::json!([10]));
        assert_eq!(value["group_scores"], serde_json::json!([1, 0]));
        assert_eq!(value["seed"], 7);
    }

    #[test]
    fn test_seed_is_omitted_when_absent() {
        let (dice, result) = solved(&[4], ScoringMode::TensOnly);
        let json = render_json(&Report::new(&dice, &result, None)).unwrap();
        assert!(!json.contains("seed"));
    }

    #[test]
    fn test_text_mentions_every_group() {
        let (dice, result) = solved(&[10, 6, 4, 2], ScoringMode::TensOnly);
        let text = render_text(&dice, &result, Some(3));

        assert!(text.contains("[10] = 10"));
        for group in &result.groups {
            assert!(text.contains(&group.to_string()));
        }
        assert!(text.contains("guaranteed"));
        assert!(text.contains("seed 3"));
        assert!(text.contains("optimal"));
    }
}
