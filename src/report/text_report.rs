use crate::model::potential::PotentialResult;

/// Renders the ranked results as a line-oriented report, one row per map
/// under a header row. Accuracies print with four decimals, stars with two.
pub fn build_text_report(results: &[PotentialResult], comparison: bool) -> String {
    let comparison_header = if comparison { " (+ comparison)" } else { "" };
    let mut lines = vec![format!(
        "Accuracy{comparison_header}, Stars (w/ Mods), Difficulty, Name, (Map Key, Leaderboard ID)"
    )];

    for result in results {
        let Some(difficulty) = &result.leaderboard.difficulty else {
            continue;
        };

        let mut parts = vec![format!("{:.4}", result.required_acc)];

        if comparison {
            parts.push(format!("+{:.4}%", result.required_acc - result.current_acc));
        }

        parts.push(format!("{:.2}", result.stars));
        parts.push(difficulty.difficulty.display_name().to_string());
        parts.push(difficulty.song.name.clone());
        parts.push(format!("({}:{})", difficulty.key, result.leaderboard.leaderboard_id));

        lines.push(parts.join(" "));
    }

    lines.join("\n")
}
