use crate::COLUMNS;
use crate::Feature;
use crate::analysis::Describe;
use crate::analysis::Stats;
use crate::predict::Prediction;
use crate::sample::Species;
use colored::Colorize;

const WIDTH: usize = 14;

fn cell(value: Option<Feature>) -> String {
    match value {
        Some(x) => format!("{:>WIDTH$.4}", x),
        None => format!("{:>WIDTH$}", "NaN"),
    }
}

/// Statistics down, columns across, in storage column order.
pub fn describe_table(describe: &Describe) -> String {
    let mut lines = vec![format!(
        "rows: {}, columns: {}",
        describe.rows.to_string().bold(),
        describe.columns.to_string().bold()
    )];
    let columns = COLUMNS
        .iter()
        .filter_map(|name| describe.describe.get(*name).map(|stats| (*name, stats)))
        .collect::<Vec<(&str, &Stats)>>();
    lines.push(
        std::iter::once(format!("{:<8}", ""))
            .chain(columns.iter().map(|(name, _)| format!("{:>WIDTH$}", name)))
            .collect::<String>()
            .bold()
            .to_string(),
    );
    if let Some((_, first)) = columns.first() {
        for (i, (stat, _)) in first.rows().iter().enumerate() {
            lines.push(
                std::iter::once(format!("{:<8}", stat))
                    .chain(columns.iter().map(|(_, stats)| cell(stats.rows()[i].1)))
                    .collect::<String>(),
            );
        }
    }
    lines.join("\n")
}

/// Predicted class, then one probability per class in class order.
pub fn prediction_table(prediction: &Prediction) -> String {
    let mut lines = vec![format!(
        "predicted class: {} (id={})",
        prediction.class_name.green().bold(),
        prediction.class_id
    )];
    for species in Species::all() {
        let p = prediction
            .probabilities
            .get(species.name())
            .copied()
            .unwrap_or_default();
        lines.push(format!("{:<12}{:>8.4}", species.name(), p));
    }
    lines.join("\n")
}
