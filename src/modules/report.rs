//! Text rendering of toolkit results
//!
//! The compute functions return plain data; these helpers turn that data
//! into Markdown-style tables for display.

use itertools::Itertools;

use crate::engines::compute::motif::{ConservationReport, DistanceMatrix, Match, MatchResult};

/// Render a distance matrix as a table with sequence names on both axes
pub fn render_distance_matrix(matrix: &DistanceMatrix) -> String {
    let mut header = vec![String::new()];
    header.extend(matrix.names().iter().cloned());

    let rows: Vec<Vec<String>> = matrix
        .rows()
        .map(|(name, cells)| {
            std::iter::once(name.to_string())
                .chain(cells.iter().map(|d| d.to_string()))
                .collect()
        })
        .collect();

    render_table(&header, &rows)
}

/// Render fuzzy matches as `(index, mismatches)` pairs
pub fn render_fuzzy_matches(matches: &[Match]) -> String {
    let pairs = matches
        .iter()
        .map(|m| format!("({}, {})", m.start_index, m.mismatch_count))
        .join(", ");
    format!("[{}]", pairs)
}

/// Render a conservation report: aggregate metrics, then one row per sequence
pub fn render_conservation_report(report: &ConservationReport) -> String {
    let metrics = &report.metrics;
    let average = match metrics.average_mismatches {
        Some(avg) => format!("{:.2}", avg),
        None => "n/a".to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Motif: {} (max mismatches: {})\n\n",
        report.pattern, report.max_mismatches
    ));
    output.push_str("[Conservation Metrics]\n");
    output.push_str(&format!("- Total Sequences Analyzed: {}\n", metrics.total_sequences));
    output.push_str(&format!("- Sequences with Match: {}\n", metrics.sequences_with_match));
    output.push_str(&format!("- Average Mismatches (Best Match): {}\n", average));
    output.push_str(&format!("- Total Mismatches (Best Match): {}\n", metrics.total_mismatches));
    output.push_str("\n[Sequence Details (Best Match)]\n");

    let header: Vec<String> = ["", "Best Index", "Mismatches", "Sequence", "Status"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let rows: Vec<Vec<String>> = report
        .details
        .iter()
        .map(|(name, result)| match result {
            MatchResult::Found { index, mismatches, excerpt } => vec![
                name.clone(),
                index.to_string(),
                mismatches.to_string(),
                excerpt.clone(),
                "Found best match".to_string(),
            ],
            MatchResult::NotFound { reason } => vec![
                name.clone(),
                String::new(),
                String::new(),
                String::new(),
                reason.clone(),
            ],
        })
        .collect();

    output.push_str(&render_table(&header, &rows));
    output
}

fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .chain(std::iter::once(&header[col]))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| {
        let body = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!(" {:<w$} ", cell, w = w))
            .join("|");
        format!("|{}|\n", body)
    };

    let mut output = format_row(header);
    let rule = widths.iter().map(|&w| format!(":{}", "-".repeat(w + 1))).join("|");
    output.push_str(&format!("|{}|\n", rule));
    for row in rows {
        output.push_str(&format_row(row));
    }
    output
}
