//! Display formatting functions for the UI

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::helix::{project, HelixGeometry};
use crate::ui::colors::{get_amino_acid_color, get_base_color};

/// Format sequence with spaces every 3 characters (triplets)
pub fn format_triplets(sequence: &str) -> String {
    let mut result = String::new();
    let total = sequence.chars().count();

    for (count, c) in sequence.chars().enumerate() {
        result.push(c);
        if (count + 1) % 3 == 0 && count + 1 < total {
            result.push(' ');
        }
    }

    result
}

/// Color each base of a strand, keeping triplet spacing
pub fn colored_strand(sequence: &str) -> Vec<Span<'static>> {
    format_triplets(sequence)
        .chars()
        .map(|c| Span::styled(c.to_string(), Style::default().fg(get_base_color(c))))
        .collect()
}

/// Amino acid labels joined by dashes, each in its own color
pub fn amino_acid_chain(labels: &[&'static str]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" - ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*label, Style::default().fg(get_amino_acid_color(label))));
    }
    Line::from(spans)
}

/// Segments to draw for a helix seen from angle `yaw`: `(x1, y1, x2, y2)`
/// for each backbone step, then one per rung with its hex color.
pub struct ProjectedHelix {
    pub backbones: Vec<(f64, f64, f64, f64)>,
    pub rungs: Vec<((f64, f64, f64, f64), &'static str)>,
}

pub fn project_helix(geometry: &HelixGeometry, yaw: f64) -> ProjectedHelix {
    let mut backbones = Vec::new();
    for strand in [&geometry.strand1, &geometry.strand2] {
        for pair in strand.windows(2) {
            let (x1, y1) = project(&pair[0], yaw);
            let (x2, y2) = project(&pair[1], yaw);
            backbones.push((x1, y1, x2, y2));
        }
    }

    let rungs = geometry
        .rungs
        .iter()
        .map(|rung| {
            let (x1, y1) = project(&rung.start, yaw);
            let (x2, y2) = project(&rung.end, yaw);
            ((x1, y1, x2, y2), rung.color)
        })
        .collect();

    ProjectedHelix { backbones, rungs }
}
