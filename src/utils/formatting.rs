//! Formatting utilities used for CLI outputs.

use crate::models::Geolocation;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// `Lat: 45.46421, Lon: 9.19000 (Accuracy: 12m)` or the "not available" text.
pub fn describe_geolocation(geo: Option<&Geolocation>) -> String {
    match geo {
        Some(g) => format!(
            "Lat: {:.5}, Lon: {:.5} (Accuracy: {}m)",
            g.latitude, g.longitude, g.accuracy_meters
        ),
        None => "Geolocation: Not available".to_string(),
    }
}

/// Wrap multi-line notes, keeping the user's own line breaks.
pub fn wrap_notes(notes: &str, width: usize, indent: &str) -> String {
    let opts = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);

    notes
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                indent.to_string()
            } else {
                textwrap::fill(line, &opts)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
