use crate::db::log::load_log;
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// Colour per audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Red,
        "clear" => Colour::Yellow,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal audit log, one row per line.
    pub fn render_log(conn: &Connection) -> AppResult<Vec<String>> {
        let ansi =
            Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| AppError::Other(e.to_string()))?;
        let rows = load_log(conn)?;

        let entries: Vec<(i64, String, String, String, String)> = rows
            .into_iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(r.date);
                let op_target = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };
                (r.id, date, r.operation, op_target, r.message)
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.len())
            .max()
            .unwrap_or(10)
            .min(60);
        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(entries.len());
        for (id, date, operation, op_target, message) in entries {
            let color = color_for_operation(&operation);

            // Truncate on visible width, then colour only the operation word.
            let visible = if op_target.chars().count() > 60 {
                let mut s = op_target.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &colored).len()));

            lines.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(lines)
    }
}
