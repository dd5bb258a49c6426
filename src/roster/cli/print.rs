use colored::Colorize;
use roster::api::{AgeStats, CmdMessage, MessageLevel};
use roster::commands::config::{value_of, KEYS};
use roster::config::RosterConfig;
use roster::model::StudentRecord;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 4] = ["ID", "Name", "Age", "Grade"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[StudentRecord]) {
    if records.is_empty() {
        println!("No students found.");
        return;
    }

    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.student_id.to_string(),
                r.name.clone(),
                r.age.to_string(),
                r.grade.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let header = pad_row(&HEADERS.map(String::from), &widths);
    println!("{}", header.bold());
    for row in &rows {
        println!("{}", pad_row(row, &widths));
    }
}

pub(super) fn print_stats(stats: &AgeStats) {
    println!("{}{}", format!("{:<10}", "count").dimmed(), stats.count);
    println!("{}{:.2}", format!("{:<10}", "mean").dimmed(), stats.mean);
    println!("{}{:.2}", format!("{:<10}", "median").dimmed(), stats.median);
    println!("{}{:.2}", format!("{:<10}", "std dev").dimmed(), stats.std_dev);
}

pub(super) fn print_config(config: &RosterConfig, key: Option<&str>) {
    let keys: Vec<&str> = match key {
        Some(k) => vec![k],
        None => KEYS.to_vec(),
    };
    for k in keys {
        if let Some(value) = value_of(config, k) {
            println!("{} = {}", k, value);
        }
    }
}

fn pad_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w.saturating_sub(cell.width()))))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_display_width() {
        let row = ["1".to_string(), "Zoë".to_string(), "20".to_string(), "A".to_string()];
        let out = pad_row(&row, &[2, 5, 3, 5]);
        assert_eq!(out, "1   Zoë    20   A");
    }
}
