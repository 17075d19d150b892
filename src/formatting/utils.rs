use chrono::{DateTime, Local, NaiveDate, Utc};
use colored::*;

pub fn extract_first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

pub fn format_relative_time(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        let now = Utc::now();
        let duration = now.signed_duration_since(parsed);

        if duration.num_days() > 365 {
            format!("{}y ago", duration.num_days() / 365)
        } else if duration.num_days() > 30 {
            format!("{}mo ago", duration.num_days() / 30)
        } else if duration.num_days() > 0 {
            format!("{}d ago", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{}h ago", duration.num_hours())
        } else if duration.num_minutes() > 0 {
            format!("{}m ago", duration.num_minutes())
        } else {
            "just now".to_string()
        }
    } else {
        "unknown".to_string()
    }
}

/// Render a deadline, red when already past, yellow when due today.
pub fn format_deadline(deadline: &str) -> ColoredString {
    let date_part = deadline.split('T').next().unwrap_or(deadline);

    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => {
            let today = Local::now().date_naive();
            let display = date.format("%b %d, %Y").to_string();
            if date < today {
                display.red()
            } else if date == today {
                display.yellow()
            } else {
                display.normal()
            }
        }
        Err(_) => date_part.dimmed(),
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

pub fn clean_description(desc: &str) -> String {
    // Take first non-empty line
    let first_line = desc
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    let trimmed = first_line.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.ends_with('.') || trimmed.ends_with('!') || trimmed.ends_with('?') {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}
