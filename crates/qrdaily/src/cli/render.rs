//! Terminal output for the CLI. Nothing in here touches the store.

use chrono::{DateTime, FixedOffset};
use colored::Colorize;
use qrdailyapp::api::{CmdMessage, MessageLevel, ProfileSummary};
use qrdailyapp::config::QrDailyConfig;
use qrdailyapp::model::{HistoryEntry, Puzzle, SolvedEntry};
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const CATEGORY_WIDTH: usize = 9;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_puzzle(index: u64, puzzle: &Puzzle, show_hint: bool) {
    println!(
        "{} {}",
        format!("#{}", index + 1).yellow(),
        puzzle.category.to_string().dimmed()
    );
    println!("{}", puzzle.question.bold());
    if show_hint {
        println!("{} {}", "Hint:".dimmed(), puzzle.hint);
    }
}

pub fn print_reveal(puzzle: &Puzzle) {
    println!("{} {}", "Answer:".bold(), puzzle.answer);
    println!("{}", puzzle.explanation.dimmed());
}

pub fn print_streak(
    streak: u32,
    last_solved: Option<DateTime<FixedOffset>>,
    can_solve_today: bool,
    now: DateTime<FixedOffset>,
) {
    let days = if streak == 1 { "day" } else { "days" };
    println!("{} {}", streak.to_string().yellow().bold(), days);
    match last_solved {
        Some(at) => {
            let ago = format_time_ago(at, now);
            println!("{}", format!("last solved {}", ago.trim()).dimmed());
        }
        None => println!("{}", "no puzzle solved yet".dimmed()),
    }
    if can_solve_today {
        println!("{}", "today's puzzle is open".green());
    } else {
        println!("{}", "today's puzzle is done".dimmed());
    }
}

pub fn print_archive(solved: &[SolvedEntry], now: DateTime<FixedOffset>) {
    if solved.is_empty() {
        println!("No solved puzzles yet.");
        return;
    }
    for entry in solved {
        let prefix = format!("  {:>3}d  ", entry.streak);
        let category = format!(
            "{:<width$}",
            entry.puzzle.category.to_string(),
            width = CATEGORY_WIDTH
        );
        print_row(
            &prefix,
            &category,
            &entry.puzzle.question,
            &format_time_ago(entry.solved_at, now),
        );
    }
}

pub fn print_history(history: &[HistoryEntry], now: DateTime<FixedOffset>) {
    if history.is_empty() {
        println!("No scans yet.");
        return;
    }
    for entry in history {
        let prefix = format!("  {}  ", short_id(&entry.id));
        let category = format!("{:<width$}", entry.category, width = CATEGORY_WIDTH);
        print_row(
            &prefix,
            &category,
            &entry.data,
            &format_time_ago(entry.timestamp, now),
        );
    }
}

pub fn print_profile(profile: &ProfileSummary) {
    println!("{:<16}{}", "Streak", profile.streak.to_string().yellow().bold());
    println!("{:<16}{}", "Badge", profile.badge.to_string().cyan());
    println!("{:<16}{}", "Best streak", profile.best_streak);
    println!("{:<16}{}", "Solved", profile.total_solved);
    for (category, count) in &profile.solved_by_category {
        println!("  {:<14}{}", category.to_string(), count.to_string().dimmed());
    }
    let today = if profile.can_solve_today {
        "open".green()
    } else {
        "done".dimmed()
    };
    println!("{:<16}{}", "Today", today);
    println!("{:<16}{}", "Scans", profile.scans);
    println!(
        "{:<16}{}",
        "Reminders",
        if profile.notifications_enabled { "on" } else { "off" }
    );
}

pub fn print_config(config: &QrDailyConfig) {
    for key in qrdailyapp::config::CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn print_row(prefix: &str, category: &str, text: &str, time: &str) {
    let fixed_width = prefix.width() + category.width() + 2 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let single_line: String = text.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
    let display = truncate_to_width(&single_line, available);
    let padding = available.saturating_sub(display.width());

    println!(
        "{}{}  {}{}{}",
        prefix.yellow(),
        category.dimmed(),
        display,
        " ".repeat(padding),
        time.dimmed()
    );
}

pub const SHORT_ID_LEN: usize = 8;

/// Trailing characters of an id. Ids are time-ordered UUIDs, so the random
/// tail tells entries apart where the leading block would not.
pub fn short_id(id: &str) -> &str {
    let start = id.len().saturating_sub(SHORT_ID_LEN);
    id.get(start..).unwrap_or(id)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> String {
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
