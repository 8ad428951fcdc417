// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docsift CLI.
//!
//! Result cards in boxes, query matches painted in the theme's accent color.
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and falls back to plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `DOCSIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use docsift::{find_matches, CorpusStats, ResultCard};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Text columns inside a box row (one space of padding each side).
const TEXT_WIDTH: usize = BOX_WIDTH - 2;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOCSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Paint every case-insensitive match of `query` in `text`, with the rest
/// of the text in `base` style (empty for the terminal default).
///
/// Plain text when colors are off; the terminal counterpart of `<mark>`.
pub fn paint_matches(text: &str, query: &str, base: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let accent = format!("{}{}", BOLD, BRIGHT_YELLOW());
    paint_with(text, query, base, &accent)
}

/// Every `RESET` closing a match is followed by `base` again, so a styled
/// line keeps its style between matches.
fn paint_with(text: &str, query: &str, base: &str, accent: &str) -> String {
    let mut out = String::with_capacity(text.len() + base.len());
    out.push_str(base);
    let mut last = 0;
    for range in find_matches(text, query.trim()) {
        out.push_str(&text[last..range.start]);
        out.push_str(accent);
        out.push_str(&text[range.clone()]);
        out.push_str(RESET);
        out.push_str(base);
        last = range.end;
    }
    out.push_str(&text[last..]);
    if !base.is_empty() {
        out.push_str(RESET);
    }
    out
}

/// Greedy word wrap on characters. Whitespace runs (newlines included)
/// collapse to single spaces; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if line_len == 0 { word.len() } else { word.len() + 1 };
        if line_len + needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let len = visible_len(content);
    let pad = TEXT_WIDTH.saturating_sub(len);
    println!(
        "{}│{} {}{} {}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded occurrence count
pub fn score_value(score: u32) -> String {
    let text = format!("{}×", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 10 {
        GREEN()
    } else if score >= 3 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// "author · date · category", skipping empty parts.
pub fn meta_line(card: &ResultCard) -> String {
    [card.author.as_str(), card.date.as_str(), card.category.as_str()]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Print one result card.
pub fn print_card(rank: usize, card: &ResultCard, query: &str) {
    let label = format!("#{} {}", rank, card.id);
    section_top(&label);

    let score = score_value(card.score);
    let title_style = format!("{}{}", BOLD, BLUE());
    for (i, line) in wrap(&card.title, TEXT_WIDTH.saturating_sub(8)).iter().enumerate() {
        let painted = paint_matches(line, query, &title_style);
        if i == 0 {
            let gap = TEXT_WIDTH.saturating_sub(visible_len(&painted) + visible_len(&score));
            row(&format!("{}{}{}", painted, " ".repeat(gap), score));
        } else {
            row(&painted);
        }
    }

    let meta = meta_line(card);
    if !meta.is_empty() {
        for line in wrap(&meta, TEXT_WIDTH) {
            row(&themed(GRAY, &[], &line));
        }
    }

    for line in wrap(&card.excerpt, TEXT_WIDTH) {
        row(&paint_matches(&line, query, ""));
    }

    if !card.tags.is_empty() {
        let tags = card
            .tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ");
        for line in wrap(&tags, TEXT_WIDTH) {
            row(&themed(MAGENTA, &[], &line));
        }
    }

    section_bot();
}

/// Blank query: prompt rather than "no results".
pub fn print_awaiting_query() {
    println!("{}", themed(GRAY, &[DIM], "Type a keyword to search."));
}

pub fn print_no_results(query: &str) {
    println!(
        "No results for {}.",
        themed(YELLOW, &[BOLD], &format!("\"{}\"", query))
    );
}

pub fn print_results_header(query: &str, shown: usize, total: usize) {
    let count = if shown < total {
        format!("{} of {} results", shown, total)
    } else if total == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", total)
    };
    println!(
        "{} for {}",
        themed(GREEN, &[BOLD], &count),
        themed(YELLOW, &[BOLD], &format!("\"{}\"", query))
    );
}

/// Print `inspect` output.
pub fn print_stats(source: &str, stats: &CorpusStats) {
    section_top(source);
    let lines: [(&str, usize, fn() -> String); 5] = [
        ("documents", stats.documents, GREEN),
        ("untitled (never shown)", stats.untitled, YELLOW),
        ("undated (ranked oldest)", stats.undated, YELLOW),
        ("duplicate ids", stats.duplicate_ids, RED),
        ("tagged", stats.tagged, CYAN),
    ];
    for (label, value, color) in lines {
        let value = if value == 0 {
            themed(GRAY, &[], "0")
        } else {
            themed(color, &[BOLD], &value.to_string())
        };
        row(&format!("{:<28}{}", label, value));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
