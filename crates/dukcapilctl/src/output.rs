//! Terminal rendering for command reports.

use crate::commands::{AskReport, CheckReport, TopicRow};
use dukcapil_shared::{ButtonAction, Delivery, Response};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Print a report as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn heading(text: &str) {
    println!("{}", text.bold().cyan());
}

fn separator(index: usize, total: usize) {
    if total > 1 {
        println!("{}", format!("── {}/{} ──", index + 1, total).dimmed());
    }
}

/// Chunks, keyboard and notice of a response
pub fn print_response(response: &Response) {
    if let Some(topic) = &response.topic {
        println!("{}: {}", "Topic".bold(), topic.green());
    }
    if response.delivery == Delivery::EditOrSend {
        println!("{}", "(edits the pressed message)".dimmed());
    }
    if let Some(notice) = &response.notice {
        let kind = if notice.alert { "Alert" } else { "Notice" };
        println!("{}: {}", kind.yellow().bold(), notice.text);
    }

    let total = response.chunks.len();
    for (i, chunk) in response.chunks.iter().enumerate() {
        separator(i, total);
        println!("{}", chunk);
    }

    if response.has_keyboard() {
        println!();
        heading("Keyboard");
        for row in &response.keyboard {
            let cells: Vec<String> = row
                .iter()
                .map(|button| match &button.action {
                    ButtonAction::Navigate(id) => format!("[{}] → {}", button.label, id),
                    ButtonAction::OpenLink(url) => format!("[{}] ↗ {}", button.label, url),
                })
                .collect();
            println!("  {}", cells.join("   "));
        }
    }
}

pub fn print_ask(report: &AskReport) {
    let c = &report.classification;
    match (c.rule_index, c.matched) {
        (Some(index), Some(matched)) => println!(
            "{}: {} (rule #{}, matched \"{}\")",
            "Intent".bold(),
            c.topic.green(),
            index,
            matched
        ),
        _ => println!("{}: {}", "Intent".bold(), c.topic.yellow()),
    }
    println!();
    print_response(&report.response);
}

pub fn print_topics(rows: &[TopicRow]) {
    heading(&format!("{} topics", rows.len()));
    for row in rows {
        let kind = match row.kind {
            dukcapil_shared::TopicKind::Leaf => "leaf",
            dukcapil_shared::TopicKind::Category => "menu",
        };
        println!(
            "  {:<20} {:<5} {:>5} chars  {}",
            row.id.green(),
            kind,
            row.chars,
            row.label
        );
        if row.children > 0 {
            println!("  {:<20} {} entries", "", row.children);
        }
        if !row.phrases.is_empty() {
            println!("  {:<20} {}", "", row.phrases.join(", ").dimmed());
        }
    }
}

pub fn print_check(report: &CheckReport) {
    println!("{}: {}", "Topics".bold(), report.topics);
    println!("{}: {}", "Keyword rules".bold(), report.rules);
    println!("{}: {}", "Menu ids".bold(), report.reachable);
    if report.ok() {
        println!("{}", "✓ every reference resolves".green());
    } else {
        println!("{}", "✗ missing topics:".red().bold());
        for id in &report.dangling {
            println!("  {}", id.red());
        }
    }
}

pub fn print_chunks(chunks: &[String], limit: usize) {
    heading(&format!("{} chunk(s), limit {}", chunks.len(), limit));
    for (i, chunk) in chunks.iter().enumerate() {
        println!(
            "{}",
            format!("── {}/{} ({} chars) ──", i + 1, chunks.len(), chunk.chars().count())
                .dimmed()
        );
        println!("{}", chunk);
    }
}
