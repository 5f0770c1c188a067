use std::fmt::Write;

use nr_core::{Article, LogEntry, LogLevel, RewrittenArticle};
use nr_automation::AutomationStatus;
use nr_web::StatusMirror;

fn level_marker(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "ℹ️",
        LogLevel::Success => "✅",
        LogLevel::Error => "❌",
    }
}

pub fn render_log_entry(entry: &LogEntry) -> String {
    format!("[{}] {} {}", entry.timestamp, level_marker(entry.level), entry.message)
}

pub fn render_rewritten(article: &RewrittenArticle) -> String {
    format!(
        "📰 {}\n\n{}\n\n{}",
        article.title, article.body, article.formatted_source
    )
}

pub fn render_article(article: &Article) -> String {
    format!(
        "{} ({})\n{} <{}>\n\n{}",
        article.title,
        article.id,
        article.source_name,
        article.source_url,
        article.content
    )
}

pub fn render_status(status: &AutomationStatus) -> String {
    let mut out = String::new();
    let state = if status.running { "🟢 running" } else { "⚪ idle" };
    let _ = writeln!(out, "Automation: {}", state);

    match &status.latest {
        Some(latest) => {
            let _ = writeln!(out, "\nLatest published:\n{}", render_rewritten(latest));
        }
        None => {
            let _ = writeln!(out, "\nNothing published yet.");
        }
    }

    if status.logs.is_empty() {
        let _ = writeln!(out, "\nNo activity yet.");
    } else {
        let _ = writeln!(out, "\nActivity (newest first):");
        for entry in &status.logs {
            let _ = writeln!(out, "  {}", render_log_entry(entry));
        }
    }
    out
}

/// What `nr watch` prints after each poll.
pub fn render_mirror(mirror: &StatusMirror) -> String {
    let mut out = match mirror.status() {
        Some(status) => render_status(status),
        None => "Waiting for the server...\n".to_string(),
    };
    if let Some(error) = mirror.last_error() {
        let _ = writeln!(out, "\n⚠️ Last poll failed: {}", error);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, level: LogLevel, message: &str) -> LogEntry {
        LogEntry {
            id,
            timestamp: "12:00:00".to_string(),
            message: message.to_string(),
            level,
        }
    }

    #[test]
    fn test_render_idle_status() {
        let status = AutomationStatus {
            running: false,
            logs: Vec::new(),
            latest: None,
        };
        let out = render_status(&status);
        assert!(out.starts_with("Automation: ⚪ idle"));
        assert!(out.contains("Nothing published yet."));
        assert!(out.contains("No activity yet."));
    }

    #[test]
    fn test_render_keeps_log_order() {
        let status = AutomationStatus {
            running: true,
            logs: vec![
                entry(1, LogLevel::Success, "Successfully published to Telegram."),
                entry(0, LogLevel::Info, "Starting automation..."),
            ],
            latest: Some(RewrittenArticle {
                title: "عنوان".to_string(),
                body: "متن".to_string(),
                formatted_source: "منبع".to_string(),
            }),
        };
        let out = render_status(&status);
        assert!(out.contains("🟢 running"));
        assert!(out.contains("📰 عنوان"));
        let newer = out.find("Successfully published").unwrap();
        let older = out.find("Starting automation").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_render_log_entry() {
        let line = render_log_entry(&entry(3, LogLevel::Error, "An error occurred: boom"));
        assert_eq!(line, "[12:00:00] ❌ An error occurred: boom");
    }

    #[test]
    fn test_render_mirror_shows_error() {
        let mut mirror = StatusMirror::new();
        assert!(render_mirror(&mirror).starts_with("Waiting for the server"));

        mirror.reconcile(Err(nr_core::Error::Validation("connection refused".to_string())));
        let out = render_mirror(&mirror);
        assert!(out.contains("⚠️ Last poll failed: connection refused"));
    }
}
