// notifier/telegram/command_handler.rs

use tracing::warn;

use crate::utils::group_digits;

use super::sender;
use super::TelegramNotifier;

/// Dispatches one incoming bot command and replies.
pub async fn handle_command(text: &str, notifier: &TelegramNotifier) {
    let reply = match text.trim() {
        "/ping" => "✅ Online.".to_string(),
        "/help" => help_text(),
        "/status" => status_text(notifier).await,
        "/last" => last_text(notifier).await,
        "/top5" => top5_text(notifier).await,
        "/config" => config_text(notifier),
        "/uptime" => uptime_text(notifier),
        "/refresh" => {
            notifier.refresh_notify.notify_one();
            "🔄 Refresh requested, starting a new scan.".to_string()
        }
        _ => "🤖 Unknown command. Try /help.".to_string(),
    };

    if let Err(e) = sender::send_text(notifier, &reply).await {
        warn!("Command reply failed: {e:?}");
    }
}

fn help_text() -> String {
    "📖 Commands:\n\
     /ping — check connection\n\
     /status — postings tracked and alerts sent\n\
     /last — last alert\n\
     /top5 — top paying postings\n\
     /config — current filter settings\n\
     /refresh — start a scan now\n\
     /uptime — service uptime"
        .to_string()
}

async fn status_text(notifier: &TelegramNotifier) -> String {
    let storage = notifier.storage.lock().await;
    let postings = storage.count_postings().unwrap_or(0);
    let notified = storage.count_notified().unwrap_or(0);
    format!("📊 Tracking {postings} postings, {notified} alerts sent.")
}

async fn last_text(notifier: &TelegramNotifier) -> String {
    match notifier.storage.lock().await.get_last_notified() {
        Ok(Some(posting)) => format!(
            "🕐 Last alert:\n{} — {}\n📍 {}\n💰 {}\n🔗 {}",
            posting.company,
            posting.title,
            posting.location,
            notifier.engine.stipend().format_display(&posting.stipend),
            posting.link,
        ),
        Ok(None) => "No alerts sent yet.".to_string(),
        Err(e) => {
            warn!("/last query failed: {e:?}");
            "Storage error.".to_string()
        }
    }
}

async fn top5_text(notifier: &TelegramNotifier) -> String {
    match notifier.storage.lock().await.get_top_paid(5) {
        Ok(postings) if postings.is_empty() => "No parsed stipends stored yet.".to_string(),
        Ok(postings) => {
            let mut out = String::from("💰 Top paying postings:\n");
            for posting in postings {
                out.push_str(&format!(
                    "• {} — {} ({})\n",
                    posting.company,
                    posting.title,
                    notifier.engine.stipend().format_display(&posting.stipend),
                ));
            }
            out
        }
        Err(e) => {
            warn!("/top5 query failed: {e:?}");
            "Storage error.".to_string()
        }
    }
}

fn config_text(notifier: &TelegramNotifier) -> String {
    format!(
        "⚙️ Min stipend: ₹{}/month\n⏱️ Interval: {}s\n📡 Career pages: {}",
        group_digits(notifier.engine.min_stipend()),
        notifier.config.check_interval_seconds,
        notifier.config.career_pages.len(),
    )
}

fn uptime_text(notifier: &TelegramNotifier) -> String {
    let secs = notifier.start_time.elapsed().as_secs();
    format!("⏳ Uptime: {}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}
