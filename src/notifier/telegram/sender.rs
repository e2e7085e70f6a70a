// notifier/telegram/sender.rs

use std::time::Duration;

use tokio::time::timeout;
use tracing::{info, warn};

use crate::model::{NotifyError, Posting};

use super::TelegramNotifier;

/// Characters Telegram MarkdownV2 requires escaping.
const MD_SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

pub fn escape_md(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if MD_SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn source_emoji(source: &str) -> &'static str {
    if source.contains("Internshala") {
        "🎓"
    } else if source.contains("Greenhouse") {
        "🌱"
    } else if source.contains("Lever") {
        "⚙️"
    } else {
        "🏢"
    }
}

/// Plain-text message (startup notices, command replies, summaries).
pub async fn send_text(notifier: &TelegramNotifier, text: &str) -> Result<(), NotifyError> {
    let url = format!("https://api.telegram.org/bot{}/sendMessage", notifier.bot_token);
    let params = [
        ("chat_id", notifier.chat_id.to_string()),
        ("text", text.to_string()),
    ];
    let response = notifier
        .client
        .post(&url)
        .form(&params)
        .send()
        .await
        .map_err(|e| NotifyError::Api(format!("send failed: {e}")))?;
    if !response.status().is_success() {
        warn!("❌ Telegram text error [{}]", response.status());
        return Err(NotifyError::Unreachable);
    }
    Ok(())
}

/// Job alert: MarkdownV2 body, stipend badge, View/Apply buttons.
pub async fn send_posting(notifier: &TelegramNotifier, posting: &Posting) -> Result<(), NotifyError> {
    let url = format!("https://api.telegram.org/bot{}/sendMessage", notifier.bot_token);

    let stipend_display = notifier.engine.stipend().format_display(&posting.stipend);
    let location = if posting.location.is_empty() {
        "Check listing"
    } else {
        posting.location.as_str()
    };
    let message = format!(
        "{} *New Internship Alert\\!*\n\n\
         🏷️ *Role:* {}\n\
         🏢 *Company:* {}\n\
         📍 *Location:* {}\n\
         💰 *Stipend:* {}\n\
         🌐 *Source:* {}",
        source_emoji(&posting.source),
        escape_md(&posting.title),
        escape_md(&posting.company),
        escape_md(location),
        escape_md(&stipend_display),
        escape_md(&posting.source),
    );

    let body = serde_json::json!({
        "chat_id": notifier.chat_id,
        "text": message,
        "parse_mode": "MarkdownV2",
        "disable_web_page_preview": true,
        "reply_markup": {
            "inline_keyboard": [[
                { "text": "🔗 View Job", "url": posting.link },
                { "text": "📝 Apply Now", "url": posting.best_apply_url() },
            ]]
        },
    });

    info!("📤 Sending job alert: {} — {}", posting.company, posting.title);
    let response = match timeout(
        Duration::from_secs(10),
        notifier.client.post(&url).json(&body).send(),
    )
    .await
    {
        Ok(Ok(resp)) => resp,
        Ok(Err(e)) => {
            warn!("❌ Telegram send() failed: {e}");
            return Err(NotifyError::Api(format!("send failed: {e}")));
        }
        Err(_) => {
            warn!("⏳ Telegram send() timed out");
            return Err(NotifyError::Unreachable);
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| "unknown".into());
        warn!("❌ Telegram API responded [{status}]: {body}");
        return Err(NotifyError::Unreachable);
    }
    Ok(())
}

/// End-of-cycle digest.
pub async fn send_cycle_summary(
    notifier: &TelegramNotifier,
    scanned: usize,
    eligible: usize,
    fresh: usize,
) -> Result<(), NotifyError> {
    let message = format!(
        "📊 Scan complete\n\
         🔍 Scanned: {scanned} listings\n\
         ✅ Eligible: {eligible}\n\
         🆕 New alerts: {fresh}\n\
         ⏱️ Next scan in {} minutes",
        notifier.config.check_interval_seconds / 60
    );
    send_text(notifier, &message).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markdown_v2_specials() {
        assert_eq!(escape_md("a_b*c"), r"a\_b\*c");
        assert_eq!(escape_md("₹40,000/month!"), r"₹40,000/month\!");
        assert_eq!(escape_md("plain words"), "plain words");
        assert_eq!(escape_md("(C++)"), r"\(C\+\+\)");
    }

    #[test]
    fn emoji_follows_the_source_tag() {
        assert_eq!(source_emoji("Internshala"), "🎓");
        assert_eq!(source_emoji("Greenhouse"), "🌱");
        assert_eq!(source_emoji("Lever"), "⚙️");
        assert_eq!(source_emoji("Career Page (Acme)"), "🏢");
    }
}
