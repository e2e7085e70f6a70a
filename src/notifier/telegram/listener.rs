// notifier/telegram/listener.rs

use std::sync::atomic::Ordering;

use serde::Deserialize;
use tokio::time::{sleep, Duration};

use super::command_handler::handle_command;
use super::TelegramNotifier;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    result: Vec<Update>,
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    text: Option<String>,
}

/// Polls getUpdates and dispatches incoming commands.
pub async fn listen_for_commands(notifier: &TelegramNotifier) {
    let url = format!("https://api.telegram.org/bot{}/getUpdates", notifier.bot_token);
    loop {
        let current_offset = notifier.offset.load(Ordering::SeqCst);
        let response = notifier
            .client
            .get(&url)
            .query(&[("offset", (current_offset + 1).to_string())])
            .send()
            .await;

        if let Ok(resp) = response {
            if let Ok(api_response) = resp.json::<ApiResponse>().await {
                for update in api_response.result {
                    if let Some(text) = update.message.as_ref().and_then(|m| m.text.as_deref()) {
                        handle_command(text, notifier).await;
                    }
                    notifier.offset.store(update.update_id + 1, Ordering::SeqCst);
                }
            }
        }

        sleep(Duration::from_secs(2)).await;
    }
}
