pub mod command_handler;
pub mod listener;
pub mod sender;

use std::sync::atomic::AtomicI64;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::{Mutex, Notify};

use crate::config::AppConfig;
use crate::eligibility::EligibilityEngine;
use crate::model::{NotifyError, Posting};
use crate::storage::SqliteStorage;

pub struct TelegramNotifier {
    pub bot_token: String,
    pub chat_id: i64,
    pub client: Client,
    pub offset: Arc<AtomicI64>,
    pub storage: Arc<Mutex<SqliteStorage>>,
    pub config: Arc<AppConfig>,
    pub engine: Arc<EligibilityEngine>,
    pub start_time: Instant,
    pub refresh_notify: Arc<Notify>,
}

impl TelegramNotifier {
    pub fn new(
        storage: Arc<Mutex<SqliteStorage>>,
        config: Arc<AppConfig>,
        engine: Arc<EligibilityEngine>,
        refresh_notify: Arc<Notify>,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| NotifyError::Api(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            bot_token: config.telegram_bot_token.clone(),
            chat_id: config.telegram_chat_id,
            client,
            offset: Arc::new(AtomicI64::new(0)),
            storage,
            config,
            engine,
            start_time: Instant::now(),
            refresh_notify,
        })
    }

    pub async fn notify_text(&self, text: &str) -> Result<(), NotifyError> {
        sender::send_text(self, text).await
    }

    pub async fn notify_posting(&self, posting: &Posting) -> Result<(), NotifyError> {
        sender::send_posting(self, posting).await
    }

    pub async fn notify_summary(
        &self,
        scanned: usize,
        eligible: usize,
        fresh: usize,
    ) -> Result<(), NotifyError> {
        sender::send_cycle_summary(self, scanned, eligible, fresh).await
    }

    pub async fn set_my_commands(&self) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/setMyCommands", self.bot_token);
        let commands = serde_json::json!({
            "commands": [
                { "command": "ping", "description": "Check connection" },
                { "command": "status", "description": "Postings tracked and alerts sent" },
                { "command": "help", "description": "Command list" },
                { "command": "last", "description": "Show last alert" },
                { "command": "top5", "description": "Top paying postings" },
                { "command": "config", "description": "Current filter settings" },
                { "command": "refresh", "description": "Start a scan now" },
                { "command": "uptime", "description": "Service uptime" }
            ]
        });
        self.client
            .post(&url)
            .json(&commands)
            .send()
            .await
            .map_err(|e| NotifyError::Api(format!("setMyCommands failed: {e}")))?;
        Ok(())
    }

    pub fn spawn_listener(notifier: Arc<TelegramNotifier>) {
        tokio::spawn(async move {
            tracing::info!("▶️ Starting Telegram listener...");
            listener::listen_for_commands(&notifier).await;
            tracing::info!("🛑 Telegram listener ended.");
        });
    }
}
