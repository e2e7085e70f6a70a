use std::sync::Arc;

use rand::Rng;
use tokio::sync::{Mutex, Notify};
use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};

use intern_sniper::config::{load_config, AppConfig};
use intern_sniper::eligibility::EligibilityEngine;
use intern_sniper::notifier::TelegramNotifier;
use intern_sniper::scraper::{build_collectors, collect_all, Collector, Fetcher, KeywordFilter};
use intern_sniper::storage::SqliteStorage;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {panic_info:?}");
    }));

    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    // A rule table that fails to compile must abort startup.
    let engine = match EligibilityEngine::new(config.min_stipend) {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            error!("Policy compile error: {}", e);
            return;
        }
    };

    let fetcher = match Fetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("HTTP client error: {}", e);
            return;
        }
    };

    let storage = match SqliteStorage::new("data.db") {
        Ok(s) => Arc::new(Mutex::new(s)),
        Err(e) => {
            error!("Failed to initialize storage: {:?}", e);
            return;
        }
    };

    let refresh_notify = Arc::new(Notify::new());
    let notifier = match TelegramNotifier::new(
        storage.clone(),
        config.clone(),
        engine.clone(),
        refresh_notify.clone(),
    ) {
        Ok(n) => Arc::new(n),
        Err(e) => {
            error!("Notifier init error: {:?}", e);
            return;
        }
    };

    TelegramNotifier::spawn_listener(notifier.clone());
    if let Err(e) = notifier.set_my_commands().await {
        warn!("Failed to register bot commands: {:?}", e);
    }

    info!("Sending startup message...");
    if let Err(e) = notifier.notify_text("🚀 InternSniper started!").await {
        warn!("Startup notification failed: {:?}", e);
    }

    let collectors = build_collectors(&config);
    let keywords = KeywordFilter::from_config(&config);

    loop {
        info!("Starting scan cycle over {} collectors...", collectors.len());
        run_cycle(&collectors, &fetcher, &keywords, &engine, &storage, &notifier).await;

        info!(
            "Waiting for timer ({}s) or manual refresh...",
            config.check_interval_seconds
        );
        tokio::select! {
            _ = sleep(Duration::from_secs(config.check_interval_seconds)) => {
                info!("Timer triggered.");
            }
            _ = refresh_notify.notified() => {
                info!("Manual refresh triggered.");
            }
        }
    }
}

/// One scan: collect from every source, classify, alert on unseen postings.
async fn run_cycle(
    collectors: &[Box<dyn Collector>],
    fetcher: &Fetcher,
    keywords: &KeywordFilter,
    engine: &EligibilityEngine,
    storage: &Arc<Mutex<SqliteStorage>>,
    notifier: &Arc<TelegramNotifier>,
) {
    let postings = collect_all(collectors, fetcher, keywords).await;
    let scanned = postings.len();
    info!("Collected {scanned} postings.");

    let outcome = engine.filter(postings);
    let eligible = outcome.accepted.len();

    let mut fresh = 0usize;
    for posting in outcome.accepted {
        let id = posting.id();

        let already = match storage.lock().await.is_notified(&id) {
            Ok(flag) => flag,
            Err(e) => {
                warn!("Notify check failed: {:?}", e);
                continue;
            }
        };

        let stipend_monthly = engine.stipend().parse(&posting.stipend);
        if let Err(e) = storage.lock().await.save_posting(&posting, stipend_monthly) {
            warn!("DB save error: {:?}", e);
        }

        if already {
            continue;
        }

        if let Err(e) = notifier.notify_posting(&posting).await {
            warn!("Telegram send error: {:?}", e);
        } else if let Err(e) = storage.lock().await.mark_notified(&id) {
            warn!("Mark notified failed: {:?}", e);
        } else {
            fresh += 1;
        }

        // Spread sends out a little so Telegram doesn't rate-limit us.
        let jitter: u64 = rand::rng().random_range(0..500);
        sleep(Duration::from_millis(1500 + jitter)).await;
    }

    info!("Cycle done — {fresh} new alerts.");
    if fresh > 0 {
        if let Err(e) = notifier.notify_summary(scanned, eligible, fresh).await {
            warn!("Summary send failed: {:?}", e);
        }
    }
}
