use chatpane::{ChatConfig, ConfigError};
use std::collections::HashMap;

/// Bundled config for mobile and web builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

fn bundled_pairs() -> HashMap<String, String> {
    dotenvy::from_read_iter(BUNDLED_CONFIG.as_bytes())
        .filter_map(|item| match item {
            Ok(pair) => Some(pair),
            Err(err) => {
                eprintln!("skipping malformed bundled config line: {err}");
                None
            }
        })
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    for (key, value) in bundled_pairs() {
        // Only set if not already set (allow env override)
        if std::env::var(&key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Result<ChatConfig, ConfigError> {
    ChatConfig::from_env()
}

// No process environment in the browser; read the bundled file directly.
#[cfg(target_arch = "wasm32")]
fn load_config() -> Result<ChatConfig, ConfigError> {
    let pairs = bundled_pairs();
    ChatConfig::from_lookup(|key| pairs.get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("CHAT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// Browser console via the dioxus logger.
#[cfg(target_arch = "wasm32")]
fn init_tracing() {
    let _ = dioxus::logger::init(tracing::Level::INFO);
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    load_dotenv();
    init_tracing();

    let config = load_config().unwrap_or_else(|err| {
        tracing::warn!("{err}; using default chat settings");
        ChatConfig::default()
    });
    tracing::info!(
        delay_ms = config.reply_delay.as_millis() as u64,
        theme = ?config.theme,
        "starting chat"
    );

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(chatpane::ui::App);
}
