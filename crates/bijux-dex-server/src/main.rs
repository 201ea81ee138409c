#![forbid(unsafe_code)]

use bijux_dex_server::{
    build_router, validate_startup_config, ApiConfig, AppState, HttpUpstream, UpstreamConfig,
    DEFAULT_BIND_ADDR, DEFAULT_UPSTREAM_BASE_URL,
};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_optional_duration_ms(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}

fn env_list(name: &str, default: &[&str]) -> Vec<String> {
    let parsed: Vec<String> = env::var(name)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();
    if parsed.is_empty() {
        default.iter().map(|s| (*s).to_string()).collect()
    } else {
        parsed
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                (Err(e), _) | (_, Err(e)) => {
                    error!("signal handler registration failed: {e}");
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("DEX_LOG_JSON", true) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("DEX_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let api_defaults = ApiConfig::default();
    let api = ApiConfig {
        max_body_bytes: env_usize("DEX_MAX_BODY_BYTES", api_defaults.max_body_bytes),
        cors_allowed_origins: env_list("DEX_CORS_ALLOWED_ORIGINS", &["*"]),
    };
    let upstream_defaults = UpstreamConfig::default();
    let upstream_cfg = UpstreamConfig {
        base_url: env::var("DEX_UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string()),
        timeout: env_optional_duration_ms("DEX_UPSTREAM_TIMEOUT_MS"),
        user_agent: env::var("DEX_USER_AGENT").unwrap_or(upstream_defaults.user_agent),
        max_redirects: upstream_defaults.max_redirects,
    };
    validate_startup_config(&api, &upstream_cfg)?;

    let upstream = HttpUpstream::new(&upstream_cfg).map_err(|e| e.to_string())?;
    let state = AppState::with_config(Arc::new(upstream), api);
    let app = build_router(state);

    let addr: std::net::SocketAddr = bind_addr
        .parse()
        .map_err(|e| format!("invalid bind addr {bind_addr}: {e}"))?;
    let socket = if addr.is_ipv4() {
        tokio::net::TcpSocket::new_v4().map_err(|e| format!("socket v4 failed: {e}"))?
    } else {
        tokio::net::TcpSocket::new_v6().map_err(|e| format!("socket v6 failed: {e}"))?
    };
    socket
        .set_reuseaddr(true)
        .map_err(|e| format!("set_reuseaddr failed: {e}"))?;
    socket.bind(addr).map_err(|e| format!("bind failed: {e}"))?;
    let listener: TcpListener = socket
        .listen(1024)
        .map_err(|e| format!("listen failed: {e}"))?;
    info!(
        bind = %bind_addr,
        upstream = %upstream_cfg.base_url,
        "dex gateway listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            let drain_ms = env_u64("DEX_SHUTDOWN_DRAIN_MS", 0);
            info!(drain_ms, "shutdown signal received");
            tokio::time::sleep(Duration::from_millis(drain_ms)).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
