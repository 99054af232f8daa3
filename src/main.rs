use std::sync::Arc;

use redis_lens::config::Config;
use redis_lens::instrument::TimedConnection;
use redis_lens::lens::{CommandCounters, RedisView};
use redis_lens::{redis_client, seed, server, AppState};

#[tokio::main]
async fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║   🔍  REDIS LENS — PER-REQUEST DRIVER METRICS   ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    // ── 1. Load configuration ────────────────────────────────────
    let config = Config::load();

    // ── 2. Connect to Redis ──────────────────────────────────────
    println!("🔌 Connecting to Redis at {}...", config.redis_url);
    let redis_conn = redis_client::connect(&config.redis_url).await;
    println!("   ✓ connected");

    // ── 3. Seed demo data ────────────────────────────────────────
    seed::seed(&redis_conn).await;

    // ── 4. Wrap the connection in the lens ───────────────────────
    // One counter pair for the whole process; the view and every
    // connection clone share it.
    let counters = Arc::new(CommandCounters::new());
    let lens = RedisView::new(counters.clone());
    let redis = TimedConnection::new(redis_conn, counters, config.strategy);

    let state = Arc::new(AppState { redis, lens });

    // ── 5. Build Axum router ─────────────────────────────────────
    let app = server::create_router(state);

    // ── 6. Bind & serve ──────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("❌ Cannot bind {}: {e}", config.bind_addr);
            std::process::exit(1);
        });

    println!();
    println!("Server listening on http://{}", config.bind_addr);
    println!("Overlay JSON    → http://{}/debug/redis", config.bind_addr);
    println!("Overlay SSE     → http://{}/debug/redis/stream", config.bind_addr);
    println!();

    axum::serve(listener, app)
        .await
        .expect("Server exited with error");
}
