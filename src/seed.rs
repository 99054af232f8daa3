use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use redis::aio::ConnectionManager;

// ─── Constants ───────────────────────────────────────────────────

const NUM_USERS: usize = 500;
/// Pipeline batch size — keeps Redis buffers comfortable.
const BATCH: usize = 100;

// ─── Name pools ──────────────────────────────────────────────────

static FIRST: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Leslie", "Tony",
    "Margaret", "John", "Frances", "Dennis", "Radia", "Ken", "Lynn", "Niklaus",
];

static LAST: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Lamport",
    "Hoare", "Hamilton", "Backus", "Allen", "Ritchie", "Perlman", "Thompson",
    "Conway", "Wirth",
];

static ROLES: &[&str] = &["viewer", "editor", "admin"];

// ─── Seeding ─────────────────────────────────────────────────────

/// Populates Redis with a deterministic batch of demo users so the demo
/// endpoints have something to look up on a fresh instance.
/// Runs before the connection is wrapped, so none of this shows up in the
/// overlay's first window.
pub async fn seed(conn: &ConnectionManager) {
    let mut conn = conn.clone();
    let mut rng = StdRng::seed_from_u64(42);

    print!("🌱 Seeding {NUM_USERS} demo users...");

    for batch_start in (0..NUM_USERS).step_by(BATCH) {
        let mut pipe = redis::pipe();

        for i in batch_start..(batch_start + BATCH).min(NUM_USERS) {
            let id = format!("usr_{:08}", i + 1);
            let name = format!(
                "{} {}",
                FIRST[rng.gen_range(0..FIRST.len())],
                LAST[rng.gen_range(0..LAST.len())],
            );
            let email = format!("{}@example.com", id);
            let role = ROLES[rng.gen_range(0..ROLES.len())];

            pipe.cmd("HSET")
                .arg(format!("user:{id}"))
                .arg("id")
                .arg(&id)
                .arg("name")
                .arg(&name)
                .arg("email")
                .arg(&email)
                .arg("role")
                .arg(role)
                .arg("created_at")
                .arg("2026-01-01T00:00:00Z")
                .ignore();
        }

        let _: () = pipe.query_async(&mut conn).await.unwrap_or_else(|e| {
            eprintln!("\n❌ Seeding failed: {e}");
            std::process::exit(1);
        });
    }

    println!(" done");
}
