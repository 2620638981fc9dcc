//! Helpers for integration tests.

use chrono::Utc;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use wavesight::db::{DbPool, establish_connection_pool};
use wavesight::domain::category::Category;
use wavesight::domain::trend::{NewTrendSubmission, Platform};
use wavesight::domain::types::{SpotterId, TrendDescription, TrendTitle, TrendUrl, WaveScore};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Build an insertable trend submission with sensible defaults.
#[allow(dead_code)]
pub fn new_trend(spotter_id: i32, title: &str, category: Category) -> NewTrendSubmission {
    let now = Utc::now().naive_utc();
    NewTrendSubmission {
        spotter_id: SpotterId::new(spotter_id).expect("valid spotter id"),
        title: TrendTitle::new(title).expect("valid title"),
        description: TrendDescription::new(format!("{title} description")).expect("valid desc"),
        url: TrendUrl::new("https://www.tiktok.com/@a/video/1").expect("valid url"),
        thumbnail_url: None,
        creator_handle: None,
        platform: Platform::Tiktok,
        category,
        wave_score: WaveScore::default(),
        created_at: now,
        updated_at: now,
    }
}
