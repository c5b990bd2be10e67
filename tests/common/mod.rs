//! Temporary SQLite databases for integration tests.

#![allow(dead_code)]

use client_registry::db::{ConnectionOptions, DbPool, establish_connection_pool, run_pending_migrations};
use tempfile::TempDir;

/// Migrated database living in a temporary directory removed on drop.
pub struct TestDb {
    pool: DbPool,
    // Held so the directory outlives the pool.
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let options = ConnectionOptions {
            max_connections: 2,
            ..ConnectionOptions::default()
        };
        let pool = establish_connection_pool(&url, options).expect("create pool");
        run_pending_migrations(&pool).expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
