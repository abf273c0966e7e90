
/// CRUD and constraint tests for the `tienda` table
pub mod tienda_tests;

/// Database tests need a reachable Postgres; skip when none is configured.
pub(crate) fn db_tests_disabled() -> bool {
    let _ = dotenvy::dotenv();
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}
