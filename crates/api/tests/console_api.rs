//! Integration tests for the command console endpoint against a real
//! database.
//!
//! The console's full grammar is covered by unit tests in `sentinel-core`;
//! these tests exercise the HTTP round trip and real Postgres persistence.

mod common;

use common::run_command;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: insert / view / delete round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn insert_view_delete_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let saved = run_command(&app, "insert remember the milk").await;
    assert!(saved.starts_with("Saved log ["), "got: {saved}");

    let listing = run_command(&app, "view").await;
    assert!(listing.contains("remember the milk"));
    assert!(listing.contains("→"));

    // Pull the id back out of the confirmation: `Saved log [<id>]`.
    let id: i64 = saved
        .trim_start_matches("Saved log [")
        .trim_end_matches(']')
        .parse()
        .unwrap();

    let deleted = run_command(&app, &format!("delete {id}")).await;
    assert_eq!(deleted, format!("Deleted log [{id}]"));

    let after = run_command(&app, "view").await;
    assert!(!after.contains("remember the milk"));
}

// ---------------------------------------------------------------------------
// Test: verb casing is normalized, content casing is not
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn insert_verb_case_insensitive_content_preserved(pool: PgPool) {
    let app = common::build_test_app(pool);

    run_command(&app, "INSERT Hello").await;
    run_command(&app, "insert Hello").await;

    let listing = run_command(&app, "VIEW").await;
    assert_eq!(listing.matches("→ Hello").count(), 2, "got: {listing}");
}

// ---------------------------------------------------------------------------
// Test: view with no rows, and idempotence without writes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_view_returns_the_informational_message(pool: PgPool) {
    let app = common::build_test_app(pool);
    assert_eq!(run_command(&app, "view").await, "No logs found.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn view_is_idempotent_without_writes(pool: PgPool) {
    let app = common::build_test_app(pool);

    run_command(&app, "insert one").await;
    run_command(&app, "insert two").await;

    let first = run_command(&app, "view").await;
    let second = run_command(&app, "view").await;
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Test: delete argument validation happens before storage
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_rejects_non_numeric_ids(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = run_command(&app, "delete abc").await;
    assert_eq!(response, "invalid ID format: \"abc\"");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_of_missing_id_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = run_command(&app, "delete 999999").await;
    assert_eq!(response, "No log found with id 999999.");
}

// ---------------------------------------------------------------------------
// Test: status and help
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn status_reports_connected_database(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = run_command(&app, "status").await;
    assert!(response.contains("Database: CONNECTED"), "got: {response}");
    assert!(response.contains("Uptime:   0h 0m"));
    assert!(response.contains("Port:     9000"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn help_lists_all_verbs(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = run_command(&app, "help").await;
    for verb in ["insert", "view", "delete", "status", "help"] {
        assert!(response.contains(verb));
    }
}

// ---------------------------------------------------------------------------
// Test: unknown input is answered in-band
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_verb_echoes_lowercased_input(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = run_command(&app, "Frobnicate").await;
    assert_eq!(
        response,
        "Unknown command: \"frobnicate\". Type \"help\" for a list of commands."
    );
}
