//! Catalog initialisation: schema creation, fixture seeding, run-once gate.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use paddock_core::clock::{Clock, FixedClock};
use paddock_core::filter::ListFilter;
use paddock_db::catalog::Catalog;
use paddock_db::error::{InitError, QueryError};
use paddock_db::repositories::{EventRepo, RaceCatalog, RaceRepo};
use paddock_db::DbPool;

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ))
}

async fn pool() -> DbPool {
    paddock_db::create_in_memory_pool().await.unwrap()
}

#[tokio::test]
async fn test_init_seeds_both_catalogs() {
    let pool = pool().await;
    paddock_db::health_check(&pool).await.unwrap();

    let races = RaceRepo::new(pool.clone(), clock());
    let events = EventRepo::new(pool.clone(), clock());
    tokio::try_join!(races.init(), events.init()).unwrap();

    assert!(races.is_ready());
    assert!(events.is_ready());
    assert_eq!(races.count().await.unwrap(), 100);
    assert_eq!(events.count().await.unwrap(), 100);
    assert_eq!(races.seed_report().unwrap().inserted, 100);
    assert_eq!(events.seed_report().unwrap().inserted, 100);
}

#[tokio::test]
async fn test_list_before_init_is_not_ready() {
    let races = RaceRepo::new(pool().await, clock());

    assert!(!races.is_ready());
    assert_matches!(
        races.list(&ListFilter::new()).await,
        Err(QueryError::NotReady)
    );
    assert_matches!(races.get(1).await, Err(QueryError::NotReady));
    assert_matches!(races.count().await, Err(QueryError::NotReady));
}

#[tokio::test]
async fn test_concurrent_init_runs_once() {
    let races = Arc::new(RaceRepo::new(pool().await, clock()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let races = Arc::clone(&races);
            tokio::spawn(async move { races.init().await })
        })
        .collect();

    for result in futures::future::join_all(handles).await {
        result.unwrap().unwrap();
    }

    assert_eq!(races.seed_report().unwrap().inserted, 100);
    assert_eq!(races.count().await.unwrap(), 100);
}

#[tokio::test]
async fn test_repeated_init_is_a_no_op() {
    let races = RaceRepo::new(pool().await, clock());

    races.init().await.unwrap();
    races.init().await.unwrap();

    assert_eq!(races.seed_report().unwrap().inserted, 100);
    assert_eq!(races.count().await.unwrap(), 100);
}

#[tokio::test]
async fn test_seeding_an_already_seeded_store_inserts_nothing() {
    let pool = pool().await;

    let first = RaceRepo::new(pool.clone(), clock());
    first.init().await.unwrap();

    let second = RaceRepo::new(pool.clone(), clock());
    second.init().await.unwrap();

    assert_eq!(second.seed_report().unwrap().inserted, 0);
    assert_eq!(second.count().await.unwrap(), 100);
}

#[tokio::test]
async fn test_seeded_timestamps_are_rfc3339_text() {
    let pool = pool().await;
    let races = RaceRepo::new(pool.clone(), clock());
    races.init().await.unwrap();

    let stored: String =
        sqlx::query_scalar("SELECT advertised_start_time FROM races WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();

    // Race 1 is advertised 78481s before the seed instant.
    assert_eq!(stored, "2024-05-31T14:11:59Z");
}

#[tokio::test]
async fn test_failed_seed_rolls_back_and_can_be_retried() {
    let pool = pool().await;

    sqlx::query(RaceCatalog::SCHEMA).execute(&pool).await.unwrap();
    sqlx::query(
        "CREATE TRIGGER reject_race_50 BEFORE INSERT ON races WHEN NEW.id = 50 \
         BEGIN SELECT RAISE(ABORT, 'race 50 rejected'); END",
    )
    .execute(&pool)
    .await
    .unwrap();

    let races = RaceRepo::new(pool.clone(), clock());
    assert_matches!(
        races.init().await,
        Err(InitError::Seed { entity: "race", .. })
    );
    assert!(!races.is_ready());

    // Rows 1..=49 were inserted inside the aborted transaction.
    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM races")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);

    sqlx::query("DROP TRIGGER reject_race_50")
        .execute(&pool)
        .await
        .unwrap();

    races.init().await.unwrap();
    assert_eq!(races.seed_report().unwrap().inserted, 100);
    assert_eq!(races.count().await.unwrap(), 100);
}
