//! Live tests for permitdb-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database from the sqlx
//! test harness, so they only run when `DATABASE_URL` points at a server:
//! `cargo test -p permitdb-db -- --ignored`.

use permitdb_core::{fallback, OfficeQuery, OfficeStore};
use permitdb_db::{search_permit_offices, upsert_permit_offices, PgOfficeStore};

fn query(city: Option<&str>, county: Option<&str>, limit: usize) -> OfficeQuery {
    OfficeQuery {
        state: "GA".to_string(),
        city: city.map(str::to_string),
        county: county.map(str::to_string),
        limit,
    }
}

async fn seed(pool: &sqlx::PgPool) -> usize {
    upsert_permit_offices(pool, &fallback::offices())
        .await
        .expect("seed failed")
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn seed_is_idempotent(pool: sqlx::PgPool) {
    let first = seed(&pool).await;
    let second = seed(&pool).await;
    assert_eq!(first, second);

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM permit_offices")
        .fetch_one(&pool)
        .await
        .expect("count failed");
    assert_eq!(usize::try_from(total).unwrap(), first);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn county_filter_is_case_insensitive_substring(pool: sqlx::PgPool) {
    seed(&pool).await;

    let rows = search_permit_offices(&pool, &query(None, Some("clar"), 10))
        .await
        .expect("search failed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].county, "Clarke");
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn search_orders_by_jurisdiction_then_city_and_limits(pool: sqlx::PgPool) {
    seed(&pool).await;

    let rows = search_permit_offices(&pool, &query(None, None, 5))
        .await
        .expect("search failed");
    assert_eq!(rows.len(), 5);
    let keys: Vec<(String, String)> = rows
        .iter()
        .map(|r| (r.jurisdiction_type.clone(), r.city.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn inactive_offices_are_never_returned(pool: sqlx::PgPool) {
    seed(&pool).await;
    sqlx::query("UPDATE permit_offices SET active = FALSE WHERE city = 'Marietta'")
        .execute(&pool)
        .await
        .expect("deactivate failed");

    let rows = search_permit_offices(&pool, &query(Some("marietta"), None, 10))
        .await
        .expect("search failed");
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn like_wildcards_in_filters_match_literally(pool: sqlx::PgPool) {
    seed(&pool).await;

    let rows = search_permit_offices(&pool, &query(Some("%"), None, 10))
        .await
        .expect("search failed");
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn store_converts_rows_to_offices(pool: sqlx::PgPool) {
    seed(&pool).await;

    let store = PgOfficeStore::new(pool);
    let offices = store
        .search_offices(&query(Some("atlanta"), None, 10))
        .await
        .expect("store search failed");
    assert_eq!(offices.len(), 2);
    assert!(offices.iter().all(|o| o.active && o.state == "GA"));
}
