//! Read operations for the `permit_offices` table.

use permitdb_core::OfficeQuery;
use sqlx::PgPool;

use super::types::PermitOfficeRow;
use super::OFFICE_COLUMNS;

/// Escape `LIKE` wildcards so user input only ever matches literally.
fn like_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Active offices in `query.state` whose city and county contain the given
/// fragments, case-insensitively.
///
/// Results are ordered by `jurisdiction_type`, then `city`, and capped at
/// `query.limit` rows.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn search_permit_offices(
    pool: &PgPool,
    query: &OfficeQuery,
) -> Result<Vec<PermitOfficeRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {OFFICE_COLUMNS} \
         FROM permit_offices \
         WHERE active = TRUE \
           AND state = $1 \
           AND ($2::TEXT IS NULL OR city ILIKE $2) \
           AND ($3::TEXT IS NULL OR county ILIKE $3) \
         ORDER BY jurisdiction_type ASC, city ASC \
         LIMIT $4"
    );

    sqlx::query_as::<_, PermitOfficeRow>(&sql)
        .bind(&query.state)
        .bind(query.city.as_deref().map(like_pattern))
        .bind(query.county.as_deref().map(like_pattern))
        .bind(i64::try_from(query.limit).unwrap_or(i64::MAX))
        .fetch_all(pool)
        .await
}
