use sqlx::PgPool;

/// Store handle injected into each request handler. Construction is cheap;
/// the pool inside is the process-wide connection pool built at ignite.
#[derive(Clone)]
pub struct PostgresRepository {
    pub pool: PgPool,
}
