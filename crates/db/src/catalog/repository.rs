//! Run-once initialisation plus `list` / `get` for any [`Catalog`].

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use paddock_core::clock::Clock;
use paddock_core::filter::ListFilter;
use paddock_core::types::DbId;
use tokio::sync::OnceCell;

use super::materialize::materialize;
use super::query::{build_list_query, BindValue, BuiltQuery};
use super::Catalog;
use crate::error::{InitError, QueryError};
use crate::DbPool;

/// Store round-trips are abandoned after this long unless configured otherwise.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the single seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Rows written by this pass; zero when the store was already seeded.
    pub inserted: u64,
}

/// Read-only repository over one catalog table.
///
/// `init` must complete before `list` / `get` are served; until then they
/// fail fast with [`QueryError::NotReady`].
pub struct CatalogRepo<C: Catalog> {
    pool: DbPool,
    clock: Arc<dyn Clock>,
    query_timeout: Duration,
    ready: OnceCell<SeedReport>,
    _catalog: PhantomData<fn() -> C>,
}

impl<C: Catalog> CatalogRepo<C> {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self {
            pool,
            clock,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            ready: OnceCell::new(),
            _catalog: PhantomData,
        }
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    pub fn is_ready(&self) -> bool {
        self.ready.initialized()
    }

    /// Report of the seeding pass, once `init` has succeeded.
    pub fn seed_report(&self) -> Option<SeedReport> {
        self.ready.get().copied()
    }

    /// Create the schema and seed fixtures, exactly once.
    ///
    /// Concurrent callers wait on the same pass and all see its result. A
    /// failed pass leaves the repository uninitialised.
    pub async fn init(&self) -> Result<(), InitError> {
        self.ready.get_or_try_init(|| self.bootstrap()).await?;
        Ok(())
    }

    async fn bootstrap(&self) -> Result<SeedReport, InitError> {
        let entity = C::ENTITY;

        let schema_err = |source| InitError::Schema { entity, source };
        let seed_err = |source| InitError::Seed { entity, source };

        // Schema and fixtures commit together or not at all.
        let mut tx = self.pool.begin().await.map_err(schema_err)?;
        sqlx::query(C::SCHEMA)
            .execute(&mut *tx)
            .await
            .map_err(schema_err)?;

        let inserted = C::seed(&mut *tx, self.clock.now())
            .await
            .map_err(seed_err)?;
        tx.commit().await.map_err(seed_err)?;

        tracing::info!(entity, inserted, "Catalog initialised");
        Ok(SeedReport { inserted })
    }

    /// Records matching `filter`, in store order unless a sort is requested.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<C::Record>, QueryError> {
        let built = build_list_query(&C::SHAPE, filter, None)?;
        self.fetch(built).await
    }

    /// Single record by id, regardless of visibility.
    pub async fn get(&self, id: DbId) -> Result<Option<C::Record>, QueryError> {
        let built = build_list_query(&C::SHAPE, &ListFilter::by_id(id), Some(1))?;
        Ok(self.fetch(built).await?.into_iter().next())
    }

    /// Number of stored rows.
    pub async fn count(&self) -> Result<i64, QueryError> {
        self.ensure_ready()?;

        let sql = format!("SELECT COUNT(*) FROM {}", C::SHAPE.table);
        let query = sqlx::query_scalar::<_, i64>(&sql).fetch_one(&self.pool);

        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(QueryError::Execution),
            Err(_) => Err(QueryError::Timeout(self.query_timeout)),
        }
    }

    fn ensure_ready(&self) -> Result<(), QueryError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(QueryError::NotReady)
        }
    }

    async fn fetch(&self, built: BuiltQuery) -> Result<Vec<C::Record>, QueryError> {
        self.ensure_ready()?;

        let mut query = sqlx::query(&built.sql);
        for value in &built.binds {
            query = match value {
                BindValue::BigInt(v) => query.bind(*v),
                BindValue::Bool(v) => query.bind(*v),
            };
        }

        tracing::debug!(entity = C::ENTITY, sql = %built.sql, "Executing catalog query");

        let rows = match tokio::time::timeout(self.query_timeout, query.fetch_all(&self.pool)).await
        {
            Ok(Ok(rows)) => rows,
            Ok(Err(err)) => {
                tracing::error!(entity = C::ENTITY, error = %err, "Catalog query failed");
                return Err(QueryError::Execution(err));
            }
            Err(_) => {
                tracing::warn!(
                    entity = C::ENTITY,
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    "Catalog query timed out"
                );
                return Err(QueryError::Timeout(self.query_timeout));
            }
        };

        let now = self.clock.now();
        materialize::<C>(&rows, now).inspect_err(|err| {
            if let QueryError::Scan { row_index, source } = err {
                tracing::error!(
                    entity = C::ENTITY,
                    row_index,
                    error = %source,
                    "Failed to decode catalog row"
                );
            }
        })
    }
}
