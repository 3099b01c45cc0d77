//! SparseTableBuilder — orchestrates source read, materialization, and
//! output table lifecycle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use stateline_core::config::MaterializeConfig;
use stateline_core::errors::{BuildError, StateResult};
use stateline_core::models::{SourceMode, SparseRow};
use stateline_storage::identifiers::{validate_identifier, validate_label};
use stateline_storage::queries::{event_ops, interval_ops, sparse_ops};
use stateline_storage::ConnectionPool;

use crate::builder;

/// Materializes the sparse state table for one run.
///
/// The storage connection is an explicit constructor parameter — no
/// ambient connection state. Each call to [`generate_sparse_table`]
/// rebuilds the named output table from scratch: read source, compute,
/// write rows, build indexes. The previous table of the same name is
/// destroyed; callers must not run two builds against the same run id
/// concurrently.
///
/// [`generate_sparse_table`]: SparseTableBuilder::generate_sparse_table
pub struct SparseTableBuilder {
    pool: Arc<ConnectionPool>,
    run_id: String,
    source: SourceMode,
    config: MaterializeConfig,
}

impl SparseTableBuilder {
    /// Create a builder for one run. The run id ends up in the output
    /// table name, so it must pass the identifier allow-list.
    pub fn new(pool: Arc<ConnectionPool>, run_id: &str, source: SourceMode) -> StateResult<Self> {
        validate_identifier(run_id)?;
        Ok(Self {
            pool,
            run_id: run_id.to_string(),
            source,
            config: MaterializeConfig::default(),
        })
    }

    /// Override the default materialization config.
    pub fn with_config(mut self, config: MaterializeConfig) -> StateResult<Self> {
        validate_identifier(&config.table_prefix)?;
        self.config = config;
        Ok(self)
    }

    /// Name of the derived output table for this run. Downstream
    /// consumers query it read-only, filtered by `as_of_date` and
    /// joined on `entity_id`.
    pub fn sparse_table_name(&self) -> String {
        format!("{}_{}", self.config.table_prefix, self.run_id)
    }

    /// Rebuild the sparse state table for the given as-of dates.
    ///
    /// Success means the output table exists, is fully populated, and
    /// carries indexes on `entity_id` and `as_of_date`. Precondition
    /// failures (empty source, empty as-of list, malformed intervals)
    /// abort before any table is created or destroyed; storage failures
    /// mid-write leave the table unusable and the build must be rerun.
    pub fn generate_sparse_table(&self, as_of_dates: &[DateTime<Utc>]) -> StateResult<()> {
        if as_of_dates.is_empty() {
            return Err(BuildError::NoAsOfDates.into());
        }

        let (labels, rows) = match &self.source {
            SourceMode::Dense { table } => self.materialize_dense(table, as_of_dates)?,
            SourceMode::Events { table } => self.materialize_events(table, as_of_dates)?,
        };

        let table = self.sparse_table_name();
        let written = self.pool.with_writer(|conn| {
            sparse_ops::create_sparse_table(conn, &table, &labels)?;
            let written = sparse_ops::insert_rows(conn, &table, &labels, &rows)?;
            sparse_ops::create_indexes(conn, &table)?;
            Ok(written)
        })?;

        info!(
            table = %table,
            rows = written,
            labels = labels.len(),
            as_of_dates = as_of_dates.len(),
            "sparse state table rebuilt"
        );
        Ok(())
    }

    fn materialize_dense(
        &self,
        source_table: &str,
        as_of_dates: &[DateTime<Utc>],
    ) -> StateResult<(Vec<String>, Vec<SparseRow>)> {
        let facts = self
            .pool
            .with_reader(|conn| interval_ops::load_intervals(conn, source_table))?;
        if facts.is_empty() {
            return Err(BuildError::EmptySource {
                table: source_table.to_string(),
            }
            .into());
        }
        builder::dense::validate_intervals(&facts)?;

        // Phase 1: discover the output schema.
        let labels = self
            .pool
            .with_reader(|conn| interval_ops::distinct_state_labels(conn, source_table))?;
        for label in &labels {
            validate_label(label)?;
        }
        debug!(facts = facts.len(), labels = ?labels, "dense source loaded");

        let rows = builder::dense::materialize(&facts, &labels, as_of_dates);
        Ok((labels, rows))
    }

    fn materialize_events(
        &self,
        source_table: &str,
        as_of_dates: &[DateTime<Utc>],
    ) -> StateResult<(Vec<String>, Vec<SparseRow>)> {
        let events = self
            .pool
            .with_reader(|conn| event_ops::load_events(conn, source_table))?;
        if events.is_empty() {
            return Err(BuildError::EmptySource {
                table: source_table.to_string(),
            }
            .into());
        }
        debug!(events = events.len(), "events source loaded");

        let rows = builder::events::materialize(&events, as_of_dates);
        Ok((vec!["active".to_string()], rows))
    }
}
