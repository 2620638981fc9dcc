use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::trend::{NewTrendSubmission, TrendStatus, TrendSubmission};
use crate::domain::types::{SpotterId, TrendId};
use crate::domain::validation::{NewTrendValidation, TrendValidation};
use crate::pagination::Pagination;

pub mod errors;
pub mod trend;
pub mod validation;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching trend submissions.
#[derive(Debug, Clone, Default)]
pub struct TrendListQuery {
    /// Restrict to a category bucket.
    pub category: Option<Category>,
    /// Restrict to a lifecycle status.
    pub status: Option<TrendStatus>,
    /// Restrict to submissions by one spotter.
    pub spotter_id: Option<SpotterId>,
    /// Substring search over title and description.
    pub search: Option<String>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl TrendListQuery {
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
    pub fn status(mut self, status: TrendStatus) -> Self {
        self.status = Some(status);
        self
    }
    pub fn spotter(mut self, spotter_id: SpotterId) -> Self {
        self.spotter_id = Some(spotter_id);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for trend submissions.
pub trait TrendReader {
    /// List trend submissions matching the supplied query parameters.
    fn list_trends(&self, query: TrendListQuery) -> RepositoryResult<(usize, Vec<TrendSubmission>)>;
    /// Retrieve a trend submission by its identifier.
    fn get_trend_by_id(&self, id: TrendId) -> RepositoryResult<Option<TrendSubmission>>;
}

/// Write operations for trend submissions.
pub trait TrendWriter {
    /// Persist a new trend submission and return the stored record.
    fn create_trend(&self, trend: &NewTrendSubmission) -> RepositoryResult<TrendSubmission>;
    /// Set the lifecycle status of a trend submission.
    fn set_trend_status(&self, id: TrendId, status: TrendStatus) -> RepositoryResult<usize>;
}

/// Read-only operations for validation votes.
pub trait ValidationReader {
    /// List votes recorded for a trend, oldest first.
    fn list_validations_for_trend(
        &self,
        trend_id: TrendId,
    ) -> RepositoryResult<Vec<TrendValidation>>;
}

/// Write operations for validation votes.
pub trait ValidationWriter {
    /// Record a vote and bump the trend's counters in one transaction.
    ///
    /// Returns the trend with updated counters. A second vote by the same
    /// validator surfaces as [`RepositoryError::Duplicate`].
    fn create_validation(&self, validation: &NewTrendValidation)
    -> RepositoryResult<TrendSubmission>;
}
