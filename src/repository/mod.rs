use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        freight::{Freight, NewFreight, UpdateFreight},
        types::FreightId,
    },
    repository::{errors::RepositoryResult, filter::FreightFilter},
};

pub mod errors;
pub mod filter;
pub mod freight;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Zero-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Saturates at `usize::MAX` instead of overflowing.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreightListQuery {
    pub filter: FreightFilter,
    pub pagination: Option<Pagination>,
}

impl FreightListQuery {
    pub fn new(filter: FreightFilter) -> Self {
        Self {
            filter,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait FreightReader {
    fn get_freight_by_id(&self, id: FreightId) -> RepositoryResult<Option<Freight>>;
    /// Returns the total number of matching rows and the requested page of them.
    fn list_freights(&self, query: FreightListQuery) -> RepositoryResult<(usize, Vec<Freight>)>;
    fn list_freight_statuses(&self) -> RepositoryResult<Vec<String>>;
}

pub trait FreightWriter {
    fn create_freight(&self, new_freight: &NewFreight) -> RepositoryResult<Freight>;
    /// Fails with [`errors::RepositoryError::NotFound`] when `id` does not exist.
    fn update_freight(&self, id: FreightId, updates: &UpdateFreight) -> RepositoryResult<Freight>;
    /// Fails with [`errors::RepositoryError::NotFound`] when `id` does not exist.
    fn delete_freight(&self, id: FreightId) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
