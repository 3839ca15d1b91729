//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::freight::{Freight, NewFreight, UpdateFreight};
use crate::domain::types::FreightId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{FreightListQuery, FreightReader, FreightWriter};

mock! {
    pub Repository {}

    impl FreightReader for Repository {
        fn get_freight_by_id(&self, id: FreightId) -> RepositoryResult<Option<Freight>>;
        fn list_freights(&self, query: FreightListQuery) -> RepositoryResult<(usize, Vec<Freight>)>;
        fn list_freight_statuses(&self) -> RepositoryResult<Vec<String>>;
    }

    impl FreightWriter for Repository {
        fn create_freight(&self, new_freight: &NewFreight) -> RepositoryResult<Freight>;
        fn update_freight(
            &self,
            id: FreightId,
            updates: &UpdateFreight,
        ) -> RepositoryResult<Freight>;
        fn delete_freight(&self, id: FreightId) -> RepositoryResult<()>;
    }
}
