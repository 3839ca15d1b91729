//! Repository implementation for freight records.

use diesel::prelude::*;

use crate::{
    domain::{
        freight::{Freight, NewFreight, UpdateFreight},
        types::FreightId,
    },
    models::freight::{
        Freight as DbFreight, NewFreight as DbNewFreight, UpdateFreight as DbUpdateFreight,
    },
    repository::{
        DieselRepository, FreightListQuery, FreightReader, FreightWriter,
        errors::{RepositoryError, RepositoryResult},
        filter::freight_predicate,
    },
    schema::freights,
};

fn to_domain(db_freights: Vec<DbFreight>) -> RepositoryResult<Vec<Freight>> {
    db_freights
        .into_iter()
        .map(|freight| Freight::try_from(freight).map_err(RepositoryError::from))
        .collect()
}

impl FreightReader for DieselRepository {
    fn get_freight_by_id(&self, id: FreightId) -> RepositoryResult<Option<Freight>> {
        let mut conn = self.conn()?;

        let db_freight = freights::table
            .find(id.get())
            .select(DbFreight::as_select())
            .first::<DbFreight>(&mut conn)
            .optional()?;

        match db_freight {
            Some(db_freight) => Ok(Some(
                Freight::try_from(db_freight).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_freights(&self, query: FreightListQuery) -> RepositoryResult<(usize, Vec<Freight>)> {
        let mut conn = self.conn()?;

        let (total, db_freights) = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let total = freights::table
                .filter(freight_predicate(&query.filter))
                .count()
                .get_result::<i64>(conn)?;

            let mut items = freights::table
                .filter(freight_predicate(&query.filter))
                .select(DbFreight::as_select())
                .order(freights::id.asc())
                .into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(pagination) = &query.pagination {
                // An offset SQLite cannot represent lies past every row.
                let Ok(offset) = i64::try_from(pagination.offset()) else {
                    return Ok((total, Vec::new()));
                };
                let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
                items = items.offset(offset).limit(limit);
            }

            let db_freights = items.load::<DbFreight>(conn)?;
            Ok((total, db_freights))
        })?;

        Ok((total as usize, to_domain(db_freights)?))
    }

    fn list_freight_statuses(&self) -> RepositoryResult<Vec<String>> {
        let mut conn = self.conn()?;

        let statuses = freights::table
            .select(freights::status)
            .filter(freights::status.ne(""))
            .distinct()
            .order(freights::status.asc())
            .load::<String>(&mut conn)?;

        Ok(statuses
            .into_iter()
            .filter(|status| !status.trim().is_empty())
            .collect())
    }
}

impl FreightWriter for DieselRepository {
    fn create_freight(&self, new_freight: &NewFreight) -> RepositoryResult<Freight> {
        let mut conn = self.conn()?;

        let db_new_freight = DbNewFreight::try_from(new_freight)?;

        let db_freight = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(freights::table)
                .values(&db_new_freight)
                .returning(DbFreight::as_returning())
                .get_result::<DbFreight>(conn)
        })?;

        Ok(Freight::try_from(db_freight)?)
    }

    fn update_freight(&self, id: FreightId, updates: &UpdateFreight) -> RepositoryResult<Freight> {
        let mut conn = self.conn()?;

        let db_updates = DbUpdateFreight::try_from(updates)?;

        let db_freight = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::update(freights::table.find(id.get()))
                .set(&db_updates)
                .returning(DbFreight::as_returning())
                .get_result::<DbFreight>(conn)
        })?;

        Ok(Freight::try_from(db_freight)?)
    }

    fn delete_freight(&self, id: FreightId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(freights::table.find(id.get())).execute(conn)
        })?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
