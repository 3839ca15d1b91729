//! Freight operations exposed to the HTTP layer.

use validator::Validate;

use crate::domain::freight::{NewFreight, UpdateFreight};
use crate::domain::types::FreightId;
use crate::dto::freight::{FreightDto, FreightsQuery};
use crate::pagination::Page;
use crate::repository::errors::RepositoryError;
use crate::repository::filter::FreightFilter;
use crate::repository::{FreightListQuery, FreightReader, FreightWriter};
use crate::services::{ServiceError, ServiceResult};

/// Identifiers that can never exist in the store are reported as missing.
fn parse_freight_id(id: i32) -> ServiceResult<FreightId> {
    FreightId::new(id).map_err(|_| ServiceError::NotFound(id))
}

fn not_found_or(id: FreightId) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |err| match err {
        RepositoryError::NotFound => ServiceError::NotFound(id.get()),
        other => ServiceError::Repository(other),
    }
}

/// Returns one page of freights matching the optional filters.
pub fn list_freights<R>(repo: &R, params: FreightsQuery) -> ServiceResult<Page<FreightDto>>
where
    R: FreightReader + ?Sized,
{
    if params.size == 0 {
        return Err(ServiceError::Validation(
            "page size must be greater than zero".to_string(),
        ));
    }

    let filter = FreightFilter::new(
        params.search_term,
        params.status,
        params.property_key,
        params.property_value,
    );
    let query = FreightListQuery::new(filter).paginate(params.page, params.size);

    let (total, freights) = repo.list_freights(query).map_err(|err| {
        log::error!("Failed to list freights: {err}");
        ServiceError::from(err)
    })?;

    Ok(Page::new(freights, params.page, params.size, total).map(FreightDto::from))
}

/// Fetches a single freight by its identifier.
pub fn get_freight<R>(repo: &R, id: i32) -> ServiceResult<FreightDto>
where
    R: FreightReader + ?Sized,
{
    let freight_id = parse_freight_id(id)?;

    repo.get_freight_by_id(freight_id)
        .map_err(ServiceError::from)?
        .map(FreightDto::from)
        .ok_or(ServiceError::NotFound(id))
}

/// Validates the payload and persists a new freight. Any supplied id is ignored.
pub fn create_freight<R>(repo: &R, dto: &FreightDto) -> ServiceResult<FreightDto>
where
    R: FreightWriter + ?Sized,
{
    dto.validate()?;
    let new_freight = NewFreight::try_from(dto)?;

    let freight = repo.create_freight(&new_freight).map_err(|err| {
        log::error!("Failed to create freight: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Created freight {}", freight.id);
    Ok(freight.into())
}

/// Replaces client name, status and properties of an existing freight.
pub fn update_freight<R>(repo: &R, id: i32, dto: &FreightDto) -> ServiceResult<FreightDto>
where
    R: FreightWriter + ?Sized,
{
    dto.validate()?;
    let updates = UpdateFreight::try_from(dto)?;
    let freight_id = parse_freight_id(id)?;

    let freight = repo
        .update_freight(freight_id, &updates)
        .map_err(not_found_or(freight_id))?;

    Ok(freight.into())
}

/// Permanently removes a freight.
pub fn delete_freight<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: FreightWriter + ?Sized,
{
    let freight_id = parse_freight_id(id)?;

    repo.delete_freight(freight_id)
        .map_err(not_found_or(freight_id))?;

    log::info!("Deleted freight {freight_id}");
    Ok(())
}

/// Lists the distinct statuses currently in use, sorted ascending.
pub fn list_statuses<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: FreightReader + ?Sized,
{
    repo.list_freight_statuses().map_err(ServiceError::from)
}
