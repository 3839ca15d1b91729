//! Transfer objects exchanged by the `/freights` endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::freight::{Freight, NewFreight, UpdateFreight};
use crate::domain::properties::Properties;
use crate::domain::types::{ClientName, FreightStatus, TypeConstraintError};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Boundary representation of a freight. `id` is ignored on input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreightDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub client_name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub status: String,
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl From<Freight> for FreightDto {
    fn from(freight: Freight) -> Self {
        Self {
            id: Some(freight.id.get()),
            client_name: freight.client_name.into_inner(),
            status: freight.status.into_inner(),
            properties: Some(freight.properties),
        }
    }
}

impl TryFrom<&FreightDto> for NewFreight {
    type Error = TypeConstraintError;

    fn try_from(dto: &FreightDto) -> Result<Self, Self::Error> {
        Ok(NewFreight::new(
            ClientName::new(dto.client_name.as_str())?,
            FreightStatus::new(dto.status.as_str())?,
            dto.properties.clone().unwrap_or_default(),
        ))
    }
}

impl TryFrom<&FreightDto> for UpdateFreight {
    type Error = TypeConstraintError;

    fn try_from(dto: &FreightDto) -> Result<Self, Self::Error> {
        Ok(UpdateFreight::new(
            ClientName::new(dto.client_name.as_str())?,
            FreightStatus::new(dto.status.as_str())?,
            dto.properties.clone().unwrap_or_default(),
        ))
    }
}

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

/// Query parameters accepted by `GET /freights`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FreightsQuery {
    /// Zero-based page index.
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub property_key: Option<String>,
    pub property_value: Option<String>,
}

impl Default for FreightsQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_ITEMS_PER_PAGE,
            search_term: None,
            status: None,
            property_key: None,
            property_value: None,
        }
    }
}
