//! Diesel models for storing freight records.

use diesel::prelude::*;

use crate::domain::{
    freight::{
        Freight as DomainFreight, NewFreight as DomainNewFreight,
        UpdateFreight as DomainUpdateFreight,
    },
    properties::Properties,
    types::{ClientName, FreightId, FreightStatus, TypeConstraintError},
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::freights)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::freight::Freight`].
pub struct Freight {
    pub id: i32,
    pub client_name: String,
    pub status: String,
    pub properties: String, // JSON text
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::freights)]
/// Insertable form of [`Freight`].
pub struct NewFreight<'a> {
    pub client_name: &'a str,
    pub status: &'a str,
    pub properties: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::freights)]
/// Full replacement of the mutable columns of a [`Freight`] record.
pub struct UpdateFreight<'a> {
    pub client_name: &'a str,
    pub status: &'a str,
    pub properties: String,
}

fn properties_to_json(properties: &Properties) -> Result<String, TypeConstraintError> {
    serde_json::to_string(properties)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("properties: {e}")))
}

impl TryFrom<Freight> for DomainFreight {
    type Error = TypeConstraintError;

    fn try_from(freight: Freight) -> Result<Self, Self::Error> {
        let properties: Properties = serde_json::from_str(&freight.properties)
            .map_err(|e| TypeConstraintError::InvalidValue(format!("properties: {e}")))?;

        Ok(Self {
            id: FreightId::new(freight.id)?,
            client_name: ClientName::new(freight.client_name)?,
            status: FreightStatus::new(freight.status)?,
            properties,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewFreight> for NewFreight<'a> {
    type Error = TypeConstraintError;

    fn try_from(freight: &'a DomainNewFreight) -> Result<Self, Self::Error> {
        Ok(Self {
            client_name: freight.client_name.as_str(),
            status: freight.status.as_str(),
            properties: properties_to_json(&freight.properties)?,
        })
    }
}

impl<'a> TryFrom<&'a DomainUpdateFreight> for UpdateFreight<'a> {
    type Error = TypeConstraintError;

    fn try_from(freight: &'a DomainUpdateFreight) -> Result<Self, Self::Error> {
        Ok(Self {
            client_name: freight.client_name.as_str(),
            status: freight.status.as_str(),
            properties: properties_to_json(&freight.properties)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::properties::PropertyValue;

    fn sample_properties() -> Properties {
        let mut properties = Properties::new();
        properties.insert("color".to_string(), PropertyValue::from("red"));
        properties
    }

    #[test]
    fn from_domain_new_serializes_properties() {
        let domain = DomainNewFreight::new(
            ClientName::new("Acme").unwrap(),
            FreightStatus::new("NEW").unwrap(),
            sample_properties(),
        );
        let new: NewFreight = (&domain).try_into().unwrap();
        assert_eq!(new.client_name, "Acme");
        assert_eq!(new.status, "NEW");
        assert_eq!(new.properties, r#"{"color":"red"}"#);
    }

    #[test]
    fn from_domain_update_copies_every_field() {
        let domain = DomainUpdateFreight::new(
            ClientName::new("Globex").unwrap(),
            FreightStatus::new("DELIVERED").unwrap(),
            Properties::new(),
        );
        let update: UpdateFreight = (&domain).try_into().unwrap();
        assert_eq!(update.client_name, "Globex");
        assert_eq!(update.status, "DELIVERED");
        assert_eq!(update.properties, "{}");
    }

    #[test]
    fn freight_into_domain() {
        let db_freight = Freight {
            id: 3,
            client_name: "Acme".to_string(),
            status: "PENDING".to_string(),
            properties: r#"{"color":"red"}"#.to_string(),
        };
        let domain = DomainFreight::try_from(db_freight).unwrap();
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.client_name.as_str(), "Acme");
        assert_eq!(domain.status.as_str(), "PENDING");
        assert_eq!(domain.properties, sample_properties());
    }

    #[test]
    fn corrupt_properties_are_rejected() {
        let db_freight = Freight {
            id: 1,
            client_name: "Acme".to_string(),
            status: "PENDING".to_string(),
            properties: "not json".to_string(),
        };
        assert!(matches!(
            DomainFreight::try_from(db_freight),
            Err(TypeConstraintError::InvalidValue(_))
        ));
    }
}
