use serde::{Deserialize, Serialize};

use crate::domain::properties::Properties;
use crate::domain::types::{ClientName, FreightId, FreightStatus};

/// A persisted freight record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Freight {
    pub id: FreightId,
    pub client_name: ClientName,
    pub status: FreightStatus,
    pub properties: Properties,
}

/// Data required to persist a new freight. The identity is assigned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewFreight {
    pub client_name: ClientName,
    pub status: FreightStatus,
    pub properties: Properties,
}

impl NewFreight {
    #[must_use]
    pub fn new(client_name: ClientName, status: FreightStatus, properties: Properties) -> Self {
        Self {
            client_name,
            status,
            properties,
        }
    }
}

/// Replacement values for every mutable field of a freight.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateFreight {
    pub client_name: ClientName,
    pub status: FreightStatus,
    pub properties: Properties,
}

impl UpdateFreight {
    #[must_use]
    pub fn new(client_name: ClientName, status: FreightStatus, properties: Properties) -> Self {
        Self {
            client_name,
            status,
            properties,
        }
    }
}
