//! Monthly specials/promotion model.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// A persisted monthly promotion flyer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Free-form month label, e.g. `May`
    #[serde(default)]
    pub month: Option<String>,
}

impl Entity for Promotion {
    const KIND: EntityKind = EntityKind::Promotion;

    fn id(&self) -> &str {
        &self.id
    }
}
