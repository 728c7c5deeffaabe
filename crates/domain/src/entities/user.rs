use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, UserId};
use crate::schema::{Field, FieldKind, Schema, SchemaDecode};

/// The signed-in user as seen by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Email address confirmed
    pub confirmed: bool,
    pub onboarded: bool,
    #[serde(default)]
    pub selected_category_ids: Vec<CategoryId>,
}

pub const USER_PROFILE_SCHEMA: Schema = Schema {
    name: "UserProfile",
    fields: &[
        Field::required("id", FieldKind::String),
        Field::required("email", FieldKind::String),
        Field::optional("displayName", FieldKind::String),
        Field::required("confirmed", FieldKind::Boolean),
        Field::required("onboarded", FieldKind::Boolean),
        Field::optional("selectedCategoryIds", FieldKind::ArrayOf(&FieldKind::String)),
    ],
};

impl SchemaDecode for UserProfile {
    const SCHEMA: &'static Schema = &USER_PROFILE_SCHEMA;
}
