use chrono::{DateTime, SecondsFormat, Utc};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use validator::Validate;

use crate::entities::collection::Collection;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMeForm {
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub subject: Option<String>,

    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

/// Contact message as written to the store. Timestamps are encoded as
/// extended JSON dates so they land in MongoDB as BSON dates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactMessageInsert {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    #[serde(serialize_with = "as_extjson_date")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "as_extjson_date")]
    pub updated_at: DateTime<Utc>,
}

fn as_extjson_date<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("$date", &at.to_rfc3339_opts(SecondsFormat::Millis, true))?;
    map.end()
}

impl Collection for ContactMessageInsert {
    const NAME: &'static str = "contactmessage";
}

impl From<ContactMeForm> for ContactMessageInsert {
    fn from(form: ContactMeForm) -> Self {
        let now = Utc::now();
        ContactMessageInsert {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactMeResponse {
    pub status: String,
    pub id: Option<String>,
}

impl ContactMeResponse {
    pub fn ok(id: Option<String>) -> Self {
        ContactMeResponse {
            status: "ok".to_string(),
            id,
        }
    }
}
