use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    entities::collection::Collection,
    repositories::document_store::{Fields, Record},
};

// ───── Declared shape ───────────────────────────────────────────────

/// Shape of a project as authored out-of-band. Reads never check stored
/// records against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDocument {
    pub title: String,
    pub slug: String,
    /// e.g. Industrial, UI, Furniture, CMF
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,
}

impl Collection for ProjectDocument {
    const NAME: &'static str = "project";
}

// ───── API Response Models ──────────────────────────────────────────

/// A stored project exactly as found, with the store identifier as `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    #[serde(flatten)]
    pub fields: Fields,
}

impl From<Record> for Project {
    fn from(record: Record) -> Self {
        let mut fields = record.fields;

        // The store identifier is the only id clients see
        fields.remove("id");
        fields.remove("_id");

        Project { id: record.id, fields }
    }
}

impl Project {
    pub fn slug(&self) -> Option<&str> {
        self.fields.get("slug").and_then(Value::as_str)
    }

    pub fn year(&self) -> Option<&Value> {
        self.fields.get("year")
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
}

impl ProjectQuery {
    /// An empty `category` means no filter.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Missing year counts as 0; a year that is not a number has no key.
fn year_key(project: &Project) -> Option<f64> {
    match project.year() {
        None => Some(0.0),
        Some(year) => year.as_f64(),
    }
}

/// Newest first. Stable, so equal years keep store order.
///
/// Returns `false` without reordering anything when some `year` is not a
/// number.
pub fn sort_by_year_desc(projects: &mut [Project]) -> bool {
    if projects.iter().any(|p| year_key(p).is_none()) {
        return false;
    }

    let key = |p: &Project| year_key(p).unwrap_or(0.0);
    projects.sort_by(|a, b| key(b).total_cmp(&key(a)));
    true
}
