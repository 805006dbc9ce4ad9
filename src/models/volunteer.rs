use serde::Serialize;

/// A person assisting with at most one event.
#[derive(Debug, Clone, Serialize)]
pub struct Volunteer {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
    pub event_id: Option<i64>, // nullable FK → events.id
}

#[derive(Debug, Clone, Default)]
pub struct VolunteerPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub event_id: Option<i64>,
}

impl VolunteerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none() && self.event_id.is_none()
    }
}
