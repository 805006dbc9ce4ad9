use chrono::NaiveDateTime;
use serde::Serialize;

/// A scheduled charity occasion.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub room_info: Option<String>,
    pub booking_at: Option<NaiveDateTime>, // ⇔ events.booking_at (TEXT "YYYY-MM-DD HH:MM")
    pub cost: f64,                         // non-negative, CHECK'd by the schema
}

impl Event {
    pub fn booking_str(&self) -> String {
        self.booking_at
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub room_info: Option<String>,
    pub booking_at: Option<NaiveDateTime>,
    pub cost: Option<f64>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.room_info.is_none()
            && self.booking_at.is_none()
            && self.cost.is_none()
    }
}
