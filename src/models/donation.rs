use chrono::NaiveDate;
use serde::Serialize;

/// A monetary contribution tied to one donor, one event and one volunteer.
#[derive(Debug, Clone, Serialize)]
pub struct Donation {
    pub id: i64,
    pub amount: f64,
    pub date: NaiveDate, // ⇔ donations.date (TEXT "YYYY-MM-DD")
    pub gift_aid: bool,  // ⇔ donations.gift_aid (INTEGER 0/1)
    pub notes: Option<String>,
    pub donor_id: i64,
    pub event_id: i64,
    pub volunteer_id: i64,
}

impl Donation {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DonationPatch {
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub gift_aid: Option<bool>,
    pub notes: Option<String>,
}

impl DonationPatch {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.gift_aid.is_none()
            && self.notes.is_none()
    }
}
