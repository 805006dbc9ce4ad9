use serde::Serialize;

/// A person or business donating money.
/// All attribute columns are nullable in the store; `None` means the
/// value was never recorded, which is distinct from an empty string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Donor {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub business_name: Option<String>,
    pub postcode: Option<String>,
    pub house_number: Option<String>,
    pub phone: Option<String>,
}

impl Donor {
    /// Business name when present, otherwise "First Last".
    pub fn display_name(&self) -> String {
        if let Some(b) = &self.business_name
            && !b.is_empty()
        {
            return b.clone();
        }
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", first, last).trim().to_string()
    }
}

/// Partial update for a donor. `None` leaves the column untouched;
/// `Some("")` writes an empty string.
#[derive(Debug, Clone, Default)]
pub struct DonorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub business_name: Option<String>,
    pub postcode: Option<String>,
    pub house_number: Option<String>,
    pub phone: Option<String>,
}

impl DonorPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.business_name.is_none()
            && self.postcode.is_none()
            && self.house_number.is_none()
            && self.phone.is_none()
    }
}
