use serde::{Deserialize, Serialize};

/// Category of care a clinic provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClinicType {
    Dialysis,
    Thalassemia,
    #[serde(rename = "Multi-Specialty")]
    MultiSpecialty,
}

impl ClinicType {
    /// Human-readable label, the form search queries are matched against.
    pub fn label(&self) -> &'static str {
        match self {
            ClinicType::Dialysis => "Dialysis",
            ClinicType::Thalassemia => "Thalassemia",
            ClinicType::MultiSpecialty => "Multi-Specialty",
        }
    }
}

impl std::fmt::Display for ClinicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A care-providing facility listed on the platform.
///
/// The only mutable field is `verified`: it is set (never unset) through an
/// Admin-gated operation on the booking state, everything else is fixed at
/// listing time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clinic {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "type")]
    pub clinic_type: ClinicType,
    pub rating: f32,
    pub review_count: u32,
    /// Price per session in INR.
    pub price_per_session: u32,
    pub description: String,
    pub amenities: Vec<String>,
    pub image_url: String,
    pub verified: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A patient review of a clinic. Read-only in this scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub clinic_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}
