use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub specialty: String,
    #[serde(default)]
    pub available_times: Vec<String>,
}

/// Payload for `POST /doctor/register/{token}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialty: String,
    pub available_times: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    pub name: Option<String>,
    pub time: Option<String>,
    pub specialty: Option<String>,
}

impl DoctorFilter {
    /// Builds a filter from raw input values, treating blank input as no criterion.
    pub fn from_inputs(name: &str, time: &str, specialty: &str) -> Self {
        Self {
            name: non_blank(name),
            time: non_blank(time),
            specialty: non_blank(specialty),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.time.is_none() && self.specialty.is_none()
    }

    /// Path segments in backend order, `null` standing in for an absent criterion.
    pub fn segments(&self) -> [&str; 3] {
        [
            self.name.as_deref().unwrap_or("null"),
            self.time.as_deref().unwrap_or("null"),
            self.specialty.as_deref().unwrap_or("null"),
        ]
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
