use serde::{Deserialize, Serialize};

/// Request body for `POST /predict`.
///
/// The field is optional so a missing `image` maps to the endpoint's 400
/// contract rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub image: Option<String>,
}

/// Overall verdict derived from the predicted label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosisStatus {
    Healthy,
    Diseased,
}

/// Response body for `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictionResult {
    pub status: DiagnosisStatus,
    pub disease_name: String,
    pub stage: String,
    /// Percentage in [0, 100], rounded to 2 decimals.
    pub confidence: f64,
    pub precautions: Vec<String>,
    pub recommendations: Vec<String>,
}
