use crate::dtos::{DiagnosisStatus, PredictRequest, PredictionResult};
use crate::models::{DISEASE_CLASSES, HEALTHY};
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

/// `POST /predict`: decode the base64 image, run it through the classifier
/// and enrich the predicted label with its advisory record.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = request
        .image
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No image provided")))?;

    let tensor = state.preprocessor.tensor_from_base64(&payload)?;

    let raw = state
        .classifier
        .predict(&tensor)
        .await
        .map_err(AppError::from)?;

    let disease_name = DISEASE_CLASSES.get(raw.class_index).copied().ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!(
            "Classifier returned out-of-range class index {}",
            raw.class_index
        ))
    })?;

    let record = state.advisories.get(disease_name);
    let confidence = (raw.confidence as f64 * 100.0 * 100.0).round() / 100.0;

    metrics::counter!("predictions_total", "disease" => disease_name).increment(1);
    tracing::info!(disease = disease_name, confidence, "Prediction served");

    let status = if disease_name == HEALTHY {
        DiagnosisStatus::Healthy
    } else {
        DiagnosisStatus::Diseased
    };

    Ok(Json(PredictionResult {
        status,
        disease_name: disease_name.to_string(),
        stage: record.stage.to_string(),
        confidence,
        precautions: record.precautions.iter().map(|s| s.to_string()).collect(),
        recommendations: record
            .recommendations
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }))
}
