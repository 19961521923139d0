pub mod predict;

pub use predict::{DiagnosisStatus, PredictRequest, PredictionResult};
