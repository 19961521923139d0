//! Classifier abstractions and implementations.
//!
//! This module provides a trait-based abstraction over the diagnosis
//! backend, allowing easy swapping between the ViT model and the mock.

pub mod mock;
pub mod vit;

pub use mock::MockClassifier;
pub use vit::VitClassifier;

use crate::config::Device;
use async_trait::async_trait;
use ndarray::Array4;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for classifier operations.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Model not loaded: {0}")]
    NotLoaded(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Inference error: {0}")]
    Inference(String),
}

impl From<ClassifierError> for AppError {
    fn from(err: ClassifierError) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// Raw classifier output before advisory enrichment.
#[derive(Debug, Clone, Copy)]
pub struct RawPrediction {
    /// Index into [`crate::models::DISEASE_CLASSES`].
    pub class_index: usize,
    /// Softmax confidence in [0, 1].
    pub confidence: f32,
}

/// Trait for diagnosis backends.
///
/// Implementations must be safe to share across request handlers; the
/// selected implementation is held in an `Arc` and never mutated after
/// startup.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Run the classifier over a normalized NCHW image tensor.
    async fn predict(&self, input: &Array4<f32>) -> Result<RawPrediction, ClassifierError>;

    /// Whether real model weights back this classifier.
    fn is_loaded(&self) -> bool;

    /// Device the classifier runs on.
    fn device(&self) -> Device;
}
