//! ViT-backed classifier.

use super::{Classifier, ClassifierError, RawPrediction};
use crate::config::Device;
use crate::services::preprocess::INPUT_SIZE;
use async_trait::async_trait;
use ndarray::Array4;
use std::path::{Path, PathBuf};

/// Classifier backed by a trained ViT checkpoint.
///
/// Checkpoint deserialization is not wired up yet, so [`VitClassifier::load`]
/// currently never yields an instance and callers fall back to
/// [`super::MockClassifier`]. The type is kept as the injection seam for the
/// real backend.
pub struct VitClassifier {
    path: PathBuf,
    device: Device,
}

impl VitClassifier {
    /// Open a classifier backed by the checkpoint at `path`.
    pub fn load(path: &Path, device: Device) -> Result<Self, ClassifierError> {
        tracing::debug!(path = %path.display(), device = %device, "Loading ViT checkpoint");

        if !path.exists() {
            return Err(ClassifierError::NotLoaded(format!(
                "model file not found at {}",
                path.display()
            )));
        }

        // TODO: deserialize the exported ViT weights into an inference
        // session once the training pipeline settles on a checkpoint format.
        Err(ClassifierError::NotLoaded(format!(
            "checkpoint loading for {} is not implemented",
            path.display()
        )))
    }
}

#[async_trait]
impl Classifier for VitClassifier {
    async fn predict(&self, input: &Array4<f32>) -> Result<RawPrediction, ClassifierError> {
        let expected = (1, 3, INPUT_SIZE as usize, INPUT_SIZE as usize);
        if input.dim() != expected {
            return Err(ClassifierError::InvalidInput(format!(
                "expected tensor of shape {:?}, got {:?}",
                expected,
                input.dim()
            )));
        }

        Err(ClassifierError::Inference(format!(
            "no inference session for checkpoint {}",
            self.path.display()
        )))
    }

    fn is_loaded(&self) -> bool {
        true
    }

    fn device(&self) -> Device {
        self.device
    }
}
