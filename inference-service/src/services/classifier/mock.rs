//! Mock classifier used whenever no model checkpoint is available.

use super::{Classifier, ClassifierError, RawPrediction};
use crate::config::Device;
use crate::models::DISEASE_CLASSES;
use async_trait::async_trait;
use ndarray::Array4;
use rand::Rng;

/// Uniformly random predictions over the fixed label set, with confidence
/// drawn from [0.75, 0.98).
pub struct MockClassifier {
    device: Device,
}

impl MockClassifier {
    pub fn new(device: Device) -> Self {
        Self { device }
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn predict(&self, input: &Array4<f32>) -> Result<RawPrediction, ClassifierError> {
        let (batch, channels, height, width) = input.dim();
        if batch != 1 || channels != 3 || height == 0 || width == 0 {
            return Err(ClassifierError::InvalidInput(format!(
                "expected a single 3-channel NCHW tensor, got {:?}",
                input.dim()
            )));
        }

        let mut rng = rand::thread_rng();
        Ok(RawPrediction {
            class_index: rng.gen_range(0..DISEASE_CLASSES.len()),
            confidence: rng.gen_range(0.75..0.98),
        })
    }

    fn is_loaded(&self) -> bool {
        false
    }

    fn device(&self) -> Device {
        self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prediction_stays_within_label_and_confidence_bounds() {
        let classifier = MockClassifier::new(Device::Cpu);
        let input = Array4::<f32>::zeros((1, 3, 224, 224));

        for _ in 0..32 {
            let raw = classifier.predict(&input).await.unwrap();
            assert!(raw.class_index < DISEASE_CLASSES.len());
            assert!((0.75..0.98).contains(&raw.confidence));
        }
    }

    #[tokio::test]
    async fn rejects_malformed_tensors() {
        let classifier = MockClassifier::new(Device::Cpu);
        let input = Array4::<f32>::zeros((1, 1, 224, 224));
        assert!(matches!(
            classifier.predict(&input).await,
            Err(ClassifierError::InvalidInput(_))
        ));
    }

    #[test]
    fn never_reports_weights_as_loaded() {
        assert!(!MockClassifier::new(Device::Cuda).is_loaded());
    }
}
