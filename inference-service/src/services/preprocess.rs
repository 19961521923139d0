//! Image decoding and tensor preprocessing for the ViT input contract.
//!
//! Incoming payloads are base64-encoded image files in any format the
//! `image` crate can sniff. They are resized to a fixed square and
//! normalized channel-wise with the ImageNet statistics the backbone was
//! trained with, producing an NCHW `f32` tensor.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::imageops::FilterType;
use image::DynamicImage;
use ndarray::Array4;
use service_core::error::AppError;

/// Input width and height expected by the ViT backbone.
pub const INPUT_SIZE: u32 = 224;

/// ImageNet channel means.
const MEAN: [f32; 3] = [0.485, 0.456, 0.406];
/// ImageNet channel standard deviations.
const STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Decodes base64 payloads into normalized NCHW tensors.
pub struct ImagePreprocessor {
    /// Per-channel scale (1/255 folded with 1/std).
    alpha: [f32; 3],
    /// Per-channel offset (-mean/std).
    beta: [f32; 3],
}

impl ImagePreprocessor {
    pub fn new() -> Self {
        let mut alpha = [0.0f32; 3];
        let mut beta = [0.0f32; 3];
        for c in 0..3 {
            alpha[c] = (1.0 / 255.0) / STD[c];
            beta[c] = -MEAN[c] / STD[c];
        }
        Self { alpha, beta }
    }

    /// Decode a base64 payload into a `(1, 3, 224, 224)` tensor.
    pub fn tensor_from_base64(&self, payload: &str) -> Result<Array4<f32>, AppError> {
        let bytes = BASE64.decode(payload).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Invalid base64 image data: {}", e))
        })?;
        self.tensor_from_bytes(&bytes)
    }

    /// Decode raw image bytes into a `(1, 3, 224, 224)` tensor.
    pub fn tensor_from_bytes(&self, bytes: &[u8]) -> Result<Array4<f32>, AppError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to decode image: {}", e)))?;
        Ok(self.normalize(&img))
    }

    fn normalize(&self, img: &DynamicImage) -> Array4<f32> {
        let resized = img
            .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle)
            .to_rgb8();

        let mut tensor = Array4::<f32>::zeros((1, 3, INPUT_SIZE as usize, INPUT_SIZE as usize));
        for (x, y, pixel) in resized.enumerate_pixels() {
            for c in 0..3 {
                tensor[[0, c, y as usize, x as usize]] =
                    pixel[c] as f32 * self.alpha[c] + self.beta[c];
            }
        }
        tensor
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}
