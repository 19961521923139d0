use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use inference_service::config::InferenceConfig;
use inference_service::startup::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Point at a checkpoint that never exists so every test app runs the
        // mock classifier.
        std::env::set_var("MODEL_PATH", "target/test-models/absent.pth");

        let mut config = InferenceConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

/// Encode a synthetic RGB image as a base64 PNG payload.
#[allow(dead_code)]
pub fn png_image_base64(width: u32, height: u32) -> String {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode test image");
    BASE64.encode(bytes)
}
