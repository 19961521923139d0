pub mod classifier;
pub mod metrics;
pub mod preprocess;

pub use classifier::{Classifier, ClassifierError, MockClassifier, RawPrediction, VitClassifier};
pub use metrics::{get_metrics, init_metrics};
pub use preprocess::ImagePreprocessor;
