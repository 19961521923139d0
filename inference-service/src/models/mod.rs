pub mod advisory;

pub use advisory::{AdvisoryTable, DiseaseRecord, DISEASE_CLASSES, HEALTHY};
