//! Static advisory data for each diagnosable condition.

use std::collections::HashMap;

/// Disease labels in classifier output order. Index 0 is the healthy class.
pub const DISEASE_CLASSES: [&str; 4] = [
    "Healthy",
    "Foot-and-Mouth Disease",
    "Lumpy Skin Disease",
    "Mastitis",
];

pub const HEALTHY: &str = "Healthy";

/// Advisory record associated with one disease label.
#[derive(Debug, Clone)]
pub struct DiseaseRecord {
    pub name: &'static str,
    pub stage: &'static str,
    pub precautions: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

/// Immutable lookup table of advisory records, built once at startup and
/// shared read-only across request handlers.
pub struct AdvisoryTable {
    records: HashMap<&'static str, DiseaseRecord>,
}

impl AdvisoryTable {
    pub fn new() -> Self {
        let mut records = HashMap::new();

        records.insert(
            HEALTHY,
            DiseaseRecord {
                name: HEALTHY,
                stage: "N/A",
                precautions: vec![
                    "Maintain regular veterinary checkups",
                    "Ensure proper nutrition and clean water",
                    "Keep living area clean and hygienic",
                    "Monitor for any behavioral changes",
                ],
                recommendations: vec![
                    "Continue current health practices",
                    "Regular vaccination schedule",
                    "Balanced diet with supplements",
                ],
            },
        );

        records.insert(
            "Foot-and-Mouth Disease",
            DiseaseRecord {
                name: "Foot-and-Mouth Disease",
                stage: "Early/Advanced",
                precautions: vec![
                    "Isolate affected cattle immediately",
                    "Disinfect all equipment and facilities",
                    "Restrict movement of animals",
                    "Contact veterinarian urgently",
                    "Implement biosecurity measures",
                ],
                recommendations: vec![
                    "Administer prescribed medications",
                    "Provide soft, easily digestible food",
                    "Ensure adequate hydration",
                    "Monitor temperature regularly",
                    "Vaccination of healthy animals",
                ],
            },
        );

        records.insert(
            "Lumpy Skin Disease",
            DiseaseRecord {
                name: "Lumpy Skin Disease",
                stage: "Mild/Severe",
                precautions: vec![
                    "Isolate infected animals",
                    "Control insect vectors (flies, mosquitoes)",
                    "Disinfect premises thoroughly",
                    "Avoid contact with other herds",
                    "Report to veterinary authorities",
                ],
                recommendations: vec![
                    "Supportive care and antibiotics",
                    "Anti-inflammatory medications",
                    "Wound care for skin lesions",
                    "Nutritional support",
                    "Vaccination program",
                ],
            },
        );

        records.insert(
            "Mastitis",
            DiseaseRecord {
                name: "Mastitis",
                stage: "Acute/Chronic",
                precautions: vec![
                    "Maintain strict milking hygiene",
                    "Disinfect udder before and after milking",
                    "Use clean milking equipment",
                    "Isolate affected quarter",
                    "Monitor milk quality regularly",
                ],
                recommendations: vec![
                    "Antibiotic treatment as prescribed",
                    "Frequent milking of affected quarter",
                    "Apply warm compresses",
                    "Proper nutrition and hydration",
                    "Dry cow therapy",
                ],
            },
        );

        Self { records }
    }

    /// Look up the advisory record for a label. Unknown labels fall back to
    /// the healthy record, mirroring the upstream data contract.
    pub fn get(&self, name: &str) -> &DiseaseRecord {
        self.records.get(name).unwrap_or(&self.records[HEALTHY])
    }
}

impl Default for AdvisoryTable {
    fn default() -> Self {
        Self::new()
    }
}
