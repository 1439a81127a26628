//! Bundled lists served when neither the primary provider nor the backup
//! has anything. Compiled in, so they exist on first boot without network.

use crate::category::ListCategory;

pub const STATIC_DRUG_NAMES: &[&str] = &[
    "Acetaminophen",
    "Albuterol",
    "Amlodipine",
    "Amoxicillin",
    "Atorvastatin",
    "Azithromycin",
    "Cetirizine",
    "Ciprofloxacin",
    "Clopidogrel",
    "Escitalopram",
    "Furosemide",
    "Gabapentin",
    "Hydrochlorothiazide",
    "Ibuprofen",
    "Insulin Glargine",
    "Levothyroxine",
    "Lisinopril",
    "Losartan",
    "Metformin",
    "Metoprolol",
    "Montelukast",
    "Omeprazole",
    "Pantoprazole",
    "Prednisone",
    "Rosuvastatin",
    "Sertraline",
    "Simvastatin",
    "Tramadol",
    "Warfarin",
    "Zolpidem",
];

pub const STATIC_DISEASE_NAMES: &[&str] = &[
    "Alzheimer disease",
    "Anemia",
    "Asthma",
    "Atrial fibrillation",
    "Celiac disease",
    "Chronic kidney disease",
    "Chronic obstructive pulmonary disease",
    "Coronary artery disease",
    "Crohn disease",
    "Cystic fibrosis",
    "Depressive disorder",
    "Epilepsy",
    "Gout",
    "Heart failure",
    "Hepatitis C",
    "Hypertension",
    "Hypothyroidism",
    "Influenza",
    "Migraine",
    "Multiple sclerosis",
    "Osteoarthritis",
    "Osteoporosis",
    "Parkinson disease",
    "Pneumonia",
    "Psoriasis",
    "Rheumatoid arthritis",
    "Sickle cell anemia",
    "Type 1 diabetes mellitus",
    "Type 2 diabetes mellitus",
    "Ulcerative colitis",
];

/// The bundled list for `category`, truncated to `limit` entries.
pub fn static_list(category: ListCategory, limit: usize) -> Vec<String> {
    let source = match category {
        ListCategory::Drugs => STATIC_DRUG_NAMES,
        ListCategory::Diseases => STATIC_DISEASE_NAMES,
    };
    source.iter().take(limit).map(|s| s.to_string()).collect()
}
