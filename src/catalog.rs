// Static condition catalogs for the three demo analysis categories
use crate::error::DemoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Analysis category selecting which condition catalog applies
///
/// Serialized as its slug; deserialized through [`FromStr`], so config files
/// accept the same aliases and casing as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    Chest,
    Skin,
    Ct,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Chest, Category::Skin, Category::Ct];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Chest => "chest",
            Category::Skin => "skin",
            Category::Ct => "ct",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Chest => "Chest X-ray",
            Category::Skin => "Skin Lesion",
            Category::Ct => "CT Scan",
        }
    }

    /// How many conditions a single demo analysis may report
    pub fn condition_range(&self) -> RangeInclusive<usize> {
        match self {
            Category::Chest => 1..=3,
            Category::Skin | Category::Ct => 1..=2,
        }
    }
}

impl FromStr for Category {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chest" | "xray" | "x-ray" | "chest-xray" => Ok(Category::Chest),
            "skin" | "skin-lesion" | "lesion" => Ok(Category::Skin),
            "ct" | "ct-scan" | "ctscan" => Ok(Category::Ct),
            _ => Err(DemoError::UnknownCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.slug()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A named finding with its canned advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub label: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

/// Lifestyle advice appended to every demo result
pub const GENERAL_RECOMMENDATIONS: [&str; 6] = [
    "Maintain a balanced diet rich in fruits and vegetables",
    "Regular physical activity for at least 30 minutes daily",
    "Ensure adequate sleep (7-8 hours per night)",
    "Manage stress through mindfulness or relaxation techniques",
    "Stay hydrated with adequate water intake",
    "Avoid smoking and limit alcohol consumption",
];

pub fn catalog(category: Category) -> &'static [Condition] {
    match category {
        Category::Chest => CHEST_CONDITIONS,
        Category::Skin => SKIN_CONDITIONS,
        Category::Ct => CT_CONDITIONS,
    }
}

pub fn find_condition(category: Category, label: &str) -> Option<&'static Condition> {
    catalog(category).iter().find(|c| c.label == label)
}

const CHEST_CONDITIONS: &[Condition] = &[
    Condition {
        label: "Pneumonia",
        description: "Inflammation of the air sacs in one or both lungs",
        recommendations: &[
            "Rest and drink plenty of fluids",
            "Take prescribed antibiotics for bacterial pneumonia",
            "Use over-the-counter pain relievers as recommended",
            "Schedule a follow-up chest X-ray to ensure the infection is cleared",
        ],
    },
    Condition {
        label: "COVID-19 Pneumonia",
        description: "Lung inflammation caused by SARS-CoV-2 infection",
        recommendations: &[
            "Follow isolation protocols as recommended by CDC",
            "Monitor oxygen levels with a pulse oximeter",
            "Stay hydrated and get adequate rest",
            "Seek immediate medical attention if experiencing severe shortness of breath",
        ],
    },
    Condition {
        label: "Tuberculosis",
        description: "Infectious disease that primarily affects the lungs",
        recommendations: &[
            "Complete the full course of prescribed TB medication",
            "Attend all follow-up appointments to monitor treatment progress",
            "Improve ventilation in living and working spaces",
            "Notify close contacts so they can be tested for TB",
        ],
    },
    Condition {
        label: "Pleural Effusion",
        description: "Excess fluid around the lungs",
        recommendations: &[
            "Follow-up with a pulmonologist",
            "Additional testing may be needed to determine the cause",
            "Therapeutic thoracentesis may be recommended",
            "Monitor for worsening symptoms such as increased shortness of breath",
        ],
    },
    Condition {
        label: "Atelectasis",
        description: "Collapsed or closed lung",
        recommendations: &[
            "Deep breathing exercises to re-expand the lung",
            "Incentive spirometry exercises as directed",
            "Position changes to help drain secretions",
            "Follow-up imaging to ensure resolution",
        ],
    },
    Condition {
        label: "Cardiomegaly",
        description: "Enlarged heart",
        recommendations: &[
            "Consult with a cardiologist",
            "Echocardiogram for further evaluation",
            "Limit sodium intake",
            "Regular monitoring of blood pressure",
        ],
    },
    Condition {
        label: "Pulmonary Nodule",
        description: "Small round or oval-shaped growth in the lung",
        recommendations: &[
            "Follow-up CT scan in 3-6 months to monitor growth",
            "Avoid smoking and secondhand smoke exposure",
            "Discuss biopsy options with your physician if recommended",
            "Regular follow-up with a pulmonologist",
        ],
    },
    Condition {
        label: "Lung Mass",
        description: "Abnormal growth or tumor in the lung",
        recommendations: &[
            "Immediate follow-up with a pulmonologist",
            "CT-guided biopsy or bronchoscopy may be needed",
            "Smoking cessation if applicable",
            "PET scan may be recommended for further evaluation",
        ],
    },
    Condition {
        label: "Pneumothorax",
        description: "Collapsed lung due to air in the pleural space",
        recommendations: &[
            "Urgent medical evaluation if symptoms worsen",
            "Avoid air travel or diving until cleared by a physician",
            "Smoking cessation if applicable",
            "Follow-up imaging to ensure resolution",
        ],
    },
    Condition {
        label: "COPD",
        description: "Chronic obstructive pulmonary disease",
        recommendations: &[
            "Smoking cessation is essential",
            "Pulmonary rehabilitation program",
            "Proper use of prescribed inhalers",
            "Annual flu vaccine and pneumonia vaccine as recommended",
        ],
    },
];

const SKIN_CONDITIONS: &[Condition] = &[
    Condition {
        label: "Melanoma",
        description: "Serious form of skin cancer",
        recommendations: &[
            "Immediate referral to a dermatologist for biopsy",
            "Total body skin examination to check for other suspicious lesions",
            "Regular skin self-exams monthly",
            "Use sunscreen and protective clothing to prevent further damage",
        ],
    },
    Condition {
        label: "Basal Cell Carcinoma",
        description: "Most common type of skin cancer",
        recommendations: &[
            "Dermatology consultation for treatment options",
            "Consider Mohs surgery for complete removal",
            "Regular skin checks every 6 months",
            "Sun protection with SPF 30+ sunscreen daily",
        ],
    },
    Condition {
        label: "Squamous Cell Carcinoma",
        description: "Second most common form of skin cancer",
        recommendations: &[
            "Prompt excision to prevent spread",
            "Follow-up examinations every 3-6 months",
            "Daily sun protection measures",
            "Monitor lymph nodes for any enlargement",
        ],
    },
    Condition {
        label: "Seborrheic Keratosis",
        description: "Benign skin growth",
        recommendations: &[
            "No treatment necessary unless cosmetically undesirable",
            "Monitor for any changes in appearance",
            "Avoid picking or traumatizing the lesions",
            "Regular skin examinations with dermatologist",
        ],
    },
    Condition {
        label: "Actinic Keratosis",
        description: "Precancerous skin lesion",
        recommendations: &[
            "Topical treatments such as fluorouracil or imiquimod",
            "Cryotherapy (freezing) option",
            "Strict sun protection measures",
            "Regular dermatology check-ups every 6-12 months",
        ],
    },
    Condition {
        label: "Psoriasis",
        description: "Chronic autoimmune condition causing rapid skin cell buildup",
        recommendations: &[
            "Topical corticosteroids or other prescribed medications",
            "Moisturize skin regularly",
            "Phototherapy may be beneficial",
            "Stress management techniques",
        ],
    },
    Condition {
        label: "Eczema",
        description: "Inflammatory skin condition causing itchy, red rashes",
        recommendations: &[
            "Identify and avoid triggers",
            "Use gentle, fragrance-free skincare products",
            "Apply prescribed topical medications as directed",
            "Keep skin moisturized, especially after bathing",
        ],
    },
    Condition {
        label: "Dermatofibroma",
        description: "Benign skin nodule",
        recommendations: &[
            "Generally no treatment required",
            "Avoid trauma to the area",
            "Surgical removal if causing discomfort",
            "Routine skin checks to monitor any changes",
        ],
    },
];

const CT_CONDITIONS: &[Condition] = &[
    Condition {
        label: "Brain Tumor",
        description: "Abnormal growth of tissue in the brain",
        recommendations: &[
            "Immediate neurosurgery consultation",
            "MRI with contrast for further characterization",
            "Discuss biopsy options if appropriate",
            "Consider second opinion from neuro-oncologist",
        ],
    },
    Condition {
        label: "Stroke",
        description: "Brain damage from interrupted blood flow",
        recommendations: &[
            "Urgent neurological evaluation",
            "Blood-thinning medication may be prescribed",
            "Blood pressure management",
            "Rehabilitation therapy as needed",
        ],
    },
    Condition {
        label: "Intracranial Hemorrhage",
        description: "Bleeding within the skull",
        recommendations: &[
            "Emergency neurosurgical consultation",
            "Blood pressure control",
            "Avoid blood thinners",
            "Close neurological monitoring",
        ],
    },
    Condition {
        label: "Multiple Sclerosis",
        description: "Disease affecting the central nervous system",
        recommendations: &[
            "Referral to a neurologist specialized in MS",
            "MRI with and without contrast for further evaluation",
            "Consider disease-modifying therapies",
            "Join a support group for additional resources",
        ],
    },
    Condition {
        label: "Brain Aneurysm",
        description: "Bulge or ballooning in a blood vessel in the brain",
        recommendations: &[
            "Neurosurgical or interventional neuroradiology consultation",
            "Additional vascular imaging studies",
            "Blood pressure control",
            "Smoking cessation if applicable",
        ],
    },
    Condition {
        label: "Sinusitis",
        description: "Inflammation of the sinuses",
        recommendations: &[
            "Nasal corticosteroids or antibiotics if bacterial",
            "Saline nasal irrigation",
            "Decongestants for symptom relief",
            "Follow-up if symptoms persist beyond 10 days",
        ],
    },
    Condition {
        label: "Hydrocephalus",
        description: "Buildup of fluid in brain ventricles",
        recommendations: &[
            "Neurosurgical evaluation for possible shunt placement",
            "Regular neurological monitoring",
            "Watch for headaches, vision changes, and balance issues",
            "Follow-up imaging to monitor ventricular size",
        ],
    },
    Condition {
        label: "Atrophy",
        description: "Loss of brain cells or shrinkage",
        recommendations: &[
            "Neurological evaluation for cognitive assessment",
            "Consider underlying causes like Alzheimer's or other dementias",
            "Cognitive exercises and mental stimulation",
            "Regular follow-up to monitor progression",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(catalog(Category::Chest).len(), 10);
        assert_eq!(catalog(Category::Skin).len(), 8);
        assert_eq!(catalog(Category::Ct).len(), 8);
    }

    #[test]
    fn test_labels_unique_within_catalog() {
        for category in Category::ALL {
            let labels: HashSet<_> = catalog(category).iter().map(|c| c.label).collect();
            assert_eq!(labels.len(), catalog(category).len(), "{category}");
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("chest".parse::<Category>().unwrap(), Category::Chest);
        assert_eq!("XRay".parse::<Category>().unwrap(), Category::Chest);
        assert_eq!("skin-lesion".parse::<Category>().unwrap(), Category::Skin);
        assert_eq!(" CT ".parse::<Category>().unwrap(), Category::Ct);
        assert_eq!("ct-scan".parse::<Category>().unwrap(), Category::Ct);
    }

    #[test]
    fn test_unknown_category_is_rejected_not_mapped_to_ct() {
        let err = "mri".parse::<Category>().unwrap_err();
        assert!(matches!(err, DemoError::UnknownCategory(ref name) if name == "mri"));
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_condition_ranges() {
        assert_eq!(Category::Chest.condition_range(), 1..=3);
        assert_eq!(Category::Skin.condition_range(), 1..=2);
        assert_eq!(Category::Ct.condition_range(), 1..=2);
    }

    #[test]
    fn test_find_condition() {
        let pneumonia = find_condition(Category::Chest, "Pneumonia").unwrap();
        assert_eq!(pneumonia.recommendations.len(), 4);
        assert!(find_condition(Category::Ct, "Pneumonia").is_none());
    }

    #[test]
    fn test_category_serde_uses_slug() {
        assert_eq!(serde_json::to_string(&Category::Ct).unwrap(), "\"ct\"");
        let parsed: Category = serde_json::from_str("\"xray\"").unwrap();
        assert_eq!(parsed, Category::Chest);
    }

    #[test]
    fn test_category_deserialize_matches_from_str() {
        let parsed: Category = serde_json::from_str("\"CT\"").unwrap();
        assert_eq!(parsed, Category::Ct);
        let parsed: Category = serde_json::from_str("\" Skin-Lesion \"").unwrap();
        assert_eq!(parsed, Category::Skin);

        let err = serde_json::from_str::<Category>("\"mri\"").unwrap_err();
        assert!(err.to_string().contains("Unknown analysis category"));
    }
}
