//! Built-in medical diagnosis knowledge base.

use super::rule::{Category, Rule, RuleBase};

const MEDICAL_RULES: &[(&[&str], &str, Category)] = &[
    (&["fever", "cough"], "suspect_flu", Category::Intermediate),
    (&["headache", "nausea"], "suspect_migraine", Category::Intermediate),
    (&["suspect_flu", "body_aches"], "diagnosis_influenza", Category::Diagnosis),
    (&["suspect_flu", "sore_throat"], "diagnosis_common_cold", Category::Diagnosis),
    (
        &["suspect_migraine", "light_sensitivity"],
        "diagnosis_migraine",
        Category::Diagnosis,
    ),
    (&["diagnosis_influenza"], "recommend_rest", Category::Recommendation),
    (&["diagnosis_migraine"], "recommend_dark_room", Category::Recommendation),
    (
        &["no_appetite", "stomach_pain"],
        "diagnosis_food_poisoning",
        Category::Diagnosis,
    ),
];

/// The demo rule set: flu and migraine chains plus a direct food poisoning
/// diagnosis.
pub fn medical() -> RuleBase {
    MEDICAL_RULES
        .iter()
        .map(|(conditions, conclusion, category)| {
            Rule::new(conditions.iter().copied(), *conclusion, *category)
                .expect("built-in rules have conditions and a conclusion")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Fact, diagnose, parse_facts};

    #[test]
    fn influenza_chain_reaches_recommendation() {
        let diagnosis = diagnose(&medical(), &parse_facts("fever, cough, body_aches"));
        assert_eq!(diagnosis.goals.diagnoses(), &[Fact::new("diagnosis_influenza")]);
        assert_eq!(diagnosis.goals.recommendations(), &[Fact::new("recommend_rest")]);
    }

    #[test]
    fn common_cold_has_no_recommendation() {
        let diagnosis = diagnose(&medical(), &parse_facts("fever,cough,sore_throat"));
        assert_eq!(diagnosis.goals.diagnoses(), &[Fact::new("diagnosis_common_cold")]);
        assert!(diagnosis.goals.recommendations().is_empty());
    }

    #[test]
    fn migraine_chain() {
        let diagnosis = diagnose(&medical(), &parse_facts("headache,nausea,light_sensitivity"));
        assert_eq!(diagnosis.goals.diagnoses(), &[Fact::new("diagnosis_migraine")]);
        assert_eq!(diagnosis.goals.recommendations(), &[Fact::new("recommend_dark_room")]);
    }

    #[test]
    fn food_poisoning_is_direct() {
        let diagnosis = diagnose(&medical(), &parse_facts("no_appetite,stomach_pain"));
        assert_eq!(
            diagnosis.goals.diagnoses(),
            &[Fact::new("diagnosis_food_poisoning")]
        );
        assert_eq!(diagnosis.inference.passes(), 2);
    }

    #[test]
    fn premises_are_the_askable_symptoms() {
        let base = medical();
        let premises: Vec<&str> = base.premises().into_iter().map(|f| f.as_str()).collect();
        assert_eq!(
            premises,
            vec![
                "body_aches",
                "cough",
                "fever",
                "headache",
                "light_sensitivity",
                "nausea",
                "no_appetite",
                "sore_throat",
                "stomach_pain",
            ]
        );
    }
}
