//! Built-in vocabularies and translations.
//!
//! These values are part of the external contract: changing a category order, a variant or a
//! translation changes which reports match and what clients see.

use crate::category::{AdverseEvent, Outcome, Severity};
use crate::lexicon::Lexicon;
use crate::translation::{Language, TranslationTable};

const SEVERITY: &[(Severity, &[&str])] = &[
    (Severity::Severe, &["severe", "life-threatening", "intense"]),
    (Severity::Moderate, &["moderate", "medium"]),
    (Severity::Mild, &["mild", "slight"]),
];

const OUTCOME: &[(Outcome, &[&str])] = &[
    (Outcome::Recovered, &["recovered", "resolved", "better"]),
    (
        Outcome::Ongoing,
        &["ongoing", "continuing", "persisting", "stable"],
    ),
    (Outcome::Fatal, &["fatal", "death", "died"]),
];

const ADVERSE_EVENTS: &[(AdverseEvent, &[&str])] = &[
    (AdverseEvent::Nausea, &["nausea", "queasy", "vomit", "vomiting"]),
    (AdverseEvent::Headache, &["headache", "migraine"]),
    (
        AdverseEvent::Dizziness,
        &["dizziness", "vertigo", "lightheaded"],
    ),
    (AdverseEvent::Rash, &["rash", "hives", "urticaria"]),
    (AdverseEvent::Fever, &["fever", "pyrexia", "temperature"]),
    (AdverseEvent::Cough, &["cough", "coughing"]),
    (AdverseEvent::Fatigue, &["fatigue", "tired", "exhausted"]),
];

const TRANSLATIONS: &[(Language, &[(Outcome, &str)])] = &[
    (
        Language::French,
        &[
            (Outcome::Recovered, "rétabli"),
            (Outcome::Ongoing, "en cours"),
            (Outcome::Fatal, "fatal"),
        ],
    ),
    (
        Language::Swahili,
        &[
            (Outcome::Recovered, "amepona"),
            (Outcome::Ongoing, "inaendelea"),
            (Outcome::Fatal, "mbaya"),
        ],
    ),
];

pub fn severity() -> Lexicon<Severity> {
    Lexicon::from_static(SEVERITY)
}

pub fn outcome() -> Lexicon<Outcome> {
    Lexicon::from_static(OUTCOME)
}

pub fn adverse_events() -> Lexicon<AdverseEvent> {
    Lexicon::from_static(ADVERSE_EVENTS)
}

pub fn translations() -> TranslationTable {
    TranslationTable::from_static(TRANSLATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn declared<C: Category>(data: &[(C, &[&str])]) -> Lexicon<C> {
        Lexicon::new(data.iter().map(|(c, v)| (*c, v.iter().copied()))).expect("valid lexicon")
    }

    fn contents<C: Category>(lexicon: &Lexicon<C>) -> Vec<(&'static str, Vec<&str>)> {
        lexicon
            .entries()
            .iter()
            .map(|e| {
                (
                    e.category().as_str(),
                    e.variants().iter().map(String::as_str).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn builtin_lexicon_contents_are_pinned() {
        assert_eq!(
            contents(&severity()),
            vec![
                ("severe", vec!["severe", "life-threatening", "intense"]),
                ("moderate", vec!["moderate", "medium"]),
                ("mild", vec!["mild", "slight"]),
            ]
        );
        assert_eq!(
            contents(&outcome()),
            vec![
                ("recovered", vec!["recovered", "resolved", "better"]),
                ("ongoing", vec!["ongoing", "continuing", "persisting", "stable"]),
                ("fatal", vec!["fatal", "death", "died"]),
            ]
        );
        assert_eq!(
            contents(&adverse_events()),
            vec![
                ("nausea", vec!["nausea", "queasy", "vomit", "vomiting"]),
                ("headache", vec!["headache", "migraine"]),
                ("dizziness", vec!["dizziness", "vertigo", "lightheaded"]),
                ("rash", vec!["rash", "hives", "urticaria"]),
                ("fever", vec!["fever", "pyrexia", "temperature"]),
                ("cough", vec!["cough", "coughing"]),
                ("fatigue", vec!["fatigue", "tired", "exhausted"]),
            ]
        );
    }

    #[test]
    fn builtin_lexicons_satisfy_validation() {
        assert_eq!(declared(SEVERITY), severity());
        assert_eq!(declared(OUTCOME), outcome());
        assert_eq!(declared(ADVERSE_EVENTS), adverse_events());
    }

    #[test]
    fn builtin_category_order_matches_enum_order() {
        assert_eq!(severity().categories().collect::<Vec<_>>(), Severity::ALL);
        assert_eq!(outcome().categories().collect::<Vec<_>>(), Outcome::ALL);
        assert_eq!(
            adverse_events().categories().collect::<Vec<_>>(),
            AdverseEvent::ALL
        );
    }

    #[test]
    fn builtin_variants_are_the_published_surface_forms() {
        assert_eq!(
            severity().variants_of(Severity::Severe).unwrap(),
            &["severe", "life-threatening", "intense"]
        );
        assert_eq!(
            outcome().variants_of(Outcome::Ongoing).unwrap(),
            &["ongoing", "continuing", "persisting", "stable"]
        );
        assert_eq!(
            adverse_events()
                .variants_of(AdverseEvent::Dizziness)
                .unwrap(),
            &["dizziness", "vertigo", "lightheaded"]
        );
        assert_eq!(
            adverse_events().variants_of(AdverseEvent::Nausea).unwrap(),
            &["nausea", "queasy", "vomit", "vomiting"]
        );
    }

    #[test]
    fn builtin_translations_cover_every_outcome() {
        let table = translations();
        assert_eq!(table.translate("recovered", Language::French), "rétabli");
        assert_eq!(table.translate("ongoing", Language::French), "en cours");
        assert_eq!(table.translate("fatal", Language::French), "fatal");
        assert_eq!(table.translate("recovered", Language::Swahili), "amepona");
        assert_eq!(table.translate("ongoing", Language::Swahili), "inaendelea");
        assert_eq!(table.translate("fatal", Language::Swahili), "mbaya");
    }
}
