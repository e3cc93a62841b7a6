//! NLU result value objects and the intent selection policy.
//!
//! These types mirror the backend's wire format: `intents` carries one
//! `{intent, score}` entry per detected candidate, `entities` carries the
//! structured values extracted from the utterance. Both are transient: a
//! result is constructed per query, handed to the resolved handler by value,
//! and discarded when the handler returns.

use serde::{Deserialize, Serialize};

/// A candidate intent scored by the NLU backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRecommendation {
    /// Intent name as trained in the backend model.
    #[serde(rename = "intent")]
    pub name: String,

    /// Confidence score in `[0, 1]`.
    pub score: f64,
}

impl IntentRecommendation {
    /// Creates a new intent recommendation.
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// An entity extracted from the utterance.
///
/// Passed through to handlers unmodified; the dialog core never interprets
/// entity values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecommendation {
    /// Entity type as declared in the backend model (e.g., "location").
    #[serde(rename = "type")]
    pub entity_type: String,

    /// The extracted surface value.
    #[serde(rename = "entity")]
    pub value: String,

    /// Backend confidence for this entity, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Start offset of the entity in the utterance, when reported.
    #[serde(default, rename = "startIndex", skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,

    /// End offset of the entity in the utterance, when reported.
    #[serde(default, rename = "endIndex", skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,
}

impl EntityRecommendation {
    /// Creates a new entity recommendation without positional metadata.
    pub fn new(entity_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            value: value.into(),
            score: None,
            start_index: None,
            end_index: None,
        }
    }
}

/// Parsed NLU query result: ranked intents plus extracted entities.
///
/// Either sequence may be empty; a body that omits a field entirely parses as
/// an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NluResult {
    /// Candidate intents in backend order.
    #[serde(default)]
    pub intents: Vec<IntentRecommendation>,

    /// Extracted entities in backend order.
    #[serde(default)]
    pub entities: Vec<EntityRecommendation>,
}

impl NluResult {
    /// Creates a new result.
    pub fn new(intents: Vec<IntentRecommendation>, entities: Vec<EntityRecommendation>) -> Self {
        Self { intents, entities }
    }
}

/// Selects the intent to act on: the entry with the maximum score.
///
/// Ties are broken by first-encountered order in the sequence as returned by
/// the backend; there is no secondary tie-break field in the model. Returns
/// `None` for an empty sequence, in which case the caller falls back to the
/// default handler.
pub fn select_intent(result: &NluResult) -> Option<&IntentRecommendation> {
    result.intents.iter().reduce(|best, candidate| {
        if candidate.score > best.score {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result_with_scores(scores: &[(&str, f64)]) -> NluResult {
        NluResult::new(
            scores
                .iter()
                .map(|(name, score)| IntentRecommendation::new(*name, *score))
                .collect(),
            vec![],
        )
    }

    #[test]
    fn select_returns_highest_score() {
        let result = result_with_scores(&[("Greeting", 0.9), ("Farewell", 0.1)]);
        assert_eq!(select_intent(&result).unwrap().name, "Greeting");
    }

    #[test]
    fn select_ignores_backend_ordering() {
        let result = result_with_scores(&[("Farewell", 0.1), ("Greeting", 0.9)]);
        assert_eq!(select_intent(&result).unwrap().name, "Greeting");
    }

    #[test]
    fn select_breaks_ties_by_first_encountered_order() {
        let result = result_with_scores(&[("First", 0.5), ("Second", 0.5), ("Third", 0.2)]);
        assert_eq!(select_intent(&result).unwrap().name, "First");
    }

    #[test]
    fn select_returns_none_for_empty_intents() {
        assert!(select_intent(&NluResult::default()).is_none());
    }

    #[test]
    fn deserializes_backend_wire_format() {
        let json = r#"{
            "intents": [
                {"intent": "BookFlight", "score": 0.85},
                {"intent": "None", "score": 0.02}
            ],
            "entities": [
                {"type": "location", "entity": "paris", "startIndex": 15, "endIndex": 19}
            ]
        }"#;

        let result: NluResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.intents.len(), 2);
        assert_eq!(result.intents[0].name, "BookFlight");
        assert_eq!(result.intents[0].score, 0.85);
        assert_eq!(result.entities.len(), 1);
        assert_eq!(result.entities[0].entity_type, "location");
        assert_eq!(result.entities[0].value, "paris");
        assert_eq!(result.entities[0].start_index, Some(15));
        assert_eq!(result.entities[0].end_index, Some(19));
        assert_eq!(result.entities[0].score, None);
    }

    #[test]
    fn missing_fields_parse_as_empty_sequences() {
        let result: NluResult = serde_json::from_str("{}").unwrap();
        assert!(result.intents.is_empty());
        assert!(result.entities.is_empty());
    }

    #[test]
    fn round_trip_preserves_names_scores_and_entity_pairs() {
        let json = r#"{"intents":[{"intent":"Order","score":0.7}],"entities":[{"type":"dish","entity":"ramen"}]}"#;
        let result: NluResult = serde_json::from_str(json).unwrap();
        let reserialized = serde_json::to_string(&result).unwrap();
        let reparsed: NluResult = serde_json::from_str(&reserialized).unwrap();

        assert_eq!(result, reparsed);
        assert_eq!(reparsed.intents[0].name, "Order");
        assert_eq!(reparsed.intents[0].score, 0.7);
        assert_eq!(reparsed.entities[0].entity_type, "dish");
        assert_eq!(reparsed.entities[0].value, "ramen");
    }

    proptest! {
        #[test]
        fn select_returns_first_entry_with_maximal_score(
            scores in proptest::collection::vec(0.0f64..=1.0, 1..20)
        ) {
            let result = NluResult::new(
                scores
                    .iter()
                    .enumerate()
                    .map(|(i, score)| IntentRecommendation::new(format!("intent-{}", i), *score))
                    .collect(),
                vec![],
            );

            let max = scores.iter().cloned().fold(f64::MIN, f64::max);
            let first_max = scores.iter().position(|s| *s == max).unwrap();

            let selected = select_intent(&result).unwrap();
            prop_assert_eq!(&selected.name, &format!("intent-{}", first_max));
            prop_assert_eq!(selected.score, max);
        }
    }
}
