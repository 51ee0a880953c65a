//! Heuristic detection of "information not found" answers

/// Hedge phrases that indicate the model could not answer from the context.
///
/// Case-insensitive substring matches. This list errs on the side of catching
/// refusals, so an answer that merely quotes "the given context" also trips it.
const NOT_FOUND_PHRASES: &[&str] = &[
    "does not provide",
    "does not give",
    "does not contain",
    "does not mention",
    "not found in",
    "no information",
    "cannot find",
    "doesn't provide",
    "doesn't give",
    "doesn't contain",
    "doesn't mention",
    "cannot be answered",
    "not available",
    "not provided",
    "from the given",
    "given context",
    "given text",
    "provided text",
    "available in the",
    "insufficient information",
];

/// Classifier deciding whether an answer indicates the information was not
/// found in the supplied context.
pub trait NotFoundClassifier: Send + Sync {
    fn is_not_found(&self, text: &str) -> bool;
}

/// Default classifier: case-insensitive substring match against a fixed hedge
/// phrase list.
///
/// This is a heuristic, not a semantic check; false positives and negatives
/// are expected and acceptable at this system's risk level.
#[derive(Debug, Default, Clone)]
pub struct PhraseClassifier;

impl NotFoundClassifier for PhraseClassifier {
    fn is_not_found(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        NOT_FOUND_PHRASES.iter().any(|phrase| lower.contains(phrase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phrase_is_detected_in_surrounding_text() {
        let classifier = PhraseClassifier;
        for phrase in NOT_FOUND_PHRASES {
            let answer = format!("Well, it {} anything useful, sorry.", phrase);
            assert!(
                classifier.is_not_found(&answer),
                "phrase not detected: {}",
                phrase
            );
        }
    }

    #[test]
    fn detection_is_case_insensitive() {
        let classifier = PhraseClassifier;
        assert!(classifier.is_not_found("The document does NOT CONTAIN pricing info"));
        assert!(classifier.is_not_found("INSUFFICIENT INFORMATION to answer"));
    }

    #[test]
    fn confident_answers_pass() {
        let classifier = PhraseClassifier;
        assert!(!classifier.is_not_found("The price is $10"));
        assert!(!classifier.is_not_found("Paris is the capital of France."));
    }

    #[test]
    fn refusal_sentence_from_prompt_is_detected() {
        let classifier = PhraseClassifier;
        assert!(classifier.is_not_found(super::super::prompt::NOT_FOUND_SENTENCE));
    }
}
