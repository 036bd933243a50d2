// transcript/aggregator.rs
// Interim/final merge over the live recognition event stream

use crate::recognition::RecognitionEvent;

/// The two halves of the live transcript.
///
/// `final_text` is append-only and never edited except by an explicit clear.
/// `interim_text` holds only the most recent volatile guess; it is fully
/// replaced on each update, never concatenated across events.
#[derive(Debug, Clone, Default)]
pub struct TranscriptState {
    pub final_text: String,
    pub interim_text: String,
}

#[derive(Debug, Default)]
pub struct Aggregator {
    state: TranscriptState,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TranscriptState {
        &self.state
    }

    pub fn final_text(&self) -> &str {
        &self.state.final_text
    }

    pub fn interim_text(&self) -> &str {
        &self.state.interim_text
    }

    /// Merge one recognition event into the transcript.
    ///
    /// Results are processed starting at `result_index`. Final transcripts are
    /// appended (each followed by a single space) to the durable text; interim
    /// transcripts replace the volatile text. When an event carries both,
    /// final wins: the interim text is cleared.
    ///
    /// Returns the sealed chunk (trimmed final delta) when this event
    /// finalized any non-empty text.
    pub fn apply_event(&mut self, event: &RecognitionEvent) -> Option<String> {
        let mut final_delta = String::new();
        let mut interim_delta = String::new();

        for result in event.results.iter().skip(event.result_index) {
            if result.is_final {
                final_delta.push_str(&result.transcript);
                final_delta.push(' ');
            } else {
                interim_delta.push_str(&result.transcript);
            }
        }

        if !interim_delta.is_empty() {
            self.state.interim_text = interim_delta;
        }

        if !final_delta.is_empty() {
            self.state.final_text.push_str(&final_delta);
            self.state.interim_text.clear();

            let sealed = final_delta.trim();
            if !sealed.is_empty() {
                return Some(sealed.to_string());
            }
        }

        None
    }

    /// Drop the volatile guess, keeping the durable text.
    pub fn clear_interim(&mut self) {
        self.state.interim_text.clear();
    }

    /// Reset both transcript strings.
    pub fn clear(&mut self) {
        self.state.final_text.clear();
        self.state.interim_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::RecognitionResult;

    fn interim(text: &str) -> RecognitionResult {
        RecognitionResult {
            transcript: text.to_string(),
            is_final: false,
        }
    }

    fn final_result(text: &str) -> RecognitionResult {
        RecognitionResult {
            transcript: text.to_string(),
            is_final: true,
        }
    }

    fn event(result_index: usize, results: Vec<RecognitionResult>) -> RecognitionEvent {
        RecognitionEvent {
            result_index,
            results,
        }
    }

    #[test]
    fn test_final_text_is_event_order_concatenation() {
        let mut agg = Aggregator::new();
        agg.apply_event(&event(0, vec![final_result("hello")]));
        agg.apply_event(&event(1, vec![final_result("hello"), final_result("world")]));
        assert_eq!(agg.final_text(), "hello world ");
    }

    #[test]
    fn test_final_text_never_shrinks() {
        let mut agg = Aggregator::new();
        let mut last_len = 0;
        let events = [
            event(0, vec![interim("he")]),
            event(0, vec![final_result("hello")]),
            event(1, vec![final_result("hello"), interim("wor")]),
            event(1, vec![final_result("hello"), final_result("world")]),
        ];
        for ev in &events {
            agg.apply_event(ev);
            assert!(agg.final_text().len() >= last_len, "final text shrank");
            last_len = agg.final_text().len();
        }
    }

    #[test]
    fn test_interim_replaces_rather_than_appends() {
        let mut agg = Aggregator::new();
        agg.apply_event(&event(0, vec![interim("hel")]));
        assert_eq!(agg.interim_text(), "hel");

        agg.apply_event(&event(0, vec![interim("hello th")]));
        assert_eq!(agg.interim_text(), "hello th");
    }

    #[test]
    fn test_final_clears_interim_in_same_event() {
        let mut agg = Aggregator::new();
        agg.apply_event(&event(0, vec![interim("hel")]));

        // Same event finalizes slot 0 and opens an interim slot 1: the final
        // part must win for display.
        let sealed = agg.apply_event(&event(0, vec![final_result("hello"), interim("wor")]));
        assert_eq!(sealed, Some("hello".to_string()));
        assert_eq!(agg.interim_text(), "");
        assert_eq!(agg.final_text(), "hello ");
    }

    #[test]
    fn test_processing_starts_at_result_index() {
        let mut agg = Aggregator::new();
        agg.apply_event(&event(0, vec![final_result("first")]));

        // Redelivery of slot 0 alongside new slot 1 must not duplicate "first".
        let sealed = agg.apply_event(&event(1, vec![final_result("first"), final_result("second")]));
        assert_eq!(sealed, Some("second".to_string()));
        assert_eq!(agg.final_text(), "first second ");
    }

    #[test]
    fn test_result_index_past_end_is_a_no_op() {
        let mut agg = Aggregator::new();
        let sealed = agg.apply_event(&event(3, vec![final_result("stale")]));
        assert_eq!(sealed, None);
        assert_eq!(agg.final_text(), "");
    }

    #[test]
    fn test_whitespace_only_final_is_not_sealed() {
        let mut agg = Aggregator::new();
        let sealed = agg.apply_event(&event(0, vec![final_result("  ")]));
        assert_eq!(sealed, None, "blank finals must not reach the relay");
    }

    #[test]
    fn test_empty_interim_does_not_wipe_previous_guess() {
        let mut agg = Aggregator::new();
        agg.apply_event(&event(0, vec![interim("hold")]));
        agg.apply_event(&event(0, vec![interim("")]));
        assert_eq!(agg.interim_text(), "hold");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut agg = Aggregator::new();
        agg.apply_event(&event(0, vec![final_result("hello"), interim("wor")]));
        agg.apply_event(&event(1, vec![interim("world")]));

        agg.clear();
        assert_eq!(agg.final_text(), "");
        assert_eq!(agg.interim_text(), "");

        agg.clear();
        assert_eq!(agg.final_text(), "");
        assert_eq!(agg.interim_text(), "");
    }

    #[test]
    fn test_sealed_chunk_is_trimmed() {
        let mut agg = Aggregator::new();
        let sealed = agg.apply_event(&event(0, vec![final_result(" hello there ")]));
        assert_eq!(sealed, Some("hello there".to_string()));
        // Durable text keeps the raw delta, chunk is the trimmed view.
        assert_eq!(agg.final_text(), " hello there  ");
    }
}
