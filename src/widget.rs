//! Autocomplete widget model.
//!
//! Every operation is a plain state transition. Anything the host has to do
//! afterwards (run a lookup, hand a submission to its callback, start a
//! download) comes back as a return value.

use log::{debug, warn};

use crate::domain::{InputState, Phase, Snapshot, Submission, Suggestion};
use crate::download::DownloadRequest;
use crate::error::{Error, Result};
use crate::lookup::{LookupError, LookupRequest};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Autocomplete {
    input: InputState,
    suggestions: Vec<Suggestion>,
    selected: Option<Suggestion>,
    /// Sequence number of the most recently issued lookup
    issued: u64,
}

impl Autocomplete {
    /// Restore from a persisted snapshot.
    ///
    /// Restored non-empty text refreshes its suggestions like any other text change.
    pub fn mount(snapshot: Snapshot) -> (Self, Option<LookupRequest>) {
        let mut widget = Self {
            input: snapshot.input_value,
            suggestions: snapshot.queries,
            selected: snapshot.selected_logo,
            issued: 0,
        };
        let request = if widget.input.text().is_empty() {
            None
        } else {
            widget.text_changed()
        };
        (widget, request)
    }

    /// Keystroke: set the text and open the panel
    pub fn input(&mut self, text: impl Into<String>) -> Option<LookupRequest> {
        let next = InputState::open(text);
        let changed = next.text() != self.input.text();
        self.input = next;
        if changed {
            self.text_changed()
        } else {
            None
        }
    }

    /// Commit a lookup result if it answers the latest request.
    ///
    /// Returns whether the suggestion list changed.
    pub fn apply_lookup(
        &mut self,
        request: &LookupRequest,
        result: std::result::Result<Vec<Suggestion>, LookupError>,
    ) -> bool {
        if request.seq != self.issued {
            debug!(
                "dropping stale lookup #{} for {:?} (latest #{})",
                request.seq, request.query, self.issued
            );
            return false;
        }
        match result {
            Ok(suggestions) => {
                debug!(
                    "lookup #{} for {:?}: {} suggestions",
                    request.seq,
                    request.query,
                    suggestions.len()
                );
                self.suggestions = suggestions;
                true
            }
            Err(e) => {
                warn!("Something went wrong, try again later. ({:?}: {})", request.query, e);
                false
            }
        }
    }

    /// Pick the suggestion at `index`. Text and list stay as they are.
    pub fn select(&mut self, index: usize) -> Result<&Suggestion> {
        let suggestion = self
            .suggestions
            .get(index)
            .cloned()
            .ok_or(Error::InvalidIndex {
                index,
                len: self.suggestions.len(),
            })?;
        Ok(self.select_suggestion(suggestion))
    }

    pub fn select_suggestion(&mut self, suggestion: Suggestion) -> &Suggestion {
        self.input = self.input.close();
        self.selected.insert(suggestion)
    }

    /// Submit the form.
    ///
    /// The text becomes the resolved value, so a lookup for it may follow.
    pub fn submit(&mut self) -> (Submission, Option<LookupRequest>) {
        let value = self.resolved_value();
        let submission = Submission {
            value: value.clone(),
            query: None,
            queries: std::mem::take(&mut self.suggestions),
        };

        let changed = value != self.input.text();
        self.input = InputState::closed(value);
        let request = if changed { self.text_changed() } else { None };
        (submission, request)
    }

    /// Back to defaults. Outstanding lookups can no longer commit.
    pub fn reset(&mut self) {
        self.input = InputState::Idle;
        self.suggestions.clear();
        self.selected = None;
        self.issued += 1;
    }

    pub fn download(&self) -> Option<DownloadRequest> {
        self.selected.as_ref().map(DownloadRequest::for_logo)
    }

    /// First suggestion's domain, else the raw text
    pub fn resolved_value(&self) -> String {
        self.suggestions
            .first()
            .map(|s| s.domain.as_str())
            .filter(|domain| !domain.is_empty())
            .unwrap_or(self.input.text())
            .to_string()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            queries: self.suggestions.clone(),
            selected_logo: self.selected.clone(),
            input_value: self.input.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        match (&self.input, &self.selected) {
            (InputState::Open(_), _) => Phase::Typing,
            (_, Some(_)) => Phase::Selected,
            (InputState::Closed(_), None) => Phase::Closed,
            (InputState::Idle, None) => Phase::Idle,
        }
    }

    pub fn panel_visible(&self) -> bool {
        self.input.is_active()
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected.as_ref()
    }

    fn text_changed(&mut self) -> Option<LookupRequest> {
        self.issued += 1;
        let text = self.input.text();
        if text.is_empty() {
            self.suggestions.clear();
            None
        } else {
            Some(LookupRequest {
                seq: self.issued,
                query: text.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nike() -> Suggestion {
        Suggestion::new("Nike, Inc.", "nike.com", "https://logo/nike.png")
    }

    fn typed(text: &str, results: Vec<Suggestion>) -> Autocomplete {
        let mut widget = Autocomplete::default();
        let request = widget.input(text).unwrap();
        assert!(widget.apply_lookup(&request, Ok(results)));
        widget
    }

    #[test]
    fn test_input_issues_request_for_exact_text() {
        let mut widget = Autocomplete::default();
        let request = widget.input(" Nike ").unwrap();
        assert_eq!(request.query, " Nike ");
        assert_eq!(widget.phase(), Phase::Typing);
        assert!(widget.panel_visible());
    }

    #[test]
    fn test_empty_input_clears_without_request() {
        let mut widget = typed("nike", vec![nike()]);
        assert!(widget.input("").is_none());
        assert!(widget.suggestions().is_empty());
        assert_eq!(widget.phase(), Phase::Idle);
        assert!(!widget.panel_visible());
    }

    #[test]
    fn test_same_text_does_not_refetch() {
        let mut widget = typed("nike", vec![nike()]);
        widget.select(0).unwrap();
        assert!(widget.input("nike").is_none());
        assert!(widget.panel_visible());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut widget = Autocomplete::default();
        let first = widget.input("n").unwrap();
        let second = widget.input("ni").unwrap();

        assert!(widget.apply_lookup(&second, Ok(vec![nike()])));
        assert!(!widget.apply_lookup(&first, Ok(Vec::new())));
        assert_eq!(widget.suggestions(), &[nike()]);
    }

    #[test]
    fn test_failed_lookup_keeps_previous_list() {
        let mut widget = typed("nike", vec![nike()]);
        let request = widget.input("nikes").unwrap();
        assert!(!widget.apply_lookup(&request, Err(LookupError::Status(500))));
        assert_eq!(widget.suggestions(), &[nike()]);

        let request = widget.input("nikest").unwrap();
        assert!(!widget.apply_lookup(&request, Err(LookupError::Transport("offline".into()))));
        assert_eq!(widget.suggestions(), &[nike()]);
    }

    #[test]
    fn test_clearing_text_invalidates_pending_lookup() {
        let mut widget = Autocomplete::default();
        let request = widget.input("nike").unwrap();
        widget.input("");
        assert!(!widget.apply_lookup(&request, Ok(vec![nike()])));
        assert!(widget.suggestions().is_empty());
    }

    #[test]
    fn test_select_keeps_text_and_list() {
        let mut widget = typed("nike", vec![nike()]);
        let selected = widget.select(0).unwrap().clone();

        assert_eq!(selected, nike());
        assert_eq!(widget.text(), "nike");
        assert_eq!(widget.suggestions().len(), 1);
        assert!(!widget.panel_visible());
        assert_eq!(widget.phase(), Phase::Selected);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut widget = typed("nike", vec![nike()]);
        let err = widget.select(3).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { index: 3, len: 1 }));
        assert!(widget.selected().is_none());
    }

    #[test]
    fn test_submit_prefers_first_domain() {
        let mut widget = typed("nike", vec![nike()]);
        let (submission, follow_up) = widget.submit();

        assert_eq!(submission.value, "nike.com");
        assert_eq!(submission.query, None);
        assert_eq!(submission.queries, vec![nike()]);
        assert_eq!(widget.input_state(), &InputState::Closed("nike.com".to_string()));
        assert!(widget.suggestions().is_empty());
        assert_eq!(follow_up.map(|r| r.query), Some("nike.com".to_string()));
    }

    #[test]
    fn test_submit_without_suggestions_uses_text() {
        let mut widget = typed("zzzzz", Vec::new());
        let (submission, follow_up) = widget.submit();

        assert_eq!(submission.value, "zzzzz");
        assert!(submission.queries.is_empty());
        assert!(follow_up.is_none());
        assert_eq!(widget.phase(), Phase::Closed);
    }

    #[test]
    fn test_submit_skips_empty_domain() {
        let mut widget = typed("acme", vec![Suggestion::new("Acme", "", "https://logo/acme.png")]);
        let (submission, _) = widget.submit();
        assert_eq!(submission.value, "acme");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut widget = typed("nike", vec![nike()]);
        widget.select(0).unwrap();

        widget.reset();
        let once = widget.snapshot();
        widget.reset();

        assert_eq!(widget.snapshot(), once);
        assert!(once.is_empty());
        assert_eq!(widget.phase(), Phase::Idle);
        assert!(widget.download().is_none());
    }

    #[test]
    fn test_mount_refreshes_restored_text() {
        let snapshot = Snapshot {
            queries: vec![nike()],
            selected_logo: Some(nike()),
            input_value: InputState::Closed("nike".to_string()),
        };
        let (widget, request) = Autocomplete::mount(snapshot.clone());

        assert_eq!(widget.snapshot(), snapshot);
        assert_eq!(request.map(|r| r.query), Some("nike".to_string()));

        let (_, request) = Autocomplete::mount(Snapshot::default());
        assert!(request.is_none());
    }

    #[test]
    fn test_download_names_file_after_logo() {
        let mut widget = typed("nike", vec![nike()]);
        assert!(widget.download().is_none());
        widget.select(0).unwrap();

        let download = widget.download().unwrap();
        assert_eq!(download.url, "https://logo/nike.png");
        assert_eq!(download.file_name, "Nike, Inc.");
    }
}
