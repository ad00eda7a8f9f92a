//! Landing page view-model.
//!
//! Owns the two pieces of state behind the landing page: the verse text
//! and the current view. The view is a two-variant tagged union rather
//! than a boolean so the one-way `Form -> Loading` transition is explicit
//! and matched exhaustively in the render path.

/// Which of the two mutually exclusive views is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// The prompt form. Initial state.
    Form,
    /// Terminal state: holds the submitted verse, untrimmed, for display.
    Loading { verse: String },
}

/// State for the verse prompt form.
///
/// Created when the landing page mounts, dropped when it unmounts.
/// Never shared and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersePrompt {
    text: String,
    view: ViewState,
}

impl VersePrompt {
    /// Fresh state: empty text, form visible.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            view: ViewState::Form,
        }
    }

    /// Current input text, exactly as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current view.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Whether the form has been submitted.
    pub fn is_submitted(&self) -> bool {
        matches!(self.view, ViewState::Loading { .. })
    }

    /// Controlled-input update: replace the stored text verbatim.
    ///
    /// No trimming, no length limit, no character filtering.
    pub fn input(&mut self, value: &str) {
        self.text = value.to_string();
    }

    /// Submit the form.
    ///
    /// Whitespace-only input is a silent no-op; the form stays visible
    /// with no error surfaced. Otherwise the view moves to `Loading`,
    /// carrying the untrimmed text. Once loading, further submits are
    /// ignored; there is no way back to the form.
    pub fn submit(&mut self) {
        if self.is_submitted() {
            return;
        }
        if self.text.trim().is_empty() {
            return;
        }
        self.view = ViewState::Loading {
            verse: self.text.clone(),
        };
    }
}

impl Default for VersePrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_shows_form() {
        let state = VersePrompt::new();
        assert_eq!(state.text(), "");
        assert_eq!(*state.view(), ViewState::Form);
        assert!(!state.is_submitted());
    }

    #[test]
    fn test_whitespace_only_submit_is_silent_noop() {
        for input in ["", "   ", "\t", "\n\n", " \t \n "] {
            let mut state = VersePrompt::new();
            state.input(input);
            state.submit();
            assert!(!state.is_submitted(), "submitted for input {:?}", input);
            assert_eq!(*state.view(), ViewState::Form);
            // Text is untouched by the rejected submit
            assert_eq!(state.text(), input);
        }
    }

    #[test]
    fn test_nonempty_submit_transitions_to_loading() {
        let mut state = VersePrompt::new();
        state.input("Narnia");
        state.submit();
        assert!(state.is_submitted());
        assert_eq!(
            *state.view(),
            ViewState::Loading {
                verse: "Narnia".to_string()
            }
        );
    }

    #[test]
    fn test_loading_keeps_untrimmed_text() {
        let mut state = VersePrompt::new();
        state.input("  Narnia  ");
        state.submit();
        // The trim only guards the transition; the display text keeps
        // its whitespace
        assert_eq!(
            *state.view(),
            ViewState::Loading {
                verse: "  Narnia  ".to_string()
            }
        );
    }

    #[test]
    fn test_loading_is_terminal() {
        let mut state = VersePrompt::new();
        state.input("Narnia");
        state.submit();

        // Further input and submits cannot leave the loading state
        state.input("");
        state.submit();
        state.input("Mordor");
        state.submit();

        assert!(state.is_submitted());
        assert_eq!(
            *state.view(),
            ViewState::Loading {
                verse: "Narnia".to_string()
            }
        );
    }

    #[test]
    fn test_controlled_input_echoes_last_value() {
        let mut state = VersePrompt::new();
        for value in ["N", "Na", "Nar", "Narn", "Narni", "Narnia"] {
            state.input(value);
        }
        assert_eq!(state.text(), "Narnia");
    }

    #[test]
    fn test_untouched_field_submit_keeps_form() {
        let mut state = VersePrompt::new();
        state.submit();
        assert_eq!(*state.view(), ViewState::Form);
    }
}
