/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Error,
}

/// A rendered status line: the text shown to the user and its style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub message: &'static str,
    pub class: &'static str,
}

pub fn render(outcome: Option<SubmitOutcome>) -> Option<StatusLine> {
    outcome.map(|outcome| match outcome {
        SubmitOutcome::Success => StatusLine {
            message: "Thank you! Your message has been sent.",
            class: "success",
        },
        SubmitOutcome::Error => StatusLine {
            message: "Oops! Something went wrong. Please try again.",
            class: "error",
        },
    })
}
