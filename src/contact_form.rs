use crate::{
    domain::FieldSet,
    form::FormState,
    form_client::FormClient,
    status::{self, StatusLine, SubmitOutcome},
};

/// One contact form instance: the field values, the in-flight flag and the
/// outcome of the most recent submission.
pub struct ContactForm {
    state: FormState,
    client: FormClient,
    submitting: bool,
    outcome: Option<SubmitOutcome>,
}

impl ContactForm {
    pub fn new(variant: FieldSet, client: FormClient) -> Self {
        Self {
            state: FormState::new(variant),
            client,
            submitting: false,
            outcome: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn update(&mut self, field: &str, value: &str) -> Result<(), String> {
        self.state.update(field, value)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn outcome(&self) -> Option<SubmitOutcome> {
        self.outcome
    }

    pub fn status_line(&self) -> Option<StatusLine> {
        status::render(self.outcome)
    }

    /// One submission cycle: send the current values, record the outcome,
    /// reset the fields on success.
    #[tracing::instrument(name = "submitting contact form", skip_all)]
    pub async fn submit(&mut self) {
        // 提交期间触发器失效，不发起并发提交
        if self.submitting {
            return;
        }
        self.submitting = true;
        self.outcome = None;

        match self.client.send(&self.state).await {
            Ok(()) => {
                tracing::info!("contact form delivered.");
                self.outcome = Some(SubmitOutcome::Success);
                self.state.reset();
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "contact form submission failed."
                );
                self.outcome = Some(SubmitOutcome::Error);
            }
        }

        // 无论成败，提交标志最后复位
        self.submitting = false;
    }
}
