pub mod config;
mod contact_form;
mod domain;
mod form;
pub mod form_client;
mod status;
pub mod telemetry;
mod util;

pub use contact_form::ContactForm;
pub use domain::FieldSet;
pub use form::FormState;
pub use form_client::FormClient;
pub use status::{StatusLine, SubmitOutcome};
