use std::fmt::Debug;

use crate::{config::Config, form::FormState, util::error_chain_fmt};

/// Discriminator the form service uses to route a submission.
const FORM_NAME: &str = "contact";
/// Hidden anti-automation field; humans leave it empty.
const HONEYPOT_FIELD: &str = "bot-field";

pub struct FormClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    honeypot: bool,
}

impl FormClient {
    pub(crate) fn new(base_url: &str, cache_buster: Option<&str>, honeypot: bool) -> Self {
        // 不设超时，等待传输层自行结束或失败
        let client = reqwest::Client::new();
        let mut endpoint = reqwest::Url::parse(base_url).expect("failed to parse endpoint url.");
        endpoint.set_query(cache_buster);

        Self {
            client,
            endpoint,
            honeypot,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let endpoint_config = &config.endpoint;

        Self::new(
            &endpoint_config.base_url,
            endpoint_config.cache_buster.as_deref(),
            config.form.honeypot,
        )
    }

    #[tracing::instrument(name = "posting contact form", skip_all)]
    pub async fn send(&self, form: &FormState) -> Result<(), SubmitError> {
        let mut body = reqwest::multipart::Form::new();
        for (field, value) in form.entries() {
            body = body.text(field, value.to_owned());
        }
        body = body.text("form-name", FORM_NAME);
        if self.honeypot {
            body = body.text(HONEYPOT_FIELD, "");
        }

        self.client
            .post(self.endpoint.clone())
            .multipart(body)
            .send()
            .await?
            .error_for_status()
            .map_err(SubmitError::Rejected)?;

        Ok(())
    }
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("the form endpoint rejected the submission.")]
    Rejected(#[source] reqwest::Error),
    #[error("failed to deliver the submission.")]
    Transport(#[from] reqwest::Error),
}

impl Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};
    use fake::{
        faker::{internet::en::SafeEmail, lorem::zh_cn::Paragraph, name::en::Name},
        Fake,
    };
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{domain::FieldSet, form::FormState};

    use super::{FormClient, SubmitError};

    struct FormBodyMatcher(FieldSet);

    impl wiremock::Match for FormBodyMatcher {
        fn matches(&self, request: &wiremock::Request) -> bool {
            let body = String::from_utf8_lossy(&request.body);
            self.0
                .fields()
                .iter()
                .chain(["form-name"].iter())
                .all(|field| body.contains(&format!("name=\"{field}\"")))
        }
    }

    fn filled_form() -> FormState {
        let mut form = FormState::new(FieldSet::Basic);
        form.update("name", &Name().fake::<String>()).unwrap();
        form.update("email", &SafeEmail().fake::<String>()).unwrap();
        form.update("message", &Paragraph(1..10).fake::<String>())
            .unwrap();
        form
    }

    async fn mock_send_helper(mock_response: ResponseTemplate) -> Result<(), SubmitError> {
        let mock = MockServer::start().await;
        let form_client = FormClient::new(mock.uri().as_str(), Some("no-cache=1"), true);

        Mock::given(method("POST"))
            .and(path("/"))
            .and(query_param("no-cache", "1"))
            .and(FormBodyMatcher(FieldSet::Basic))
            .respond_with(mock_response)
            .expect(1)
            .mount(&mock)
            .await;

        form_client.send(&filled_form()).await
    }

    #[tokio::test]
    async fn mock_send_ok() {
        let mock_response = ResponseTemplate::new(200);
        let result = mock_send_helper(mock_response).await;
        assert_ok!(result);
    }

    #[tokio::test]
    async fn mock_send_400() {
        let mock_response = ResponseTemplate::new(400);
        let result = mock_send_helper(mock_response).await;
        assert_err!(result);
    }

    #[tokio::test]
    async fn mock_send_500() {
        let mock_response = ResponseTemplate::new(500);
        let result = mock_send_helper(mock_response).await;
        assert_err!(result);
    }

    #[tokio::test]
    async fn mock_send_unreachable_endpoint() {
        let mock = MockServer::start().await;
        let uri = mock.uri();
        drop(mock);

        let form_client = FormClient::new(uri.as_str(), None, false);
        let result = form_client.send(&filled_form()).await;
        assert_err!(result);
    }

    #[tokio::test]
    async fn honeypot_part_is_sent_empty_when_enabled() {
        let mock = MockServer::start().await;
        let form_client = FormClient::new(mock.uri().as_str(), None, true);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock)
            .await;

        assert_ok!(form_client.send(&filled_form()).await);

        let request = &mock.received_requests().await.unwrap()[0];
        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains("name=\"bot-field\""));
    }

    #[tokio::test]
    async fn honeypot_part_is_omitted_when_disabled() {
        let mock = MockServer::start().await;
        let form_client = FormClient::new(mock.uri().as_str(), None, false);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock)
            .await;

        assert_ok!(form_client.send(&filled_form()).await);

        let request = &mock.received_requests().await.unwrap()[0];
        let body = String::from_utf8_lossy(&request.body);
        assert!(!body.contains("name=\"bot-field\""));
    }
}
