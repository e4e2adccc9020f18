use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use thiserror::Error;
use web_sys::FormData;

use super::request::ContactRequest;
use crate::config;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("could not build form payload: {0}")]
    Payload(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("intake responded with status {0}")]
    Status(u16),
}

/// Somewhere a contact request can be delivered to.
#[cfg_attr(test, mockall::automock)]
pub trait Intake {
    fn submit(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

pub struct Web3FormsIntake {
    url: String,
}

impl Default for Web3FormsIntake {
    fn default() -> Self {
        Self {
            url: config::intake_url().to_string(),
        }
    }
}

fn form_data(request: &ContactRequest) -> Result<FormData, SubmitError> {
    let data = FormData::new().map_err(|e| SubmitError::Payload(format!("{:?}", e)))?;
    for (key, value) in request.form_entries() {
        data.append_with_str(key, value)
            .map_err(|e| SubmitError::Payload(format!("{:?}", e)))?;
    }
    Ok(data)
}

/// Anything outside 2xx counts as a failed delivery.
fn outcome(ok: bool, status: u16) -> Result<(), SubmitError> {
    if !ok {
        return Err(SubmitError::Status(status));
    }
    Ok(())
}

impl Intake for Web3FormsIntake {
    fn submit(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let url = self.url.clone();
        async move {
            let body = form_data(&request)?;
            let response = Request::post(&url)
                .header("Accept", "application/json")
                .body(body)
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;

            outcome(response.ok(), response.status())
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_success(status: u16) -> bool {
        (200..300).contains(&status)
    }

    #[test]
    fn success_statuses_deliver() {
        for status in [200, 204] {
            assert_eq!(outcome(is_success(status), status), Ok(()));
        }
    }

    #[test]
    fn redirect_and_error_statuses_fail() {
        for status in [302, 400, 500] {
            assert_eq!(outcome(is_success(status), status), Err(SubmitError::Status(status)));
        }
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            SubmitError::Status(429).to_string(),
            "intake responded with status 429"
        );
    }
}
