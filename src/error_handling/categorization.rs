//! Error categorization.

use super::types::FetchFailureType;

/// Categorizes a `reqwest::Error` into a `FetchFailureType`.
///
/// HTTP error statuses are not failures for page analysis (the body is
/// still analyzed), so only transport-level error kinds are inspected.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchFailureType {
    if error.is_builder() {
        FetchFailureType::BuilderError
    } else if error.is_redirect() {
        FetchFailureType::RedirectError
    } else if error.is_timeout() {
        FetchFailureType::TimeoutError
    } else if error.is_connect() {
        FetchFailureType::ConnectError
    } else if error.is_request() {
        FetchFailureType::RequestError
    } else if error.is_body() {
        FetchFailureType::BodyError
    } else if error.is_decode() {
        FetchFailureType::DecodeError
    } else {
        FetchFailureType::OtherError
    }
}
