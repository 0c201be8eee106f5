use std::fmt::Display;

use actix_web::{
    body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, HttpResponseBuilder, ResponseError,
};

use crate::models::ResultEnvelope;

/// An inbound request rejected before any upstream call, e.g. `?limit=abc`.
///
/// Rendered as a failure envelope so clients only ever see one response shape.
#[derive(Debug)]
pub struct RequestError {
    message: String,
    status_code: StatusCode,
}

impl Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&dyn ResponseError> for RequestError {
    fn from(value: &dyn ResponseError) -> Self {
        Self {
            message: format!("Invalid request parameters. {value}"),
            status_code: value.status_code(),
        }
    }
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let envelope = ResultEnvelope::<()>::failure(&*self.message, self.status_code.as_u16());
        HttpResponseBuilder::new(self.status_code).json(envelope)
    }
}

pub fn envelope_error_handler<Err: ResponseError + 'static>(
    err: Err,
    _: &HttpRequest,
) -> actix_web::Error {
    RequestError::from(&err as &dyn ResponseError).into()
}
