use actix_web::{
    body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, HttpResponseBuilder, Responder,
};
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Human readable description of why a lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub error: String,
}

impl ErrorDetail {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Uniform wrapper returned for every lookup.
///
/// Serializes as `{"success": bool, "result": ..., "statusCode": u16}` where
/// `result` is either the payload or an [`ErrorDetail`], decided by `success`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEnvelope<T> {
    pub result: Result<T, ErrorDetail>,
    pub status_code: u16,
}

impl<T> ResultEnvelope<T> {
    pub fn success(value: T, status_code: u16) -> Self {
        Self {
            result: Ok(value),
            status_code,
        }
    }

    pub fn failure(error: impl Into<String>, status_code: u16) -> Self {
        Self {
            result: Err(ErrorDetail::new(error)),
            status_code,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl<T: Serialize> Serialize for ResultEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResultEnvelope", 3)?;
        state.serialize_field("success", &self.is_success())?;
        match &self.result {
            Ok(value) => state.serialize_field("result", value)?,
            Err(detail) => state.serialize_field("result", detail)?,
        }
        state.serialize_field("statusCode", &self.status_code)?;
        state.end()
    }
}

impl<T: Serialize> Responder for ResultEnvelope<T> {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        // Upstream may hand back codes actix refuses to build (< 100)
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_GATEWAY);
        HttpResponseBuilder::new(status).json(&self)
    }
}
