use serde::Serialize;

/// Outcome tag carried in every response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// JSON envelope wrapped around every API response
///
/// ```json
/// { "status": "success", "message": "...", "data": [...] }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data,
        }
    }
}

impl<T: Default> ApiResponse<T> {
    /// Error envelope; `data` is the empty value of `T`
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: T::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope() {
        let response = ApiResponse::success("Fetched.", vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "status": "success", "message": "Fetched.", "data": [1, 2] })
        );
    }

    #[test]
    fn error_envelope() {
        let response = ApiResponse::<Vec<u8>>::error("Broken.");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "status": "error", "message": "Broken.", "data": [] })
        );
    }
}
