use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Message {
    message: String,
}

impl Message {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

/// Answer to a successful creation: the generated id is always echoed.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Created {
    message: String,
    id: i32,
}

impl Created {
    pub fn new(message: String, id: i32) -> Self {
        Self { message, id }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct ErrorPayload {
    error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ErrorPayload {
    pub fn new(error: String, details: Option<String>) -> Self {
        Self { error, details }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorPayload;

    #[test]
    fn should_omit_missing_details() {
        let payload = ErrorPayload::new("Member not found".to_owned(), None);

        assert_eq!(
            r#"{"error":"Member not found"}"#,
            serde_json::to_string(&payload).unwrap()
        );
    }

    #[test]
    fn should_include_details() {
        let payload = ErrorPayload::new(
            "Failed to fetch members".to_owned(),
            Some("no such table: members".to_owned()),
        );

        assert_eq!(
            r#"{"error":"Failed to fetch members","details":"no such table: members"}"#,
            serde_json::to_string(&payload).unwrap()
        );
    }
}
