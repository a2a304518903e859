use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct RelayRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub response: Option<serde_json::Value>,
}

impl RelayResponse {
    /// Reply text carried by the remote service.
    ///
    /// Strings are returned verbatim, a missing or `null` field becomes an
    /// empty reply and any other JSON value is returned as its JSON text.
    pub fn into_reply(self) -> String {
        match self.response {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(text)) => text,
            Some(other) => other.to_string(),
        }
    }
}

/// One chat round trip as shown on the chat page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatExchange {
    pub user_message: String,
    pub bot_response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(body: &str) -> String {
        serde_json::from_str::<RelayResponse>(body).unwrap().into_reply()
    }

    #[test]
    fn string_response_is_used_verbatim() {
        assert_eq!(reply(r#"{"response": "hello back"}"#), "hello back");
    }

    #[test]
    fn missing_or_null_response_is_empty() {
        assert_eq!(reply(r#"{"other": 1}"#), "");
        assert_eq!(reply(r#"{"response": null}"#), "");
    }

    #[test]
    fn non_string_response_is_rendered_as_json() {
        assert_eq!(reply(r#"{"response": 42}"#), "42");
        assert_eq!(reply(r#"{"response": ["a"]}"#), r#"["a"]"#);
    }

    #[test]
    fn request_serializes_message_field() {
        let body = serde_json::to_value(RelayRequest { message: "hi".to_string() }).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hi" }));
    }
}
