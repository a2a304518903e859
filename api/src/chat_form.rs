use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub user_message: Option<String>,
}
