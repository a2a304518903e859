use crate::app::AppState;
use crate::chat_form::ChatForm;
use crate::error::AppError;
use axum::{
    extract::{Form, State},
    response::Html,
};
use chat_relay::ChatExchange;
use std::sync::Arc;

pub async fn chat_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    state.templates.index(&ChatExchange::default())
}

/// Relays the submitted message and renders the reply. A missing form body
/// or field counts as an empty message.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    form: Option<Form<ChatForm>>,
) -> Result<Html<String>, AppError> {
    let user_message = form
        .and_then(|Form(form)| form.user_message)
        .unwrap_or_default();

    log::info!("Relaying chat message to {}", state.relay.service_name());
    let exchange = state.relay.exchange(user_message).await;

    state.templates.index(&exchange)
}
