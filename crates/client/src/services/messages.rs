//! Direct messaging endpoints.

use partsmarket_core::{Conversation, Message};

use crate::api::{self, ApiClient};
use crate::error::Result;

/// Messages older than this are not kept in the conversation view.
const CONVERSATION_WINDOW: usize = 100;

/// Wrapper around the backend messages resource.
#[derive(Clone)]
pub struct MessagesService {
    api: ApiClient,
}

impl MessagesService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the current user's conversation summaries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn get_conversations(&self) -> Result<Vec<Conversation>> {
        let response = self.api.get("/messages").send().await?;
        let response = api::into_api_result(response).await?;
        let mut conversations: Vec<Conversation> = response.json().await?;
        conversations.sort_by(|a, b| b.last_timestamp.cmp(&a.last_timestamp));
        Ok(conversations)
    }

    /// Fetch a conversation's messages, keeping only the most recent
    /// [`CONVERSATION_WINDOW`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn get_messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        let response = self
            .api
            .get(&format!("/messages/conversation/{conversation_id}"))
            .send()
            .await?;
        let response = api::into_api_result(response).await?;
        let mut messages: Vec<Message> = response.json().await?;

        if messages.len() > CONVERSATION_WINDOW {
            messages = messages.split_off(messages.len() - CONVERSATION_WINDOW);
        }
        Ok(messages)
    }

    /// Send a message in a conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn send_message(&self, conversation_id: &str, text: &str) -> Result<Message> {
        let body = serde_json::json!({ "text": text });
        let response = self
            .api
            .post(&format!("/messages/conversation/{conversation_id}"))
            .json(&body)
            .send()
            .await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }
}
