use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Photo attached to a user message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatImage {
    pub path: String,
    pub mime: &'static str,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub image: Option<ChatImage>,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            image: None,
            timestamp: Local::now(),
        }
    }

    pub fn with_image(mut self, image: ChatImage) -> Self {
        self.image = Some(image);
        self
    }

    /// "HH:MM" as shown next to each bubble
    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
