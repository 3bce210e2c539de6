use crate::api::{ApiResult, AskResponse, NavigationBackend};
use crate::types::{Location, MapId, Message};

pub const WELCOME_TEXT: &str = "Hello! I'm your campus assistant. How can I help you today ?";
pub const FAILURE_TEXT: &str = "Sorry, something went wrong. Please try again.";

/// What a call to [`ChatSession::send_message`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing appended, nothing sent.
    Skipped,
    /// The bot answered. Carries the map id when the answer has a location.
    Answered(Option<MapId>),
    /// The request failed and the fixed apology was appended.
    Failed,
}

/// Conversation with the navigation bot.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    input: String,
    messages: Vec<Message>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            messages: vec![Message::bot(WELCOME_TEXT)],
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Move the input into the conversation and return the query to send.
    ///
    /// The input is cleared right away, whatever happens to the request.
    pub fn begin_send(&mut self) -> Option<String> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return None;
        }
        self.messages.push(Message::user(query.clone()));
        self.input.clear();
        Some(query)
    }

    /// Append the bot's side of the exchange.
    pub fn complete(&mut self, result: ApiResult<AskResponse>) -> SendOutcome {
        match result {
            Ok(response) => {
                tracing::debug!(answer = %response.answer, "navigation bot answered");
                let located = response.source.as_ref().and_then(|source| {
                    source.coordinates().map(|(lat, lng)| Location {
                        lat,
                        lng,
                        title: source.title.clone(),
                    })
                });
                match located {
                    Some(location) => {
                        let map_id = MapId(self.messages.len());
                        self.messages
                            .push(Message::bot_with_map(response.answer, location, map_id));
                        SendOutcome::Answered(Some(map_id))
                    }
                    None => {
                        self.messages.push(Message::bot(response.answer));
                        SendOutcome::Answered(None)
                    }
                }
            }
            Err(err) => {
                tracing::error!("error asking navigation bot: {err}");
                self.messages.push(Message::bot(FAILURE_TEXT));
                SendOutcome::Failed
            }
        }
    }

    pub async fn send_message<B>(&mut self, backend: &B) -> SendOutcome
    where
        B: NavigationBackend + ?Sized,
    {
        let Some(query) = self.begin_send() else {
            return SendOutcome::Skipped;
        };
        let result = backend.ask(&query).await;
        self.complete(result)
    }
}
