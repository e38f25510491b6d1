//! Event-handling boundary: one incoming event in, one response out.
//!
//! Never fails. Core errors are logged here and converted into the
//! apology texts from [`crate::error`].

use crate::catalog::{catalog, Catalog};
use crate::error::{CoreError, CoreResult, BUTTON_FAILURE_TEXT, MESSAGE_FAILURE_TEXT};
use crate::event::{Command, EntityKind, Event};
use crate::formatter::{chunk, MAX_MESSAGE_CHARS};
use crate::matcher::{matcher, IntentMatcher};
use crate::menu::{Button, MenuNavigator, MenuView};
use serde::Serialize;
use tracing::{debug, error, warn};

/// How the first chunk reaches the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// New message(s)
    Send,
    /// Replace the message whose button was pressed; send if that fails
    EditOrSend,
}

/// Short popup acknowledging a button press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub text: String,
    pub alert: bool,
}

/// Everything the transport needs to answer one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Topic or menu that produced the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Message texts, each within the size limit
    pub chunks: Vec<String>,
    /// Keyboard rows, attached to the last chunk
    pub keyboard: Vec<Vec<Button>>,
    pub disable_preview: bool,
    pub delivery: Delivery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl Response {
    fn text(topic: &str, chunks: Vec<String>) -> Self {
        Self {
            topic: Some(topic.to_string()),
            chunks,
            keyboard: Vec::new(),
            disable_preview: false,
            delivery: Delivery::Send,
            notice: None,
        }
    }

    fn with_keyboard(mut self, keyboard: Vec<Vec<Button>>) -> Self {
        self.keyboard = keyboard;
        self
    }

    fn without_preview(mut self) -> Self {
        self.disable_preview = true;
        self
    }

    fn editing(mut self) -> Self {
        self.delivery = Delivery::EditOrSend;
        self
    }

    /// Popup only, no message
    fn notice(text: &str, alert: bool) -> Self {
        Self {
            topic: None,
            chunks: Vec::new(),
            keyboard: Vec::new(),
            disable_preview: true,
            delivery: Delivery::Send,
            notice: Some(Notice {
                text: text.to_string(),
                alert,
            }),
        }
    }

    fn apology(text: &str) -> Self {
        Self {
            topic: None,
            chunks: vec![text.to_string()],
            keyboard: Vec::new(),
            disable_preview: true,
            delivery: Delivery::Send,
            notice: None,
        }
    }

    /// Nothing to deliver; a button press still gets acknowledged
    pub fn acknowledgement() -> Self {
        Self {
            topic: None,
            chunks: Vec::new(),
            keyboard: Vec::new(),
            disable_preview: false,
            delivery: Delivery::Send,
            notice: None,
        }
    }

    pub fn has_keyboard(&self) -> bool {
        !self.keyboard.is_empty()
    }
}

pub struct Responder<'a> {
    catalog: &'a Catalog,
    navigator: MenuNavigator<'a>,
    matcher: &'a IntentMatcher,
    limit: usize,
}

impl Responder<'static> {
    /// Responder over the built-in tables
    pub fn builtin(limit: usize) -> CoreResult<Self> {
        Self::new(catalog(), matcher(), limit)
    }
}

impl<'a> Responder<'a> {
    /// Fails with `InvalidLimit` for a zero chunk limit
    pub fn new(catalog: &'a Catalog, matcher: &'a IntentMatcher, limit: usize) -> CoreResult<Self> {
        if limit < 1 {
            return Err(CoreError::InvalidLimit(limit));
        }
        Ok(Self {
            catalog,
            navigator: MenuNavigator::new(catalog),
            matcher,
            limit,
        })
    }

    pub fn navigator(&self) -> &MenuNavigator<'a> {
        &self.navigator
    }

    /// Ids referenced by the keyword rules or menus that the catalog lacks
    pub fn dangling_topics(&self) -> Vec<String> {
        let mut references: Vec<&str> = self.matcher.topics().collect();
        references.extend(self.navigator.reachable_ids());
        self.catalog.dangling(references)
    }

    /// Answer one event. Total: failures become apologies.
    pub fn respond(&self, event: &Event) -> Response {
        match self.try_respond(event) {
            Ok(response) => response,
            Err(e) => self.recover(event, e),
        }
    }

    fn try_respond(&self, event: &Event) -> CoreResult<Response> {
        match event {
            Event::Command { name, args } => match Command::parse(name) {
                Some(command) => self.command(command),
                None => {
                    let text = match args {
                        Some(args) => format!("{} {}", name, args),
                        None => name.clone(),
                    };
                    self.free_text(&text)
                }
            },
            Event::Button { id } => self.button(id),
            Event::Text { text, entities } => {
                let links = entities
                    .iter()
                    .filter(|e| matches!(e.kind, EntityKind::Url | EntityKind::Mention))
                    .count();
                if links > 0 {
                    debug!(links, "message carries links or mentions");
                }
                self.free_text(text)
            }
        }
    }

    fn command(&self, command: Command) -> CoreResult<Response> {
        match command {
            Command::Start | Command::Menu => {
                Ok(self.view(self.navigator.home()?)?.without_preview())
            }
            Command::Help => self.view(self.navigator.resolve("faq")?),
            Command::About => self.topic("about"),
            Command::Sidnok => Ok(self.topic("sidnok")?.without_preview()),
            Command::Info => self.topic("menu_info"),
        }
    }

    fn button(&self, id: &str) -> CoreResult<Response> {
        let view = self.navigator.resolve(id)?;
        Ok(self.view(view)?.without_preview().editing())
    }

    fn free_text(&self, text: &str) -> CoreResult<Response> {
        let topic = self.matcher.classify(text);
        Ok(self.topic(topic)?.without_preview())
    }

    fn topic(&self, id: &str) -> CoreResult<Response> {
        let body = self.catalog.get(id)?;
        Ok(Response::text(id, chunk(body, self.limit)?))
    }

    fn view(&self, view: MenuView) -> CoreResult<Response> {
        let chunks = chunk(&view.text, self.limit)?;
        Ok(Response::text(&view.topic, chunks).with_keyboard(view.keyboard))
    }

    fn recover(&self, event: &Event, e: CoreError) -> Response {
        if e.is_defect() {
            error!(event = event.kind(), "failed to answer event: {}", e);
        } else {
            warn!(event = event.kind(), "{}", e);
        }

        match (event, &e) {
            (Event::Button { .. }, CoreError::UnknownButton(_)) => {
                Response::notice(e.user_message(), false)
            }
            (Event::Button { .. }, _) => Response::notice(BUTTON_FAILURE_TEXT, true),
            (Event::Text { .. }, _) => Response::apology(MESSAGE_FAILURE_TEXT),
            (Event::Command { .. }, _) => Response::apology(e.user_message()),
        }
    }
}

impl Default for Responder<'static> {
    fn default() -> Self {
        Self {
            catalog: catalog(),
            navigator: MenuNavigator::default(),
            matcher: matcher(),
            limit: MAX_MESSAGE_CHARS,
        }
    }
}

/// Home menu for a fresh session
pub fn session_start(responder: &Responder<'_>) -> Response {
    responder.respond(&Event::Command {
        name: Command::Start.name().to_string(),
        args: None,
    })
}
