//! Update handling: map Telegram updates to events, and responses to calls.
//!
//! `plan` is pure so delivery rules can be tested without a network;
//! `execute` performs the calls in order. The dispatcher routes messages
//! and callback queries to the two endpoints at the bottom.

use dukcapil_shared::error::MESSAGE_FAILURE_TEXT;
use dukcapil_shared::{
    Button, ButtonAction, Command, Delivery, EntityKind, EntitySpan, Event, Responder, Response,
};
use std::sync::Arc;
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::payloads::{AnswerCallbackQuery, EditMessageText, SendMessage};
use teloxide::prelude::*;
use teloxide::requests::HasPayload;
use teloxide::types::{
    BotCommand, InlineKeyboardButton, InlineKeyboardMarkup, LinkPreviewOptions, MessageEntityKind,
    MessageId, ParseMode, Update,
};
use teloxide::{ApiError, RequestError};
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Shared state handed to every endpoint
pub struct BotData {
    pub responder: Responder<'static>,
    /// Our own username from getMe, without the `@`
    pub username: String,
}

/// The parts of an update the bot reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    Message {
        chat_id: ChatId,
        text: String,
        entities: Vec<EntitySpan>,
    },
    Callback {
        query_id: String,
        /// Chat and message of the pressed keyboard, when still accessible
        origin: Option<(ChatId, MessageId)>,
        data: Option<String>,
    },
}

impl Incoming {
    /// Text messages only; stickers, photos and service messages give `None`
    pub fn from_message(msg: &Message) -> Option<Self> {
        let text = msg.text()?;
        let entities = msg
            .entities()
            .unwrap_or_default()
            .iter()
            .map(|e| EntitySpan {
                kind: entity_kind(&e.kind),
                offset: e.offset,
                length: e.length,
            })
            .collect();
        Some(Incoming::Message {
            chat_id: msg.chat.id,
            text: text.to_string(),
            entities,
        })
    }

    pub fn from_callback(query: &CallbackQuery) -> Self {
        Incoming::Callback {
            query_id: query.id.clone(),
            origin: query.message.as_ref().map(|m| (m.chat().id, m.id())),
            data: query.data.clone(),
        }
    }

    /// Transport-independent event; `None` for a callback without data
    pub fn event(&self) -> Option<Event> {
        match self {
            Incoming::Message { text, entities, .. } => {
                Some(Event::from_message(text, entities.clone()))
            }
            Incoming::Callback { data, .. } => data.as_deref().map(Event::button),
        }
    }

    pub fn chat_id(&self) -> Option<ChatId> {
        match self {
            Incoming::Message { chat_id, .. } => Some(*chat_id),
            Incoming::Callback { origin, .. } => origin.map(|(chat, _)| chat),
        }
    }
}

fn entity_kind(kind: &MessageEntityKind) -> EntityKind {
    match kind {
        MessageEntityKind::Url | MessageEntityKind::TextLink { .. } => EntityKind::Url,
        MessageEntityKind::Mention | MessageEntityKind::TextMention { .. } => EntityKind::Mention,
        _ => EntityKind::Other,
    }
}

/// One Bot API call
#[derive(Debug, Clone)]
pub enum Outgoing {
    Send(SendMessage),
    /// Edit the pressed message; send `fallback` if the edit is refused
    EditOrSend {
        edit: EditMessageText,
        fallback: SendMessage,
    },
    Answer(AnswerCallbackQuery),
}

fn keyboard_button(button: &Button) -> Option<InlineKeyboardButton> {
    match &button.action {
        ButtonAction::Navigate(id) => {
            Some(InlineKeyboardButton::callback(button.label.clone(), id.clone()))
        }
        ButtonAction::OpenLink(url) => match url.parse() {
            Ok(url) => Some(InlineKeyboardButton::url(button.label.clone(), url)),
            Err(e) => {
                warn!("dropping link button {:?}: {}", button.label, e);
                None
            }
        },
    }
}

/// Inline keyboard for `rows`; empty rows are left out
pub fn keyboard(rows: &[Vec<Button>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        rows.iter()
            .map(|row| row.iter().filter_map(keyboard_button).collect::<Vec<_>>())
            .filter(|row| !row.is_empty()),
    )
}

fn no_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Calls that deliver `response` for `incoming`.
///
/// Callbacks are acknowledged first. The keyboard rides on the last chunk.
pub fn plan(incoming: &Incoming, response: &Response) -> Vec<Outgoing> {
    let mut calls = Vec::with_capacity(response.chunks.len() + 1);

    if let Incoming::Callback { query_id, .. } = incoming {
        let mut ack = AnswerCallbackQuery::new(query_id.clone());
        if let Some(notice) = &response.notice {
            ack.text = Some(notice.text.clone());
            ack.show_alert = notice.alert.then_some(true);
        }
        calls.push(Outgoing::Answer(ack));
    }

    let Some(chat_id) = incoming.chat_id() else {
        return calls;
    };
    let edit_target = match (incoming, response.delivery) {
        (Incoming::Callback { origin: Some((_, message_id)), .. }, Delivery::EditOrSend) => {
            Some(*message_id)
        }
        _ => None,
    };
    let markup = response.has_keyboard().then(|| keyboard(&response.keyboard));

    let last = response.chunks.len().saturating_sub(1);
    for (i, text) in response.chunks.iter().enumerate() {
        let markup = if i == last { markup.clone() } else { None };

        let mut send = SendMessage::new(chat_id, text.as_str());
        send.parse_mode = Some(ParseMode::Markdown);
        if response.disable_preview {
            send.link_preview_options = Some(no_preview());
        }
        send.reply_markup = markup.clone().map(Into::into);

        match edit_target {
            Some(message_id) if i == 0 => {
                let mut edit = EditMessageText::new(chat_id, message_id, text.as_str());
                edit.parse_mode = Some(ParseMode::Markdown);
                edit.link_preview_options = send.link_preview_options.clone();
                edit.reply_markup = markup;
                calls.push(Outgoing::EditOrSend {
                    edit,
                    fallback: send,
                });
            }
            _ => calls.push(Outgoing::Send(send)),
        }
    }
    calls
}

/// Calls answering `incoming`; empty for a command addressed to another bot
pub fn answer(responder: &Responder<'_>, username: &str, incoming: &Incoming) -> Vec<Outgoing> {
    let Some(event) = incoming.event() else {
        // Nothing to show, but the client keeps spinning until acknowledged
        return plan(incoming, &Response::acknowledgement());
    };
    if !event.addressed_to(username) {
        debug!("ignoring command for another bot");
        return Vec::new();
    }

    let response = responder.respond(&event);
    info!(
        event = event.kind(),
        topic = response.topic.as_deref().unwrap_or("-"),
        chunks = response.chunks.len(),
        "answering"
    );
    plan(incoming, &response)
}

/// Apology after a failed delivery
pub fn failure_plan(incoming: &Incoming) -> Vec<Outgoing> {
    incoming
        .chat_id()
        .map(|chat_id| Outgoing::Send(SendMessage::new(chat_id, MESSAGE_FAILURE_TEXT)))
        .into_iter()
        .collect()
}

/// Command list published with setMyCommands
pub fn bot_commands() -> Vec<BotCommand> {
    Command::ALL
        .iter()
        .map(|c| BotCommand::new(c.name(), c.description()))
        .collect()
}

async fn send(bot: &Bot, send: &SendMessage) -> ResponseResult<()> {
    let mut request = bot.send_message(send.chat_id.clone(), send.text.clone());
    *request.payload_mut() = send.clone();
    request.await?;
    Ok(())
}

/// Perform `calls` in order, stopping at the first failed message.
///
/// A refused callback acknowledgement is only logged.
pub async fn execute(bot: &Bot, calls: &[Outgoing]) -> ResponseResult<()> {
    for call in calls {
        match call {
            Outgoing::Answer(ack) => {
                let mut request = bot.answer_callback_query(ack.callback_query_id.clone());
                *request.payload_mut() = ack.clone();
                if let Err(e) = request.await {
                    warn!("callback not acknowledged: {}", e);
                }
            }
            Outgoing::Send(message) => send(bot, message).await?,
            Outgoing::EditOrSend { edit, fallback } => {
                let mut request =
                    bot.edit_message_text(edit.chat_id.clone(), edit.message_id, edit.text.clone());
                *request.payload_mut() = edit.clone();
                match request.await {
                    Ok(_) => {}
                    Err(RequestError::Api(ApiError::MessageNotModified)) => {
                        debug!("message already up to date")
                    }
                    Err(e) => {
                        debug!("edit refused, sending instead: {}", e);
                        send(bot, fallback).await?;
                    }
                }
            }
        }
    }
    Ok(())
}

async fn deliver(bot: &Bot, data: &BotData, incoming: Incoming) {
    let calls = answer(&data.responder, &data.username, &incoming);
    if let Err(e) = execute(bot, &calls).await {
        error!("delivery failed: {}", e);
        if let Err(e) = execute(bot, &failure_plan(&incoming)).await {
            warn!("apology not delivered: {}", e);
        }
    }
}

pub async fn message_handler(bot: Bot, msg: Message, data: Arc<BotData>) -> ResponseResult<()> {
    let Some(incoming) = Incoming::from_message(&msg) else {
        debug!("ignoring message without text");
        return Ok(());
    };
    let span = info_span!("message", chat = msg.chat.id.0);
    deliver(&bot, &data, incoming).instrument(span).await;
    Ok(())
}

pub async fn callback_handler(
    bot: Bot,
    query: CallbackQuery,
    data: Arc<BotData>,
) -> ResponseResult<()> {
    let span = info_span!("callback", id = %query.id);
    deliver(&bot, &data, Incoming::from_callback(&query))
        .instrument(span)
        .await;
    Ok(())
}

/// Message and callback branches; other update kinds reach the default handler
pub fn schema() -> UpdateHandler<RequestError> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler))
}
