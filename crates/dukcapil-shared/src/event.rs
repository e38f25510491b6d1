//! Incoming user events, independent of the chat transport.

use serde::{Deserialize, Serialize};

/// Recognized slash commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Session start: home menu
    Start,
    /// Home menu
    Menu,
    /// FAQ leaf
    Help,
    /// About text
    About,
    /// Shortcut to the Sidnok answer
    Sidnok,
    /// Shortcut to office hours and address
    Info,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Start,
        Command::Menu,
        Command::Help,
        Command::About,
        Command::Sidnok,
        Command::Info,
    ];

    /// Parse a command name, ignoring case and any `@botname` suffix
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.split('@').next().unwrap_or(name);
        match name.to_lowercase().as_str() {
            "start" => Some(Self::Start),
            "menu" => Some(Self::Menu),
            "help" => Some(Self::Help),
            "about" => Some(Self::About),
            "sidnok" => Some(Self::Sidnok),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Menu => "menu",
            Self::Help => "help",
            Self::About => "about",
            Self::Sidnok => "sidnok",
            Self::Info => "info",
        }
    }

    /// Menu description for the transport's command list
    pub fn description(&self) -> &'static str {
        match self {
            Self::Start => "Mulai & tampilkan menu utama",
            Self::Menu => "Tampilkan menu utama",
            Self::Help => "Contoh pertanyaan (FAQ)",
            Self::About => "Tentang bot ini",
            Self::Sidnok => "Layanan online Sidnok",
            Self::Info => "Jam & alamat kantor",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.name())
    }
}

/// Entity annotation on free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Url,
    Mention,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub kind: EntityKind,
    pub offset: usize,
    pub length: usize,
}

/// One user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// `/name args`
    Command { name: String, args: Option<String> },
    /// Inline keyboard press carrying callback data
    Button { id: String },
    /// Anything else
    Text {
        text: String,
        #[serde(default)]
        entities: Vec<EntitySpan>,
    },
}

impl Event {
    /// Split a message into a command or free text
    pub fn from_message(text: &str, entities: Vec<EntitySpan>) -> Self {
        let trimmed = text.trim_start();
        if let Some(rest) = trimmed.strip_prefix('/') {
            let mut parts = rest.splitn(2, char::is_whitespace);
            let name = parts.next().unwrap_or_default();
            if !name.is_empty() {
                let args = parts
                    .next()
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(str::to_string);
                return Event::Command {
                    name: name.to_string(),
                    args,
                };
            }
        }
        Event::Text {
            text: text.to_string(),
            entities,
        }
    }

    /// False only for a command suffixed with another bot's `@username`.
    /// Usernames compare case-insensitively.
    pub fn addressed_to(&self, username: &str) -> bool {
        match self {
            Event::Command { name, .. } => match name.split_once('@') {
                Some((_, target)) => target.eq_ignore_ascii_case(username),
                None => true,
            },
            _ => true,
        }
    }

    pub fn button(id: impl Into<String>) -> Self {
        Event::Button { id: id.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Event::Command { .. } => "command",
            Event::Button { .. } => "button",
            Event::Text { .. } => "text",
        }
    }
}
