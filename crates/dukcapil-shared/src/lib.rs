//! Core of the Dispendukcapil Kota Semarang service-desk bot.
//!
//! Pure, transport-independent pieces: the content catalog, keyword table,
//! intent matcher, message formatter, menu navigator and the responder that
//! ties them to incoming events. All tables are immutable and process-wide.

pub mod catalog;
pub mod content;
pub mod error;
pub mod event;
pub mod formatter;
pub mod keywords;
pub mod matcher;
pub mod menu;
pub mod responder;

pub use catalog::{catalog, Catalog, Topic, TopicKind, FALLBACK, HOME};
pub use error::{CoreError, CoreResult};
pub use event::{Command, EntityKind, EntitySpan, Event};
pub use formatter::{chunk, MAX_MESSAGE_CHARS};
pub use matcher::{classify, matcher, Classification, IntentMatcher};
pub use menu::{Button, ButtonAction, MenuNavigator, MenuView};
pub use responder::{Delivery, Notice, Responder, Response};
