//! Command implementations. Each returns a serializable report; rendering
//! lives in [`crate::output`].

use anyhow::{Context, Result};
use dukcapil_shared::keywords::phrases;
use dukcapil_shared::{
    catalog, chunk, matcher, Classification, Event, Responder, Response, TopicKind,
    MAX_MESSAGE_CHARS,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct AskReport {
    pub question: String,
    pub classification: Classification,
    pub response: Response,
}

/// Classify `text` and build the reply a chat user would get
pub fn ask(text: &str, limit: usize) -> Result<AskReport> {
    let responder = Responder::builtin(limit)?;
    let event = Event::from_message(text, Vec::new());
    Ok(AskReport {
        question: text.to_string(),
        classification: matcher().explain(text),
        response: responder.respond(&event),
    })
}

/// Reply to a button press with the given callback data
pub fn button(id: &str, limit: usize) -> Result<Response> {
    let responder = Responder::builtin(limit)?;
    Ok(responder.respond(&Event::button(id)))
}

#[derive(Debug, Serialize)]
pub struct TopicRow {
    pub id: &'static str,
    pub kind: TopicKind,
    pub label: &'static str,
    pub children: usize,
    pub chars: usize,
    /// Trigger phrases when free text can reach this topic
    pub phrases: Vec<&'static str>,
}

pub fn topics() -> Vec<TopicRow> {
    catalog()
        .topics()
        .map(|topic| TopicRow {
            id: topic.id,
            kind: topic.kind,
            label: topic.label,
            children: topic.children.len(),
            chars: topic.body.chars().count(),
            phrases: phrases(topic.id).unwrap_or_default().to_vec(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub topics: usize,
    pub rules: usize,
    pub reachable: usize,
    pub dangling: Vec<String>,
}

impl CheckReport {
    pub fn ok(&self) -> bool {
        self.dangling.is_empty()
    }
}

/// Catalog completeness over the built-in tables
pub fn check() -> Result<CheckReport> {
    let responder = Responder::builtin(MAX_MESSAGE_CHARS)?;
    Ok(CheckReport {
        topics: catalog().len(),
        rules: matcher().rules().len(),
        reachable: responder.navigator().reachable_ids().len(),
        dangling: responder.dangling_topics(),
    })
}

/// Chunks of a text file under `limit`
pub fn chunk_file(path: &Path, limit: usize) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(chunk(&text, limit)?)
}
