//! Menu navigator - inline keyboard state machine.
//!
//! States are category topics plus `home`. Every non-home view ends with a
//! back button to `home`; menus are at most two levels deep.

use crate::catalog::{catalog, Catalog, Topic, TopicKind, HOME};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

pub const BACK_LABEL: &str = "⬅️ Kembali";

/// What pressing a button does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ButtonAction {
    /// Send this id back as callback data
    Navigate(String),
    /// Open an external URL in the client
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn navigate(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Navigate(id.into()),
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::OpenLink(url.into()),
        }
    }

    pub fn back() -> Self {
        Self::navigate(BACK_LABEL, HOME)
    }

    /// Button for a topic: a link when the topic has one
    fn for_topic(topic: &Topic) -> Self {
        match topic.link {
            Some(url) => Self::link(topic.label, url),
            None => Self::navigate(topic.label, topic.id),
        }
    }
}

/// Text plus keyboard rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub topic: String,
    pub text: String,
    pub keyboard: Vec<Vec<Button>>,
}

impl MenuView {
    /// Buttons in display order
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.keyboard.iter().flatten()
    }
}

/// Resolved meaning of a button id
#[derive(Debug, Clone, Copy)]
pub enum Transition<'a> {
    NavigateCategory(&'a Topic),
    ShowLeaf(&'a Topic),
    OpenExternalLink(&'a Topic, &'a str),
    Unknown,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuNavigator<'a> {
    catalog: &'a Catalog,
}

impl Default for MenuNavigator<'static> {
    fn default() -> Self {
        Self::new(catalog())
    }
}

impl<'a> MenuNavigator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn transition(&self, button_id: &str) -> Transition<'a> {
        let Ok(topic) = self.catalog.topic(button_id) else {
            return Transition::Unknown;
        };
        match (topic.kind, topic.link) {
            (TopicKind::Category, _) => Transition::NavigateCategory(topic),
            (TopicKind::Leaf, Some(url)) => Transition::OpenExternalLink(topic, url),
            (TopicKind::Leaf, None) => Transition::ShowLeaf(topic),
        }
    }

    /// Render the view behind a button id
    pub fn resolve(&self, button_id: &str) -> CoreResult<MenuView> {
        match self.transition(button_id) {
            Transition::NavigateCategory(topic) => self.render_category(topic),
            Transition::ShowLeaf(topic) => Ok(MenuView {
                topic: topic.id.to_string(),
                text: topic.body.clone(),
                keyboard: vec![vec![Button::back()]],
            }),
            Transition::OpenExternalLink(topic, url) => Ok(MenuView {
                topic: topic.id.to_string(),
                text: topic.body.clone(),
                keyboard: vec![vec![Button::link(topic.label, url)], vec![Button::back()]],
            }),
            Transition::Unknown => Err(CoreError::UnknownButton(button_id.to_string())),
        }
    }

    /// Initial state for a fresh session
    pub fn home(&self) -> CoreResult<MenuView> {
        self.resolve(HOME)
    }

    fn render_category(&self, topic: &Topic) -> CoreResult<MenuView> {
        let buttons: Vec<Button> = self
            .catalog
            .children_of(topic.id)?
            .into_iter()
            .map(Button::for_topic)
            .collect();

        let mut keyboard: Vec<Vec<Button>> = buttons
            .chunks(topic.columns)
            .map(|row| row.to_vec())
            .collect();
        if topic.id != HOME {
            keyboard.push(vec![Button::back()]);
        }

        Ok(MenuView {
            topic: topic.id.to_string(),
            text: topic.body.clone(),
            keyboard,
        })
    }

    /// Every id a rendered keyboard can send back
    pub fn reachable_ids(&self) -> Vec<&'a str> {
        let mut ids = vec![HOME];
        for topic in self.catalog.topics() {
            if topic.kind == TopicKind::Category {
                ids.push(topic.id);
                ids.extend(topic.children.iter().copied());
            }
        }
        ids.sort();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_kinds() {
        let nav = MenuNavigator::default();
        assert!(matches!(nav.transition("menu_kk"), Transition::NavigateCategory(_)));
        assert!(matches!(nav.transition("kk_pisah"), Transition::ShowLeaf(_)));
        assert!(matches!(nav.transition("sidnok"), Transition::OpenExternalLink(_, _)));
        assert!(matches!(nav.transition("menu_xyz"), Transition::Unknown));
    }

    #[test]
    fn test_terminal_category_only_back() {
        let view = MenuNavigator::default().resolve("menu_kia").unwrap();
        assert_eq!(view.keyboard, vec![vec![Button::back()]]);
    }

    #[test]
    fn test_info_has_link_then_back() {
        let view = MenuNavigator::default().resolve("menu_info").unwrap();
        let actions: Vec<&ButtonAction> = view.buttons().map(|b| &b.action).collect();
        assert_eq!(
            actions,
            vec![
                &ButtonAction::OpenLink(crate::content::SIDNOK_URL.to_string()),
                &ButtonAction::Navigate(HOME.to_string()),
            ]
        );
    }
}
