//! Content catalog: every addressable topic and its response text.
//!
//! The catalog is built once per process and never mutated. Lookups are
//! pure; a missing id is a defect in the static tables, not a user error.

use crate::content::{self, SIDNOK_URL};
use crate::error::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root menu, entered on every session start.
pub const HOME: &str = "home";

/// Reserved topic returned when free text matches no keyword rule.
pub const FALLBACK: &str = "fallback";

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Process-wide read-only catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Topic kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicKind {
    /// Final answer, rendered with a single back button
    Leaf,
    /// Submenu; a category without children is terminal
    Category,
}

/// One informational answer or one category menu
#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub kind: TopicKind,
    /// Caption used when this topic appears as a menu button
    pub label: &'static str,
    pub body: String,
    /// Ordered submenu (categories only)
    pub children: Vec<&'static str>,
    /// External URL; menus render such topics as link buttons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    /// Buttons per row when rendered as a menu
    pub columns: usize,
}

impl Topic {
    pub fn leaf(id: &'static str, label: &'static str, body: impl Into<String>) -> Self {
        Self {
            id,
            kind: TopicKind::Leaf,
            label,
            body: body.into(),
            children: Vec::new(),
            link: None,
            columns: 1,
        }
    }

    pub fn category(
        id: &'static str,
        label: &'static str,
        body: impl Into<String>,
        children: &[&'static str],
    ) -> Self {
        Self {
            id,
            kind: TopicKind::Category,
            label,
            body: body.into(),
            children: children.to_vec(),
            link: None,
            columns: 1,
        }
    }

    pub fn with_link(mut self, url: &'static str) -> Self {
        self.link = Some(url);
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == TopicKind::Leaf
    }

    /// Category with no submenu entries
    pub fn is_terminal(&self) -> bool {
        self.kind == TopicKind::Category && self.children.is_empty()
    }
}

/// Ordered topic registry with an id index
#[derive(Debug)]
pub struct Catalog {
    topics: Vec<Topic>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog from topics. Later duplicates are ignored.
    pub fn new(topics: Vec<Topic>) -> Self {
        let mut index = HashMap::with_capacity(topics.len());
        for (pos, topic) in topics.iter().enumerate() {
            index.entry(topic.id).or_insert(pos);
        }
        Self { topics, index }
    }

    /// The Dispendukcapil Semarang catalog.
    pub fn builtin() -> Self {
        let detail = |id: &'static str, label: &'static str| {
            Topic::leaf(id, label, content::detail_text(id).unwrap_or_default())
        };

        Self::new(vec![
            // Menus
            Topic::category(
                HOME,
                "🏠 Menu Utama",
                content::HOME_TEXT,
                &[
                    "menu_ktp",
                    "menu_kk",
                    "menu_akta_lahir",
                    "menu_akta_mati",
                    "menu_kia",
                    "menu_pindah",
                    "menu_info",
                    "sidnok",
                    "menu_faq",
                ],
            )
            .with_columns(2),
            Topic::category(
                "menu_ktp",
                "📄 KTP",
                "📄 *Layanan KTP* — pilih topik:",
                &["ktp_baru", "ktp_hilang", "ktp_ubah", "ktp_perpanjang"],
            ),
            Topic::category(
                "menu_kk",
                "🏠 KK",
                "🏠 *Layanan KK* — pilih topik:",
                &[
                    "kk_alamat",
                    "kk_pekerjaan",
                    "kk_status",
                    "kk_goldar",
                    "kk_gabung",
                    "kk_pisah",
                    "kk_hilang",
                ],
            ),
            Topic::category(
                "menu_akta_lahir",
                "📜 Akta Kelahiran",
                content::akta_lahir_text(),
                &["akta_lahir_hilang"],
            ),
            Topic::category(
                "menu_akta_mati",
                "⚰️ Akta Kematian",
                content::akta_mati_text(),
                &["akta_mati_hilang"],
            ),
            Topic::category("menu_kia", "🧒 KIA Anak", content::KIA_TEXT, &[]),
            Topic::category(
                "menu_pindah",
                "🚚 Pindah / Datang",
                "🚚 *Pindah/Kedatangan Domisili* — pilih:",
                &["pindah_keluar", "pendatang_masuk"],
            ),
            Topic::category("menu_info", "🕒 Jam & Alamat", content::info_text(), &["sidnok"]),
            Topic::category("menu_faq", "📚 FAQ/Menu Bantuan", content::FAQ_TEXT, &[]),
            // KTP
            detail("ktp_baru", "🆕 KTP Baru"),
            detail("ktp_hilang", "🧾 KTP Hilang"),
            detail("ktp_ubah", "✏️ Ubah Data KTP"),
            detail("ktp_perpanjang", "🔄 Masa Berlaku KTP"),
            // KK
            detail("kk_alamat", "🏠 Ubah Alamat KK"),
            detail("kk_pekerjaan", "💼 Ubah Pekerjaan KK"),
            detail("kk_status", "💍 Ubah Status KK"),
            detail("kk_goldar", "🅾️ Ubah Golongan Darah"),
            detail("kk_gabung", "👨‍👩‍👧 Gabung KK"),
            detail("kk_pisah", "🧍 Pisah KK"),
            detail("kk_hilang", "🧾 KK Hilang"),
            // Akta
            Topic::leaf("akta_lahir_umum", "📜 Akta Kelahiran", content::akta_lahir_text()),
            detail("akta_lahir_hilang", "🧾 Akta Lahir Hilang"),
            Topic::leaf("akta_mati_umum", "⚰️ Akta Kematian", content::akta_mati_text()),
            detail("akta_mati_hilang", "🧾 Akta Kematian Hilang"),
            // KIA, pindah/datang
            Topic::leaf("kia", "🧒 KIA Anak", content::KIA_TEXT),
            detail("pindah_keluar", "🚚 Perpindahan Keluar"),
            detail("pendatang_masuk", "📦 Pendatang Masuk"),
            // Info & online
            Topic::leaf("jam", "🕒 Jam Operasional", content::JAM_BUKA),
            Topic::leaf("alamat", "📍 Alamat Kantor", content::ALAMAT),
            Topic::leaf("sidnok", "🌐 Sidnok Online", content::sidnok_text()).with_link(SIDNOK_URL),
            Topic::leaf("faq", "📚 FAQ", content::FAQ_TEXT),
            Topic::leaf("about", "ℹ️ Tentang Bot", content::about_text()),
            Topic::leaf(FALLBACK, "❓ Bantuan", content::FALLBACK_TEXT),
        ])
    }

    pub fn topic(&self, id: &str) -> CoreResult<&Topic> {
        self.index
            .get(id)
            .map(|&pos| &self.topics[pos])
            .ok_or_else(|| CoreError::UnknownTopic(id.to_string()))
    }

    /// Body text of a topic
    pub fn get(&self, id: &str) -> CoreResult<&str> {
        self.topic(id).map(|t| t.body.as_str())
    }

    /// Ordered children of a category; empty for leaves and terminal categories
    pub fn children_of(&self, id: &str) -> CoreResult<Vec<&Topic>> {
        let topic = self.topic(id)?;
        topic.children.iter().map(|child| self.topic(child)).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Topics in definition order
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Ids referenced by children or by `references` that do not resolve.
    ///
    /// Empty result means the catalog is complete.
    pub fn dangling<'a, I>(&self, references: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut missing = Vec::new();
        for topic in &self.topics {
            for child in &topic.children {
                if !self.contains(child) {
                    missing.push(child.to_string());
                }
            }
        }
        for id in references {
            if !self.contains(id) {
                missing.push(id.to_string());
            }
        }
        missing.sort();
        missing.dedup();
        missing
    }
}
