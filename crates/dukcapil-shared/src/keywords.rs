//! Keyword table and match priority list for free-text questions.
//!
//! Phrases are lowercase substrings; a rule fires when the normalized input
//! contains any of them. Compound rules additionally fire when an anchor word
//! and one of its action words are both present ("daftar ktp").
//!
//! The priority list order is significant: narrower intents ("ktp hilang")
//! sit above broader ones sharing the same anchor.

use serde::Serialize;

/// Trigger phrases per topic
pub const KEYWORDS: &[(&str, &[&str])] = &[
    ("ktp_hilang", &["ktp hilang", "kehilangan ktp", "ktp ilang"]),
    ("ktp_baru", &["ktp baru", "buat ktp", "daftar ktp", "pembuatan ktp"]),
    ("ktp_ubah", &["ubah ktp", "koreksi ktp", "ganti data ktp", "perubahan ktp"]),
    ("ktp_perpanjang", &["perpanjang ktp", "masa berlaku ktp", "ktp expired", "ktp mati"]),
    ("kk_hilang", &["kk hilang", "kehilangan kk", "kk ilang"]),
    ("kk_alamat", &["ubah alamat kk", "pindah alamat kk", "alamat kk"]),
    ("kk_pekerjaan", &["pekerjaan kk", "ubah pekerjaan kk", "ganti pekerjaan kk"]),
    ("kk_status", &["status kk", "ubah status kk", "nikah kk", "cerai kk"]),
    ("kk_goldar", &["golongan darah kk", "goldar kk", "gologan darah kk", "g.darah kk"]),
    ("kk_gabung", &["gabung kk", "penggabungan kk", "join kk"]),
    ("kk_pisah", &["pisah kk", "pemisahan kk"]),
    ("akta_lahir_umum", &["akta kelahiran", "buat akta lahir"]),
    ("akta_lahir_hilang", &["akta kelahiran hilang", "kehilangan akta kelahiran"]),
    ("akta_mati_umum", &["akta kematian", "buat akta kematian"]),
    ("akta_mati_hilang", &["akta kematian hilang", "kehilangan akta kematian"]),
    ("kia", &["kia", "kartu identitas anak"]),
    ("pindah_keluar", &["pindah domisili", "surat pindah", "pindah keluar"]),
    ("pendatang_masuk", &["pendatang", "kedatangan", "masuk domisili", "datang"]),
    ("jam", &["jam", "buka", "operasional"]),
    ("alamat", &["alamat", "lokasi", "kantor dimana", "dimana"]),
    (
        "sidnok",
        &["sidnok", "online dukcapil", "layanan online", "online ktp", "online kk", "online akta"],
    ),
    ("faq", &["menu", "faq", "help", "bantuan", "panduan"]),
];

/// Action words that, together with "ktp", mean a new card
pub const KTP_NEW_ACTIONS: &[&str] = &["baru", "buat", "daftar", "pembuatan"];

/// Action words that, together with "ktp", mean a data change
pub const KTP_CHANGE_ACTIONS: &[&str] = &["ubah", "koreksi", "ganti", "perubahan"];

/// Trigger phrases for a topic
pub fn phrases(topic: &str) -> Option<&'static [&'static str]> {
    KEYWORDS
        .iter()
        .find(|(id, _)| *id == topic)
        .map(|(_, phrases)| *phrases)
}

/// One condition of a keyword rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    /// Input contains any phrase
    AnyPhrase { phrases: &'static [&'static str] },
    /// Input contains the anchor and any action word
    Anchored {
        anchor: &'static str,
        actions: &'static [&'static str],
    },
}

impl Predicate {
    /// Phrase that satisfied the predicate, if any. `text` must be normalized.
    pub fn find(&self, text: &str) -> Option<&'static str> {
        match self {
            Predicate::AnyPhrase { phrases } => phrases.iter().copied().find(|p| text.contains(p)),
            Predicate::Anchored { anchor, actions } => {
                if !text.contains(anchor) {
                    return None;
                }
                actions.iter().copied().find(|a| text.contains(a))
            }
        }
    }
}

/// Predicates OR-ed together, mapping to one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRule {
    pub topic: &'static str,
    pub predicates: Vec<Predicate>,
}

impl KeywordRule {
    /// Rule over the topic's phrase list from [`KEYWORDS`]
    fn phrases_of(topic: &'static str) -> Self {
        Self {
            topic,
            predicates: vec![Predicate::AnyPhrase {
                phrases: phrases(topic).unwrap_or(&[]),
            }],
        }
    }

    fn or_anchored(mut self, anchor: &'static str, actions: &'static [&'static str]) -> Self {
        self.predicates.push(Predicate::Anchored { anchor, actions });
        self
    }

    pub fn find(&self, text: &str) -> Option<&'static str> {
        self.predicates.iter().find_map(|p| p.find(text))
    }
}

/// The match priority list, evaluated top to bottom.
pub fn priority_list() -> Vec<KeywordRule> {
    vec![
        // KTP
        KeywordRule::phrases_of("ktp_hilang"),
        KeywordRule::phrases_of("ktp_baru").or_anchored("ktp", KTP_NEW_ACTIONS),
        KeywordRule::phrases_of("ktp_perpanjang"),
        KeywordRule::phrases_of("ktp_ubah").or_anchored("ktp", KTP_CHANGE_ACTIONS),
        // KK
        KeywordRule::phrases_of("kk_hilang"),
        KeywordRule::phrases_of("kk_alamat"),
        KeywordRule::phrases_of("kk_pekerjaan"),
        KeywordRule::phrases_of("kk_status"),
        KeywordRule::phrases_of("kk_goldar"),
        KeywordRule::phrases_of("kk_gabung"),
        KeywordRule::phrases_of("kk_pisah"),
        // Akta
        KeywordRule::phrases_of("akta_lahir_hilang"),
        KeywordRule::phrases_of("akta_lahir_umum"),
        KeywordRule::phrases_of("akta_mati_hilang"),
        KeywordRule::phrases_of("akta_mati_umum"),
        KeywordRule::phrases_of("kia"),
        // Pindah / datang
        KeywordRule::phrases_of("pindah_keluar"),
        KeywordRule::phrases_of("pendatang_masuk"),
        // Sidnok / info
        KeywordRule::phrases_of("sidnok"),
        KeywordRule::phrases_of("jam"),
        KeywordRule::phrases_of("alamat"),
        KeywordRule::phrases_of("faq"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_are_lowercase_and_non_empty() {
        for (topic, phrases) in KEYWORDS {
            assert!(!phrases.is_empty(), "{} has no phrases", topic);
            for phrase in *phrases {
                assert!(!phrase.is_empty());
                assert_eq!(*phrase, phrase.to_lowercase(), "{} not lowercase", phrase);
            }
        }
    }

    #[test]
    fn test_every_keyword_topic_is_ranked() {
        let ranked: Vec<&str> = priority_list().iter().map(|r| r.topic).collect();
        for (topic, _) in KEYWORDS {
            assert!(ranked.contains(topic), "{} never evaluated", topic);
        }
        assert_eq!(ranked.len(), KEYWORDS.len());
    }

    #[test]
    fn test_anchored_needs_both_words() {
        let p = Predicate::Anchored {
            anchor: "ktp",
            actions: KTP_NEW_ACTIONS,
        };
        assert_eq!(p.find("mau daftar ktp"), Some("daftar"));
        assert_eq!(p.find("mau daftar"), None);
        assert_eq!(p.find("ktp saya"), None);
    }

    #[test]
    fn test_phrase_match_is_substring() {
        let rule = KeywordRule::phrases_of("jam");
        assert_eq!(rule.find("jam berapa buka?"), Some("jam"));
        assert!(rule.find("operasionalnya").is_some());
        assert_eq!(rule.find("tutup"), None);
    }
}
