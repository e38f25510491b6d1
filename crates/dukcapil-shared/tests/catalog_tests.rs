//! Catalog lookups and completeness of every table reference.

use dukcapil_shared::catalog::{catalog, Catalog, TopicKind};
use dukcapil_shared::content::CATATAN;
use dukcapil_shared::keywords::{priority_list, KEYWORDS};
use dukcapil_shared::menu::MenuNavigator;
use dukcapil_shared::{CoreError, Responder, FALLBACK, HOME};

#[test]
fn test_no_dangling_references() {
    let responder = Responder::builtin(4096).unwrap();
    assert!(
        responder.dangling_topics().is_empty(),
        "dangling: {:?}",
        responder.dangling_topics()
    );
}

#[test]
fn test_every_keyword_topic_resolves() {
    for (topic, _) in KEYWORDS {
        assert!(catalog().get(topic).is_ok(), "{} missing", topic);
    }
    for rule in priority_list() {
        assert!(catalog().get(rule.topic).is_ok(), "{} missing", rule.topic);
    }
    assert!(catalog().get(FALLBACK).is_ok());
}

#[test]
fn test_every_menu_transition_resolves() {
    let nav = MenuNavigator::default();
    for id in nav.reachable_ids() {
        assert!(catalog().get(id).is_ok(), "{} missing", id);
        assert!(nav.resolve(id).is_ok(), "{} not navigable", id);
    }
}

#[test]
fn test_unknown_topic() {
    assert_eq!(
        catalog().get("ktp_palsu"),
        Err(CoreError::UnknownTopic("ktp_palsu".to_string()))
    );
}

#[test]
fn test_children_in_menu_order() {
    let ids: Vec<&str> = catalog()
        .children_of("menu_kk")
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(
        ids,
        vec![
            "kk_alamat",
            "kk_pekerjaan",
            "kk_status",
            "kk_goldar",
            "kk_gabung",
            "kk_pisah",
            "kk_hilang"
        ]
    );
}

#[test]
fn test_leaf_has_no_children() {
    assert!(catalog().children_of("ktp_baru").unwrap().is_empty());
    assert_eq!(catalog().topic("ktp_baru").unwrap().kind, TopicKind::Leaf);
}

#[test]
fn test_home_is_category() {
    let home = catalog().topic(HOME).unwrap();
    assert_eq!(home.kind, TopicKind::Category);
    assert_eq!(home.children.len(), 9);
}

#[test]
fn test_details_carry_note() {
    for id in ["ktp_hilang", "kk_alamat", "akta_mati_hilang", "pendatang_masuk"] {
        assert!(catalog().get(id).unwrap().ends_with(CATATAN), "{} lacks note", id);
    }
    // The general certificate answers have no footer
    assert!(!catalog().get("akta_lahir_umum").unwrap().contains(CATATAN));
}

#[test]
fn test_catalog_is_shared() {
    assert!(std::ptr::eq(catalog(), catalog()));
    assert_eq!(catalog().len(), Catalog::builtin().len());
}
