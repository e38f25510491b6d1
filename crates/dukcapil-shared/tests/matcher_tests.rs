//! Golden tests for free-text intent matching.
//!
//! Precedence follows the priority list verbatim; several cases below pin
//! the order-dependent outcomes.

use dukcapil_shared::keywords::KEYWORDS;
use dukcapil_shared::matcher::{classify, matcher};
use dukcapil_shared::FALLBACK;

#[test]
fn test_empty_input_falls_back() {
    assert_eq!(classify(""), FALLBACK);
    assert_eq!(classify("   \n\t"), FALLBACK);
}

#[test]
fn test_specific_ktp_lost_before_general_ktp() {
    assert_eq!(classify("ktp hilang"), "ktp_hilang");
    assert_eq!(classify("KTP Hilang"), "ktp_hilang");
    assert_eq!(classify("ktp hilang, mau buat baru"), "ktp_hilang");
    assert_eq!(classify("kehilangan ktp kemarin"), "ktp_hilang");
}

#[test]
fn test_kk_address_change() {
    assert_eq!(classify("ubah alamat kk"), "kk_alamat");
    assert_eq!(classify("pindah alamat kk gimana"), "kk_alamat");
}

#[test]
fn test_office_address_question() {
    assert_eq!(classify("dimana kantornya"), "alamat");
    assert_eq!(classify("lokasi dispendukcapil"), "alamat");
}

#[test]
fn test_unrelated_text_falls_back() {
    assert_eq!(classify("saya mau makan siang"), FALLBACK);
    assert_eq!(classify("halo"), FALLBACK);
}

#[test]
fn test_compound_ktp_new_card() {
    assert_eq!(classify("mau daftar ktp"), "ktp_baru");
    assert_eq!(classify("ktp anak saya baru 17 tahun"), "ktp_baru");
    assert_eq!(classify("pembuatan ktp"), "ktp_baru");
}

#[test]
fn test_compound_ktp_data_change() {
    assert_eq!(classify("koreksi nama di ktp"), "ktp_ubah");
    assert_eq!(classify("ganti data ktp"), "ktp_ubah");
}

#[test]
fn test_ktp_validity() {
    assert_eq!(classify("masa berlaku ktp"), "ktp_perpanjang");
    assert_eq!(classify("ktp expired"), "ktp_perpanjang");
}

#[test]
fn test_kk_rules() {
    assert_eq!(classify("kk hilang"), "kk_hilang");
    assert_eq!(classify("ubah pekerjaan kk"), "kk_pekerjaan");
    assert_eq!(classify("ubah status kk"), "kk_status");
    assert_eq!(classify("goldar kk salah"), "kk_goldar");
    assert_eq!(classify("gabung kk"), "kk_gabung");
    assert_eq!(classify("pemisahan kk"), "kk_pisah");
}

#[test]
fn test_lost_certificate_before_general_certificate() {
    assert_eq!(classify("akta kelahiran hilang"), "akta_lahir_hilang");
    assert_eq!(classify("akta kelahiran"), "akta_lahir_umum");
    assert_eq!(classify("akta kematian hilang"), "akta_mati_hilang");
    assert_eq!(classify("buat akta kematian"), "akta_mati_umum");
}

#[test]
fn test_moving_rules() {
    assert_eq!(classify("pindah domisili"), "pindah_keluar");
    assert_eq!(classify("pendatang baru"), "pendatang_masuk");
}

#[test]
fn test_info_rules_order() {
    assert_eq!(classify("sidnok"), "sidnok");
    assert_eq!(classify("layanan online"), "sidnok");
    assert_eq!(classify("jam buka kantor"), "jam");
    // Office hours outrank the address rule
    assert_eq!(classify("jam dan alamat"), "jam");
}

#[test]
fn test_help_words() {
    assert_eq!(classify("help"), "faq");
    assert_eq!(classify("panduan"), "faq");
}

#[test]
fn test_substring_not_whole_word() {
    // "kia" is matched anywhere in the input
    assert_eq!(classify("kiamat"), "kia");
}

#[test]
fn test_every_phrase_reaches_some_topic() {
    for (_, phrases) in KEYWORDS {
        for phrase in *phrases {
            assert_ne!(classify(phrase), FALLBACK, "phrase {:?} fell through", phrase);
        }
    }
}

#[test]
fn test_faq_examples_are_understood() {
    let examples = [
        "ktp hilang",
        "ktp baru",
        "ubah data ktp",
        "masa berlaku ktp",
        "kk hilang",
        "gabung kk",
        "pisah kk",
        "akta kelahiran",
        "akta kematian hilang",
        "kia",
        "pindah domisili",
        "pendatang masuk",
        "jam",
        "alamat",
        "sidnok",
    ];
    for example in examples {
        assert_ne!(classify(example), FALLBACK, "{:?} fell through", example);
    }
}

#[test]
fn test_classification_is_idempotent() {
    for input in ["ktp hilang", "dimana kantornya", "saya mau makan siang", ""] {
        assert_eq!(classify(input), classify(input));
        assert_eq!(matcher().explain(input), matcher().explain(input));
    }
}
