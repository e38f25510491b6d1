//! Menu navigator state machine.

use dukcapil_shared::catalog::catalog;
use dukcapil_shared::content::{HOME_TEXT, SIDNOK_URL};
use dukcapil_shared::menu::{Button, ButtonAction, MenuNavigator, BACK_LABEL};
use dukcapil_shared::{CoreError, HOME};

fn navigate_ids(view: &dukcapil_shared::MenuView) -> Vec<String> {
    view.buttons()
        .filter_map(|b| match &b.action {
            ButtonAction::Navigate(id) => Some(id.clone()),
            ButtonAction::OpenLink(_) => None,
        })
        .collect()
}

#[test]
fn test_home_buttons_in_fixed_order() {
    let view = MenuNavigator::default().resolve(HOME).unwrap();
    assert_eq!(view.text, HOME_TEXT);

    let labels: Vec<&str> = view.buttons().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "📄 KTP",
            "🏠 KK",
            "📜 Akta Kelahiran",
            "⚰️ Akta Kematian",
            "🧒 KIA Anak",
            "🚚 Pindah / Datang",
            "🕒 Jam & Alamat",
            "🌐 Sidnok Online",
            "📚 FAQ/Menu Bantuan",
        ]
    );

    let row_sizes: Vec<usize> = view.keyboard.iter().map(|row| row.len()).collect();
    assert_eq!(row_sizes, vec![2, 2, 2, 2, 1]);

    // Sidnok opens the portal instead of navigating
    assert_eq!(view.keyboard[3][1], Button::link("🌐 Sidnok Online", SIDNOK_URL));
    assert!(!navigate_ids(&view).contains(&HOME.to_string()));
}

#[test]
fn test_ktp_menu_has_four_leaves_and_back() {
    let view = MenuNavigator::default().resolve("menu_ktp").unwrap();
    assert_eq!(view.text, "📄 *Layanan KTP* — pilih topik:");
    assert_eq!(
        navigate_ids(&view),
        vec!["ktp_baru", "ktp_hilang", "ktp_ubah", "ktp_perpanjang", HOME]
    );
    assert!(view.keyboard.iter().all(|row| row.len() == 1));
    assert_eq!(view.keyboard.last().unwrap(), &vec![Button::back()]);
}

#[test]
fn test_leaf_has_only_back() {
    let view = MenuNavigator::default().resolve("ktp_hilang").unwrap();
    assert_eq!(view.text, catalog().get("ktp_hilang").unwrap());
    assert_eq!(view.keyboard, vec![vec![Button::navigate(BACK_LABEL, HOME)]]);
}

#[test]
fn test_unknown_button() {
    let result = MenuNavigator::default().resolve("menu_lama");
    assert_eq!(result, Err(CoreError::UnknownButton("menu_lama".to_string())));
}

#[test]
fn test_certificate_menu_shows_general_answer() {
    let view = MenuNavigator::default().resolve("menu_akta_lahir").unwrap();
    assert_eq!(view.text, catalog().get("akta_lahir_umum").unwrap());
    assert_eq!(navigate_ids(&view), vec!["akta_lahir_hilang", HOME]);
}

#[test]
fn test_every_non_home_view_returns_home() {
    let nav = MenuNavigator::default();
    for id in nav.reachable_ids() {
        let view = nav.resolve(id).unwrap();
        if id == HOME {
            continue;
        }
        let last = view.keyboard.last().and_then(|row| row.last()).unwrap();
        assert_eq!(last, &Button::back(), "{} has no way back", id);
    }
}

#[test]
fn test_all_rendered_buttons_resolve() {
    let nav = MenuNavigator::default();
    let mut pending = vec![HOME.to_string()];
    let mut seen = Vec::new();
    while let Some(id) = pending.pop() {
        if seen.contains(&id) {
            continue;
        }
        let view = nav.resolve(&id).unwrap();
        pending.extend(navigate_ids(&view));
        seen.push(id);
    }
    // home, 8 categories, 15 leaves; sidnok is only reachable as a link
    assert_eq!(seen.len(), 1 + 8 + 15);
}

#[test]
fn test_resolve_is_repeatable() {
    let nav = MenuNavigator::default();
    assert_eq!(nav.resolve("menu_kk"), nav.resolve("menu_kk"));
}
