// src/app/clavier.rs
//
// Clavier egui -> événements du noyau
// -----------------------------------
// - Event::Text : chiffres, '.', opérateurs, '='
// - Event::Key  : Enter, Escape, Backspace (seulement à l’appui)
//
// Les noms de touches sont ceux de `Evenement::depuis_touche`.

use eframe::egui;

use crate::noyau::Evenement;

pub fn evenements_clavier(events: &[egui::Event]) -> Vec<Evenement> {
    let mut out = Vec::new();

    for ev in events {
        match ev {
            egui::Event::Text(t) => {
                // un Text peut contenir plusieurs caractères (collage, IME)
                let mut buf = [0u8; 4];
                for c in t.chars() {
                    if let Some(e) = Evenement::depuis_touche(c.encode_utf8(&mut buf)) {
                        out.push(e);
                    }
                }
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                let nom = match key {
                    egui::Key::Enter => "Enter",
                    egui::Key::Escape => "Escape",
                    egui::Key::Backspace => "Backspace",
                    _ => continue,
                };
                if let Some(e) = Evenement::depuis_touche(nom) {
                    out.push(e);
                }
            }
            _ => {}
        }
    }

    out
}
