// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + clavier.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre par frame : horloge du moteur -> clavier -> vue -> repaint programmé.

pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::reglages::Theme;

pub fn appliquer_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(match theme {
        Theme::Sombre => egui::Visuals::dark(),
        Theme::Clair => egui::Visuals::light(),
    });
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (temps, events) = ctx.input(|i| (i.time, i.events.clone()));

        // Retour automatique après erreur (avant toute nouvelle entrée)
        self.tic(temps);

        for evt in clavier::evenements_clavier(&events) {
            self.envoyer(evt);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // Pas d’entrée pendant l’erreur : il faut se réveiller tout seul à l’échéance.
        if let Some(restant) = self.moteur.retour_dans() {
            ctx.request_repaint_after(restant);
        }
    }
}
