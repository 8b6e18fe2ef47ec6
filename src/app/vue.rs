// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : ligne “précédent + opérateur” au-dessus, opérande courant en grand
// - Pavé principal + rangée mémoire + pavé scientifique (affichable/masquable)
// - Tactile : gros boutons ; le focus est rendu après clic (sinon Enter
//   re-cliquerait le dernier bouton en plus de “=”)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{ActionUnaire, Evenement, Operation};

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_entete(ui);
        ui.add_space(6.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);

        self.ui_memoire(ui);

        if self.pave_scientifique {
            ui.add_space(6.0);
            self.ui_pave_scientifique(ui);
        }

        ui.add_space(6.0);
        self.ui_pave_principal(ui);
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme = ui
                    .add(egui::Button::new(self.theme.icone()))
                    .on_hover_text("Thème clair / sombre");
                if theme.clicked() {
                    self.basculer_theme();
                    super::appliquer_theme(ui.ctx(), self.theme);
                    theme.surrender_focus();
                }

                let sci = ui
                    .add(egui::Button::new("Sci").selected(self.pave_scientifique))
                    .on_hover_text("Affiche / masque le pavé scientifique");
                if sci.clicked() {
                    self.basculer_pave_scientifique();
                    sci.surrender_focus();
                }
            });
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let a = self.moteur.affichage();

        let couleur = if a.erreur {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne vide => on garde la hauteur (écran stable)
                    let precedent = if a.precedent.is_empty() { " " } else { a.precedent.as_str() };
                    ui.label(
                        egui::RichText::new(precedent)
                            .monospace()
                            .size(16.0)
                            .color(ui.visuals().weak_text_color()),
                    );
                    ui.label(
                        egui::RichText::new(&a.courant)
                            .monospace()
                            .size(34.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "MC", Evenement::MemoireEffacer);
            self.bouton(ui, "MR", Evenement::MemoireRappel);
            self.bouton(ui, "M+", Evenement::MemoirePlus);
            self.bouton(ui, "M−", Evenement::MemoireMoins);
        });
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, action) in ActionUnaire::TOUTES.into_iter().enumerate() {
                    self.bouton(ui, action.libelle(), Evenement::Unaire(action));
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }

    fn ui_pave_principal(&mut self, ui: &mut egui::Ui) {
        use Evenement::{Chiffre, Effacer, Egal, Supprimer};

        // colonne des opérateurs : + − × ÷ % (ordre de Operation::TOUTES)
        let [add, sub, mul, div, modulo] =
            Operation::TOUTES.map(|o| (o.symbole(), Evenement::Operation(o)));

        let lignes: [[(&str, Evenement); 4]; 4] = [
            [("C", Effacer), ("DEL", Supprimer), modulo, div],
            [("7", Chiffre('7')), ("8", Chiffre('8')), ("9", Chiffre('9')), mul],
            [("4", Chiffre('4')), ("5", Chiffre('5')), ("6", Chiffre('6')), sub],
            [("1", Chiffre('1')), ("2", Chiffre('2')), ("3", Chiffre('3')), add],
        ];

        egui::Grid::new("pave_principal")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for (label, evt) in ligne {
                        self.bouton(ui, label, evt);
                    }
                    ui.end_row();
                }

                self.bouton(ui, "0", Chiffre('0'));
                self.bouton(ui, ".", Chiffre('.'));
                ui.label("");
                self.bouton(ui, "=", Egal);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, evt: Evenement) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.envoyer(evt);
            resp.surrender_focus();
        }
    }
}
