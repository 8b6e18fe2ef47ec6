//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur (une seule instance, pas de global) et les booléens
//! purement visuels (thème, pavé scientifique).
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Calculatrice::traiter`.
//! - L’affichage est recalculé depuis le moteur à chaque frame.

use std::time::Duration;

use tracing::debug;

use crate::noyau::{Calculatrice, Evenement};
use crate::reglages::{Reglages, Theme};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Calculatrice,

    // --- UX ---
    pub theme: Theme,
    pub pave_scientifique: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            moteur: Calculatrice::new(reglages.delai_erreur),
            theme: reglages.theme,
            pave_scientifique: reglages.pave_scientifique,
        }
    }

    /// Point d’entrée unique des boutons et du clavier.
    pub fn envoyer(&mut self, evt: Evenement) {
        self.moteur.traiter(evt);
        debug!(evenement = ?evt, etat = ?self.moteur.etat(), "entrée");
    }

    /// Horloge de l’app (secondes depuis le démarrage, fournie par egui).
    /// Renvoie `true` si l’affichage a changé (retour automatique après erreur).
    pub fn tic(&mut self, secondes: f64) -> bool {
        self.moteur.avancer(Duration::from_secs_f64(secondes.max(0.0)))
    }

    pub fn basculer_theme(&mut self) {
        self.theme = self.theme.bascule();
    }

    pub fn basculer_pave_scientifique(&mut self) {
        self.pave_scientifique = !self.pave_scientifique;
    }
}
