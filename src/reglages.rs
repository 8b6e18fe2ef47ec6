//! src/reglages.rs
//!
//! Réglages de l’application (valeurs par défaut constantes).
//!
//! Rien n’est persisté : chaque session repart de `Reglages::default()`.

use std::time::Duration;

/// Durée d’affichage d’un message d’erreur avant retour automatique à l’état effacé.
pub const DELAI_ERREUR: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

impl Theme {
    pub fn bascule(self) -> Self {
        match self {
            Theme::Sombre => Theme::Clair,
            Theme::Clair => Theme::Sombre,
        }
    }

    /// Icône du bouton : propose le thème opposé.
    pub fn icone(self) -> &'static str {
        match self {
            Theme::Sombre => "☀",
            Theme::Clair => "🌙",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub delai_erreur: Duration,
    pub theme: Theme,
    pub pave_scientifique: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            delai_erreur: DELAI_ERREUR,
            theme: Theme::default(),
            pave_scientifique: false, // caché au démarrage
        }
    }
}
