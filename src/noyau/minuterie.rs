// src/noyau/minuterie.rs

use std::time::Duration;

/// Tâche différée à un seul emplacement (annulable).
///
/// Le temps est fourni de l’extérieur (durée depuis le démarrage de l’app) :
/// pas d’horloge murale ici, `std::time::Instant` n’existe pas en wasm32.
/// Reprogrammer remplace l’échéance précédente.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Minuterie {
    echeance: Option<Duration>,
}

impl Minuterie {
    pub fn programmer(&mut self, echeance: Duration) {
        self.echeance = Some(echeance);
    }

    pub fn annuler(&mut self) {
        self.echeance = None;
    }

    /// Temps restant avant l’échéance (zéro si déjà échue).
    pub fn restant(&self, maintenant: Duration) -> Option<Duration> {
        self.echeance.map(|e| e.saturating_sub(maintenant))
    }

    /// Consomme l’échéance si elle est atteinte : `true` une seule fois.
    pub fn declencher(&mut self, maintenant: Duration) -> bool {
        match self.echeance {
            Some(e) if maintenant >= e => {
                self.echeance = None;
                true
            }
            _ => false,
        }
    }
}
