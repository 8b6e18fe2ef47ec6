//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice (sans vue).
//!
//! Rôle : accumuler la saisie, chaîner les opérations (gauche -> droite, sans priorité),
//! calculer, gérer la mémoire et l’erreur transitoire.
//!
//! Contrats :
//! - L’opérande courant n’est jamais vide à l’affichage ("0" minimum), au plus un '.'.
//! - Entrée invalide = no-op silencieux (l’état valide précédent est conservé).
//! - Seule erreur : division par zéro -> message affiché `delai_erreur`, puis effacement auto.
//! - Pendant l’erreur : tout est ignoré sauf `effacer()` et `avancer()`.

use std::time::Duration;

use tracing::{debug, warn};

use super::format::{formater_resultat, lire_operande};
use super::minuterie::Minuterie;
use super::operation::{ActionUnaire, Operation};
use crate::reglages::DELAI_ERREUR;

/// État logique (dérivé des champs, jamais stocké).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    Repos,
    OperandeSaisi,
    OperationChoisie,
    Erreur,
}

/// Les deux lignes d’affichage, recalculées après chaque opération.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub courant: String,
    pub precedent: String,
    pub erreur: bool,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    courant: String,
    precedent: String,
    operation: Option<Operation>,
    memoire: f64,
    reinitialiser: bool,

    // --- erreur transitoire ---
    erreur: Option<String>,
    retour: Minuterie,
    delai_erreur: Duration,

    // dernier instant connu (fourni par la vue)
    maintenant: Duration,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(DELAI_ERREUR)
    }
}

impl Calculatrice {
    pub fn new(delai_erreur: Duration) -> Self {
        Self {
            courant: "0".to_string(),
            precedent: String::new(),
            operation: None,
            memoire: 0.0,
            reinitialiser: false,
            erreur: None,
            retour: Minuterie::default(),
            delai_erreur,
            maintenant: Duration::ZERO,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    // Accesseurs de champs : seuls les tests en ont besoin, la vue passe par `affichage()`.

    #[cfg(test)]
    pub fn courant(&self) -> &str {
        &self.courant
    }

    #[cfg(test)]
    pub fn precedent(&self) -> &str {
        &self.precedent
    }

    #[cfg(test)]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    #[cfg(test)]
    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    #[cfg(test)]
    pub fn reinitialiser(&self) -> bool {
        self.reinitialiser
    }

    #[cfg(test)]
    pub fn erreur(&self) -> Option<&str> {
        self.erreur.as_deref()
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur.is_some()
    }

    pub fn etat(&self) -> Etat {
        if self.en_erreur() {
            Etat::Erreur
        } else if self.operation.is_some() && self.reinitialiser {
            Etat::OperationChoisie
        } else if self.operation.is_none() && (self.reinitialiser || self.courant == "0") {
            Etat::Repos
        } else {
            Etat::OperandeSaisi
        }
    }

    pub fn affichage(&self) -> Affichage {
        let courant = match &self.erreur {
            Some(msg) => msg.clone(),
            None if self.courant.is_empty() => "0".to_string(),
            None => self.courant.clone(),
        };
        let precedent = match self.operation {
            Some(op) => format!("{} {}", self.precedent, op.symbole()),
            None => self.precedent.clone(),
        };
        Affichage {
            courant,
            precedent,
            erreur: self.en_erreur(),
        }
    }

    /// Temps restant avant le retour automatique (pour programmer un repaint).
    pub fn retour_dans(&self) -> Option<Duration> {
        self.retour.restant(self.maintenant)
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre ('0'..='9') ou le point décimal.
    pub fn ajouter_chiffre(&mut self, jeton: char) {
        if self.en_erreur() || !(jeton.is_ascii_digit() || jeton == '.') {
            return;
        }

        if self.reinitialiser {
            self.courant.clear();
            self.reinitialiser = false;
        }
        if jeton == '.' && self.courant.contains('.') {
            return;
        }
        if self.courant == "0" && jeton != '.' {
            self.courant.clear();
        }
        self.courant.push(jeton);
    }

    pub fn supprimer_dernier(&mut self) {
        if self.en_erreur() {
            return;
        }
        if self.courant.chars().count() <= 1 {
            self.courant = "0".to_string();
        } else {
            self.courant.pop();
        }
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn choisir_operation(&mut self, op: Operation) {
        if self.en_erreur() || self.courant.is_empty() {
            return;
        }

        // Chaînage : "3 + 4 ×" plie d’abord 3 + 4
        if !self.precedent.is_empty() {
            self.calculer();
            if self.en_erreur() {
                return;
            }
        }

        debug!(operation = ?op, operande = %self.courant, "opération choisie");
        self.operation = Some(op);
        self.precedent = self.courant.clone();
        self.reinitialiser = true;
    }

    pub fn calculer(&mut self) {
        if self.en_erreur() {
            return;
        }
        let (Some(a), Some(b)) = (lire_operande(&self.precedent), lire_operande(&self.courant))
        else {
            return;
        };
        let Some(op) = self.operation else {
            return;
        };

        match op.appliquer(a, b) {
            Ok(r) => {
                self.courant = formater_resultat(r);
                debug!(%a, operation = ?op, %b, resultat = %self.courant, "calcul");
                self.operation = None;
                self.precedent.clear();
                self.reinitialiser = true;
            }
            Err(e) => self.lever_erreur(e.to_string()),
        }
    }

    pub fn appliquer_unaire(&mut self, action: ActionUnaire) {
        if self.en_erreur() {
            return;
        }
        let Some(x) = lire_operande(&self.courant) else {
            return;
        };

        self.courant = formater_resultat(action.appliquer(x));
        debug!(action = ?action, %x, resultat = %self.courant, "unaire");
        self.precedent.clear();
        self.operation = None;
        self.reinitialiser = true;
    }

    /// C : remise à zéro (mémoire conservée). Annule aussi une erreur affichée.
    pub fn effacer(&mut self) {
        self.erreur = None;
        self.retour.annuler();
        self.courant = "0".to_string();
        self.precedent.clear();
        self.operation = None;
        self.reinitialiser = false;
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memoire_effacer(&mut self) {
        if self.en_erreur() {
            return;
        }
        self.memoire = 0.0;
    }

    pub fn memoire_rappel(&mut self) {
        if self.en_erreur() {
            return;
        }
        self.courant = formater_resultat(self.memoire);
    }

    pub fn memoire_ajouter(&mut self) {
        if self.en_erreur() {
            return;
        }
        if let Some(x) = lire_operande(&self.courant) {
            self.memoire += x;
        }
    }

    pub fn memoire_soustraire(&mut self) {
        if self.en_erreur() {
            return;
        }
        if let Some(x) = lire_operande(&self.courant) {
            self.memoire -= x;
        }
    }

    /* ------------------------ Erreur transitoire ------------------------ */

    /// Affiche `message` pendant `delai_erreur`, puis `effacer()` automatiquement.
    /// Une seconde erreur remplace la première et reprogramme le retour.
    pub fn lever_erreur(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, delai_ms = self.delai_erreur.as_millis() as u64, "erreur affichée");
        self.erreur = Some(message);
        self.retour.programmer(self.maintenant + self.delai_erreur);
    }

    /// Fait avancer l’horloge du moteur. `true` si le retour automatique vient d’avoir lieu.
    pub fn avancer(&mut self, maintenant: Duration) -> bool {
        self.maintenant = self.maintenant.max(maintenant);
        if self.retour.declencher(self.maintenant) {
            debug!("retour automatique après erreur");
            self.effacer();
            return true;
        }
        false
    }
}
