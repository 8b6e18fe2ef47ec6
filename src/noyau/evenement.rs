// src/noyau/evenement.rs
//
// Événements d’entrée (boutons + clavier)
// ---------------------------------------
// La vue ne touche jamais aux champs du moteur : elle envoie un `Evenement`,
// `Calculatrice::traiter` fait le dispatch (match exhaustif).

use super::moteur::Calculatrice;
use super::operation::{ActionUnaire, Operation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    /// '0'..='9' ou '.'
    Chiffre(char),
    Operation(Operation),
    Unaire(ActionUnaire),
    Egal,
    Effacer,
    Supprimer,
    MemoireEffacer,
    MemoireRappel,
    MemoirePlus,
    MemoireMoins,
}

impl Evenement {
    /// Nom de touche clavier -> événement.
    ///
    /// "0".."9" "." : chiffre ; "+ - * / %" : opération ; "Enter" "=" : calcul ;
    /// "Escape" : effacer ; "Backspace" : supprimer. Le reste : None.
    pub fn depuis_touche(touche: &str) -> Option<Self> {
        match touche {
            "Enter" | "=" => return Some(Evenement::Egal),
            "Escape" => return Some(Evenement::Effacer),
            "Backspace" => return Some(Evenement::Supprimer),
            _ => {}
        }

        let mut it = touche.chars();
        let (Some(c), None) = (it.next(), it.next()) else {
            return None;
        };
        if c.is_ascii_digit() || c == '.' {
            return Some(Evenement::Chiffre(c));
        }
        Operation::depuis_symbole(c).map(Evenement::Operation)
    }
}

impl Calculatrice {
    pub fn traiter(&mut self, evt: Evenement) {
        match evt {
            Evenement::Chiffre(c) => self.ajouter_chiffre(c),
            Evenement::Operation(op) => self.choisir_operation(op),
            Evenement::Unaire(a) => self.appliquer_unaire(a),
            Evenement::Egal => self.calculer(),
            Evenement::Effacer => self.effacer(),
            Evenement::Supprimer => self.supprimer_dernier(),
            Evenement::MemoireEffacer => self.memoire_effacer(),
            Evenement::MemoireRappel => self.memoire_rappel(),
            Evenement::MemoirePlus => self.memoire_ajouter(),
            Evenement::MemoireMoins => self.memoire_soustraire(),
        }
    }
}
