//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - operation.rs : opérations binaires + actions unaires (dispatch par enum)
//! - format.rs    : texte <-> nombre (forme décimale canonique)
//! - erreur.rs    : erreurs du noyau (division par zéro)
//! - minuterie.rs : tâche différée annulable (retour après erreur)
//! - moteur.rs    : machine à états (saisie, chaînage, mémoire, erreur transitoire)
//! - evenement.rs : événements d’entrée + correspondance clavier

pub mod erreur;
pub mod evenement;
pub mod format;
pub mod minuterie;
pub mod moteur;
pub mod operation;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use evenement::Evenement;
pub use moteur::{Calculatrice, Etat};
pub use operation::{ActionUnaire, Operation};
