// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau.
///
/// Une seule erreur est “visible” : la division par zéro. Elle n’est jamais propagée
/// jusqu’à l’UI sous forme de faute : le moteur la transforme en message transitoire.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("Cannot divide by zero")]
    DivisionParZero,
}
