// src/noyau/operation.rs
//
// Opérations du moteur
// --------------------
// - Operation     : binaires (en attente d’un second opérande)
// - ActionUnaire  : appliquées immédiatement à l’opérande courant
//
// Dispatch par match exhaustif (pas de table de chaînes).

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Modulo,
}

impl Operation {
    pub const TOUTES: [Operation; 5] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Modulo,
    ];

    /// Symbole affiché en suffixe de l’opérande précédent.
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "−",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
            Operation::Modulo => "%",
        }
    }

    /// Symbole ASCII (clavier) -> opération.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Addition),
            '-' => Some(Operation::Soustraction),
            '*' => Some(Operation::Multiplication),
            '/' => Some(Operation::Division),
            '%' => Some(Operation::Modulo),
            _ => None,
        }
    }

    /// Applique `a op b` (dans cet ordre).
    ///
    /// Division par zéro : erreur explicite (jamais d’infini silencieux).
    /// Modulo : reste flottant standard (signe du dividende), donc `x % 0` = NaN.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        let r = match self {
            Operation::Addition => a + b,
            Operation::Soustraction => a - b,
            Operation::Multiplication => a * b,
            Operation::Division => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                a / b
            }
            Operation::Modulo => a % b,
        };
        Ok(r)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionUnaire {
    Sin,
    Cos,
    Tan,
    Log,
    Racine,
    Pi,
    E,
    Carre,
}

impl ActionUnaire {
    pub const TOUTES: [ActionUnaire; 8] = [
        ActionUnaire::Sin,
        ActionUnaire::Cos,
        ActionUnaire::Tan,
        ActionUnaire::Log,
        ActionUnaire::Racine,
        ActionUnaire::Pi,
        ActionUnaire::E,
        ActionUnaire::Carre,
    ];

    /// Libellé du bouton (pavé scientifique).
    pub fn libelle(self) -> &'static str {
        match self {
            ActionUnaire::Sin => "sin",
            ActionUnaire::Cos => "cos",
            ActionUnaire::Tan => "tan",
            ActionUnaire::Log => "log",
            ActionUnaire::Racine => "√",
            ActionUnaire::Pi => "π",
            ActionUnaire::E => "e",
            ActionUnaire::Carre => "x²",
        }
    }

    /// Trig en DEGRÉS, log en base 10, π/e ignorent `x`.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            ActionUnaire::Sin => x.to_radians().sin(),
            ActionUnaire::Cos => x.to_radians().cos(),
            ActionUnaire::Tan => x.to_radians().tan(),
            ActionUnaire::Log => x.log10(),
            ActionUnaire::Racine => x.sqrt(),
            ActionUnaire::Pi => std::f64::consts::PI,
            ActionUnaire::E => std::f64::consts::E,
            ActionUnaire::Carre => x * x,
        }
    }
}
