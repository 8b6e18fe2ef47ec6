//! Tests de propriétés : invariants du moteur sous suites d’événements arbitraires.
//!
//! - opérande courant jamais vide, au plus un '.'
//! - effacer() idempotent, mémoire conservée
//! - toute erreur se résorbe après le délai

use std::time::Duration;

use proptest::prelude::*;

use super::{ActionUnaire, Calculatrice, Etat, Evenement, Operation};

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::TOUTES.to_vec())
}

fn unaire_strategy() -> impl Strategy<Value = ActionUnaire> {
    prop::sample::select(ActionUnaire::TOUTES.to_vec())
}

fn evenement_strategy() -> impl Strategy<Value = Evenement> {
    prop_oneof![
        4 => prop::sample::select("0123456789.".chars().collect::<Vec<_>>())
            .prop_map(Evenement::Chiffre),
        2 => operation_strategy().prop_map(Evenement::Operation),
        1 => unaire_strategy().prop_map(Evenement::Unaire),
        1 => Just(Evenement::Egal),
        1 => Just(Evenement::Supprimer),
        1 => prop_oneof![
            Just(Evenement::Effacer),
            Just(Evenement::MemoireEffacer),
            Just(Evenement::MemoireRappel),
            Just(Evenement::MemoirePlus),
            Just(Evenement::MemoireMoins),
        ],
    ]
}

proptest! {
    #[test]
    fn prop_operande_bien_forme(evts in prop::collection::vec(evenement_strategy(), 0..60)) {
        let mut c = Calculatrice::default();
        for e in evts {
            c.traiter(e);
            if !c.en_erreur() {
                let a = c.affichage();
                prop_assert!(!a.courant.is_empty());
                prop_assert!(a.courant.matches('.').count() <= 1, "courant={:?}", a.courant);
            }
        }
    }

    #[test]
    fn prop_effacer_idempotent(evts in prop::collection::vec(evenement_strategy(), 0..40)) {
        let mut c = Calculatrice::default();
        for e in evts {
            c.traiter(e);
        }
        let memoire = c.memoire();

        c.effacer();
        let une = (c.affichage(), c.etat(), c.reinitialiser());
        c.effacer();
        let deux = (c.affichage(), c.etat(), c.reinitialiser());

        prop_assert_eq!(&une, &deux);
        prop_assert_eq!(une.1, Etat::Repos);
        prop_assert_eq!(c.courant(), "0");
        // NaN != NaN : comparaison par bits
        prop_assert_eq!(c.memoire().to_bits(), memoire.to_bits());
    }

    #[test]
    fn prop_erreur_toujours_resorbee(
        evts in prop::collection::vec(evenement_strategy(), 0..40),
        pas_ms in 1u64..400,
    ) {
        let mut c = Calculatrice::new(Duration::from_millis(1500));
        let mut t = Duration::ZERO;
        for e in evts {
            c.traiter(e);
            t += Duration::from_millis(pas_ms);
            c.avancer(t);
        }
        c.avancer(t + Duration::from_millis(1500));
        prop_assert!(!c.en_erreur());
        prop_assert_eq!(c.retour_dans(), None);
    }

    #[test]
    fn prop_division_par_zero_toujours_signalee(a in 0u32..100_000) {
        let mut c = Calculatrice::default();
        for ch in a.to_string().chars() {
            c.traiter(Evenement::Chiffre(ch));
        }
        c.traiter(Evenement::Operation(Operation::Division));
        c.traiter(Evenement::Chiffre('0'));
        c.traiter(Evenement::Egal);
        prop_assert_eq!(c.erreur(), Some("Cannot divide by zero"));
    }
}
