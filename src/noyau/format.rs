// src/noyau/format.rs
//
// Texte <-> nombre pour les opérandes
// -----------------------------------
// - formater_resultat : forme décimale canonique (la plus courte qui relit la même valeur)
// - lire_operande     : texte d’opérande -> f64 (plus long préfixe numérique, None si aucun)
//
// Règles de notation (identiques au Number.toString des navigateurs) :
// - exposant décimal dans [-7, 21) : notation ordinaire (0.000001, 123456789012345680000)
// - sinon : notation exposant (1e+21, 1.5e-7)
// - -0 s’affiche "0"

/// Résultat non fini (NaN, ±∞) => "0".
pub fn formater_resultat(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return "0".to_string();
    }

    // `{:e}` donne déjà les chiffres les plus courts : "d[.ddd]e[-]x"
    let sci = format!("{:e}", v.abs());
    let Some((mantisse, exp)) = sci.split_once('e') else {
        return v.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return v.to_string();
    };

    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();
    let corps = placer_virgule(&chiffres, exp + 1);

    if v.is_sign_negative() {
        format!("-{corps}")
    } else {
        corps
    }
}

/// `chiffres` = d1 d2 … dk, valeur = 0.d1…dk × 10^n
fn placer_virgule(chiffres: &str, n: i32) -> String {
    let k = chiffres.len() as i32;

    if k <= n && n <= 21 {
        // entier : on complète par des zéros
        return format!("{chiffres}{}", "0".repeat((n - k) as usize));
    }
    if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        return format!("{ent}.{frac}");
    }
    if -6 < n && n <= 0 {
        return format!("0.{}{chiffres}", "0".repeat((-n) as usize));
    }

    let e = n - 1;
    let signe = if e < 0 { '-' } else { '+' };
    let m = if k == 1 {
        chiffres.to_string()
    } else {
        let (tete, reste) = chiffres.split_at(1);
        format!("{tete}.{reste}")
    };
    format!("{m}e{signe}{}", e.abs())
}

/// Lecture d’un opérande affiché : plus long préfixe numérique (comme parseFloat).
///
/// "1e+" -> 1, "1e+21." -> 1e21, "12abc" -> 12 ; aucun chiffre en tête ("", ".", "-") => None.
/// L’exposant ne compte que s’il est suivi d’au moins un chiffre.
pub fn lire_operande(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();

    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    if s[i..].starts_with("Infinity") {
        return Some(if b[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let chiffres = |i: &mut usize| {
        let d = *i;
        while *i < b.len() && b[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - d
    };

    let mut n = chiffres(&mut i);
    if b.get(i) == Some(&b'.') {
        i += 1;
        n += chiffres(&mut i);
    }
    if n == 0 {
        return None;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if chiffres(&mut j) > 0 {
            i = j;
        }
    }

    s[..i].parse::<f64>().ok()
}
