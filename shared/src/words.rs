//! French amount-in-words spelling for printed documents
//!
//! Turns a MAD amount into the legal wording printed at the bottom of a
//! bon d'achat or bon d'avoir, e.g. 325.50 becomes
//! "Trois cent vingt-cinq dirhams et cinquante centimes".
//!
//! Pure functions over constant tables; the purchase order and credit
//! note renderers share this single implementation.

use thiserror::Error;

const UNITS: [&str; 10] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];
const TEENS: [&str; 10] = [
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];
// 70s and 90s are spelled from "soixante"/"quatre-vingt" plus a teen, so
// their slots stay empty.
const TENS: [&str; 10] = [
    "",
    "",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "",
    "quatre-vingt",
    "",
];

/// Spelling error for out-of-contract amounts
#[derive(Debug, Error, PartialEq)]
pub enum WordsError {
    /// Amount is negative
    #[error("amount must be non-negative, got {0}")]
    Negative(f64),

    /// Amount is NaN or infinite
    #[error("amount must be finite")]
    NotFinite,
}

/// Spell a MAD amount in French words, capitalized.
///
/// The amount is split into dirhams and centimes (rounded half away from
/// zero); a rounding overflow at `x.995` carries into the dirham part.
///
/// ```
/// use shared::words::amount_to_words;
///
/// assert_eq!(amount_to_words(0.0).unwrap(), "Zéro dirham");
/// assert_eq!(
///     amount_to_words(21.50).unwrap(),
///     "Vingt et un dirhams et cinquante centimes"
/// );
/// ```
pub fn amount_to_words(amount: f64) -> Result<String, WordsError> {
    if !amount.is_finite() {
        return Err(WordsError::NotFinite);
    }
    if amount < 0.0 {
        return Err(WordsError::Negative(amount));
    }

    let mut dirhams = amount.floor() as u64;
    let mut centimes = ((amount - amount.floor()) * 100.0).round() as u32;
    if centimes >= 100 {
        dirhams += 1;
        centimes = 0;
    }

    if dirhams == 0 && centimes == 0 {
        return Ok("Zéro dirham".to_string());
    }

    let mut out = spell_integer(dirhams);
    out.push_str(" dirham");
    if dirhams != 1 {
        out.push('s');
    }

    if centimes > 0 {
        out.push_str(" et ");
        out.push_str(&spell_integer(u64::from(centimes)));
        out.push_str(" centime");
        if centimes != 1 {
            out.push('s');
        }
    }

    Ok(capitalize_first(&out))
}

/// Spell a non-negative integer in French words (lowercase).
pub fn spell_integer(n: u64) -> String {
    if n == 0 {
        return "zéro".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = n;

    let billions = rest / 1_000_000_000;
    if billions > 0 {
        let mut s = spell_hundreds(billions as u32);
        s.push_str(" milliard");
        if billions > 1 {
            s.push('s');
        }
        parts.push(s);
        rest %= 1_000_000_000;
    }

    let millions = rest / 1_000_000;
    if millions > 0 {
        let mut s = spell_hundreds(millions as u32);
        s.push_str(" million");
        if millions > 1 {
            s.push('s');
        }
        parts.push(s);
        rest %= 1_000_000;
    }

    // "mille" takes neither an "un" prefix nor a plural "s".
    let thousands = rest / 1_000;
    if thousands == 1 {
        parts.push("mille".to_string());
    } else if thousands > 1 {
        parts.push(format!("{} mille", spell_hundreds(thousands as u32)));
    }
    rest %= 1_000;

    if rest > 0 {
        parts.push(spell_hundreds(rest as u32));
    }

    parts.join(" ")
}

/// Spell 0..=999; 0 yields the empty string.
fn spell_hundreds(n: u32) -> String {
    debug_assert!(n < 1_000);

    let mut out = String::new();
    let h = n / 100;
    let r = n % 100;

    if h == 1 {
        out.push_str("cent");
    } else if h > 1 {
        out.push_str(UNITS[h as usize]);
        out.push_str(" cent");
        // "deux cents" but "deux cent un"
        if r == 0 {
            out.push('s');
        }
    }

    let tail = if r == 0 {
        String::new()
    } else if r < 10 {
        UNITS[r as usize].to_string()
    } else if r < 20 {
        TEENS[(r - 10) as usize].to_string()
    } else {
        let t = r / 10;
        let u = r % 10;
        let mut part = String::new();
        if t == 7 {
            // 70..79 spelled as sixty plus a teen
            part.push_str("soixante");
            if u == 1 {
                part.push_str(" et onze");
            } else {
                part.push('-');
                part.push_str(TEENS[u as usize]);
            }
        } else if t == 9 {
            // 90..99 spelled as eighty plus a teen, never with "et"
            part.push_str("quatre-vingt");
            part.push('-');
            part.push_str(TEENS[u as usize]);
        } else {
            part.push_str(TENS[t as usize]);
            if u == 1 && t != 8 {
                part.push_str(" et un");
            } else if u > 0 {
                part.push('-');
                part.push_str(UNITS[u as usize]);
            } else if t == 8 {
                // "quatre-vingts" but "quatre-vingt-un"
                part.push('s');
            }
        }
        part
    };

    if !out.is_empty() && !tail.is_empty() {
        out.push(' ');
    }
    out.push_str(&tail);
    out
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(amount_to_words(0.0).unwrap(), "Zéro dirham");
    }

    #[test]
    fn test_singular_and_plural_dirhams() {
        assert_eq!(amount_to_words(1.0).unwrap(), "Un dirham");
        assert_eq!(amount_to_words(2.0).unwrap(), "Deux dirhams");
    }

    #[test]
    fn test_centimes_clause() {
        assert_eq!(
            amount_to_words(21.50).unwrap(),
            "Vingt et un dirhams et cinquante centimes"
        );
        assert_eq!(amount_to_words(1.01).unwrap(), "Un dirham et un centime");
        assert_eq!(
            amount_to_words(0.50).unwrap(),
            "Zéro dirhams et cinquante centimes"
        );
    }

    #[test]
    fn test_seventies_and_nineties() {
        assert_eq!(amount_to_words(71.0).unwrap(), "Soixante et onze dirhams");
        assert_eq!(amount_to_words(70.0).unwrap(), "Soixante-dix dirhams");
        assert_eq!(amount_to_words(91.0).unwrap(), "Quatre-vingt-onze dirhams");
        assert_eq!(amount_to_words(90.0).unwrap(), "Quatre-vingt-dix dirhams");
        assert_eq!(amount_to_words(99.0).unwrap(), "Quatre-vingt-dix-neuf dirhams");
    }

    #[test]
    fn test_eighty_pluralization() {
        assert_eq!(amount_to_words(80.0).unwrap(), "Quatre-vingts dirhams");
        assert_eq!(amount_to_words(81.0).unwrap(), "Quatre-vingt-un dirhams");
    }

    #[test]
    fn test_hundreds_pluralization() {
        assert_eq!(amount_to_words(200.0).unwrap(), "Deux cents dirhams");
        assert_eq!(amount_to_words(201.0).unwrap(), "Deux cent un dirhams");
        assert_eq!(amount_to_words(100.0).unwrap(), "Cent dirhams");
        assert_eq!(
            amount_to_words(325.50).unwrap(),
            "Trois cent vingt-cinq dirhams et cinquante centimes"
        );
    }

    #[test]
    fn test_thousands_never_pluralize() {
        assert_eq!(amount_to_words(1_000.0).unwrap(), "Mille dirhams");
        assert_eq!(amount_to_words(2_000.0).unwrap(), "Deux mille dirhams");
        assert_eq!(
            amount_to_words(1_981.0).unwrap(),
            "Mille neuf cent quatre-vingt-un dirhams"
        );
    }

    // The source screens print "un million dirhams" without the linking
    // "de"; that wording is pinned here on purpose.
    #[test]
    fn test_million_wording_is_preserved() {
        assert_eq!(amount_to_words(1_000_000.0).unwrap(), "Un million dirhams");
        assert_eq!(amount_to_words(2_000_000.0).unwrap(), "Deux millions dirhams");
        assert_eq!(
            amount_to_words(1_000_000_000.0).unwrap(),
            "Un milliard dirhams"
        );
    }

    #[test]
    fn test_centime_overflow_carries_into_dirhams() {
        // 0.9999 * 100 rounds to 100 centimes, which must carry
        assert_eq!(amount_to_words(1.9999).unwrap(), "Deux dirhams");
    }

    #[test]
    fn test_invalid_amounts_fail_fast() {
        assert_eq!(amount_to_words(-1.0), Err(WordsError::Negative(-1.0)));
        assert_eq!(amount_to_words(f64::NAN), Err(WordsError::NotFinite));
        assert_eq!(amount_to_words(f64::INFINITY), Err(WordsError::NotFinite));
    }

    #[test]
    fn test_output_shape() {
        for amount in [0.0, 0.01, 1.0, 17.25, 71.0, 80.0, 199.99, 1_234.56, 987_654.32] {
            let words = amount_to_words(amount).unwrap();
            assert!(!words.is_empty());
            let first = words.chars().next().unwrap();
            assert!(first.is_uppercase(), "not capitalized: {}", words);
            // Pure function: repeated calls are byte-identical
            assert_eq!(words, amount_to_words(amount).unwrap());
        }
    }

    #[test]
    fn test_spell_integer_samples() {
        assert_eq!(spell_integer(0), "zéro");
        assert_eq!(spell_integer(17), "dix-sept");
        assert_eq!(spell_integer(77), "soixante-dix-sept");
        assert_eq!(spell_integer(555), "cinq cent cinquante-cinq");
        assert_eq!(spell_integer(1_000_001), "un million un");
        assert_eq!(
            spell_integer(123_456),
            "cent vingt-trois mille quatre cent cinquante-six"
        );
    }
}
