//! Locale-aware title comparison.
//!
//! Titles are ordered the way a browser's default `localeCompare` orders
//! Latin-script text, in three passes:
//!
//! 1. **Primary**: letters compared case-insensitively with diacritics folded
//!    (`é` sorts with `e`, `ß` as `ss`), and character classes ordered
//!    whitespace < punctuation/symbols < digits < letters.
//! 2. **Secondary**: unaccented before accented (`resume` < `résumé`).
//! 3. **Tertiary**: lowercase before uppercase (`a` < `A`).
//!
//! Strings equal on all three passes fall back to code-point order so the
//! comparison is total and consistent with `Eq`.

use std::cmp::Ordering;

/// Character classes in primary collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            Self::Whitespace
        } else if c.is_alphabetic() {
            Self::Letter
        } else if c.is_numeric() {
            Self::Digit
        } else {
            Self::Punctuation
        }
    }
}

/// Folds a lowercase Latin letter with a diacritic to its base letters.
///
/// Returns `None` for characters that have no folding.
const fn fold_diacritic(c: char) -> Option<&'static str> {
    Some(match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => "c",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ł' | 'ľ' | 'ĺ' | 'ļ' => "l",
        'ñ' | 'ń' | 'ň' | 'ņ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ř' | 'ŗ' => "r",
        'ś' | 'š' | 'ş' | 'ŝ' => "s",
        'ß' => "ss",
        'ť' | 'ţ' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    })
}

/// Per-character collation data for one title.
struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<bool>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let mut primary = Vec::with_capacity(text.len());
        let mut secondary = Vec::with_capacity(text.len());
        let mut tertiary = Vec::with_capacity(text.len());

        for c in text.chars() {
            let class = CharClass::of(c);
            let upper = c.is_uppercase();

            for lower in c.to_lowercase() {
                match fold_diacritic(lower) {
                    // Ligatures expand without an accent but still differ from
                    // their spelled-out form, like a case variant.
                    Some(base) if matches!(lower, 'æ' | 'œ' | 'ß') => {
                        for b in base.chars() {
                            primary.push((class, b));
                            secondary.push(false);
                            tertiary.push(true);
                        }
                    }
                    Some(base) => {
                        for b in base.chars() {
                            primary.push((class, b));
                            secondary.push(true);
                            tertiary.push(upper);
                        }
                    }
                    None => {
                        primary.push((class, lower));
                        secondary.push(false);
                        tertiary.push(upper);
                    }
                }
            }
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

/// Compares two strings with locale-aware ordering.
///
/// # Examples
///
/// ```
/// use cartelera::catalog::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("Éclair", "eclipse"), Ordering::Less);
/// assert_eq!(locale_compare("a", "A"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let key_a = CollationKey::new(a);
    let key_b = CollationKey::new(b);

    key_a
        .primary
        .cmp(&key_b.primary)
        .then_with(|| key_a.secondary.cmp(&key_b.secondary))
        .then_with(|| key_a.tertiary.cmp(&key_b.tertiary))
        .then_with(|| a.cmp(b))
}
