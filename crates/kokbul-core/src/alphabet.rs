// Turkish alphabet classification and case folding.

/// Back vowels (lowercase): a ı o u
pub const BACK_VOWELS: &[char] = &['a', '\u{0131}', 'o', 'u'];

/// Front vowels (lowercase): e i ö ü
pub const FRONT_VOWELS: &[char] = &['e', 'i', '\u{00F6}', '\u{00FC}'];

/// Narrow back vowels: ı u
pub const BACK_NARROW_VOWELS: &[char] = &['\u{0131}', 'u'];

/// Narrow front vowels: i ü
pub const FRONT_NARROW_VOWELS: &[char] = &['i', '\u{00FC}'];

/// Turkish consonants (lowercase): b c ç d f g ğ h j k l m n p r s ş t v y z
const TURKISH_CONSONANTS: &[char] = &[
    'b', 'c', '\u{00E7}', 'd', 'f', 'g', '\u{011F}', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's',
    '\u{015F}', 't', 'v', 'y', 'z',
];

/// Vowel harmony class of a Turkish vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    Back,
    Front,
}

/// Check whether a character is a Turkish vowel.
pub fn is_vowel(c: char) -> bool {
    BACK_VOWELS.contains(&c) || FRONT_VOWELS.contains(&c)
}

/// Check whether a character is a Turkish consonant.
pub fn is_consonant(c: char) -> bool {
    TURKISH_CONSONANTS.contains(&c)
}

/// Check whether a character belongs to the 29-letter Turkish alphabet
/// (lowercase form).
pub fn is_turkish_letter(c: char) -> bool {
    is_vowel(c) || is_consonant(c)
}

/// Harmony class of a vowel; `None` for consonants and foreign characters.
pub fn vowel_harmony(c: char) -> Option<Harmony> {
    if BACK_VOWELS.contains(&c) {
        Some(Harmony::Back)
    } else if FRONT_VOWELS.contains(&c) {
        Some(Harmony::Front)
    } else {
        None
    }
}

/// Check whether a character is a narrow vowel (ı i u ü).
pub fn is_narrow_vowel(c: char) -> bool {
    BACK_NARROW_VOWELS.contains(&c) || FRONT_NARROW_VOWELS.contains(&c)
}

/// The pair of narrow vowels belonging to a harmony class.
///
/// These are the vowels that may be epenthesized back into a stem whose
/// dictionary form lost an internal vowel before a vowel-initial suffix.
pub fn narrow_vowels(harmony: Harmony) -> &'static [char] {
    match harmony {
        Harmony::Back => BACK_NARROW_VOWELS,
        Harmony::Front => FRONT_NARROW_VOWELS,
    }
}

/// Voiceless counterpart of a final voiced obstruent, per the Turkish
/// terminal devoicing alternation: ğ→k, g→k, c→ç, b→p, d→t.
///
/// Returns `None` for characters that do not alternate.
pub fn devoiced(c: char) -> Option<char> {
    match c {
        '\u{011F}' | 'g' => Some('k'),
        'c' => Some('\u{00E7}'),
        'b' => Some('p'),
        'd' => Some('t'),
        _ => None,
    }
}

/// Convert a character to its Turkish lowercase equivalent.
///
/// Turkish case folding differs from the default Unicode mapping for the
/// dotted/dotless i pair: `I` lowers to `ı` and `İ` lowers to `i`. All other
/// characters use the standard library mapping (first character of the
/// expansion, matching one-to-one folding).
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',
        '\u{0130}' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_classification() {
        for &v in BACK_VOWELS.iter().chain(FRONT_VOWELS) {
            assert!(is_vowel(v), "{v} should be a vowel");
        }
        assert!(!is_vowel('k'));
        assert!(!is_vowel('\u{011F}')); // ğ
    }

    #[test]
    fn consonant_classification() {
        assert!(is_consonant('\u{00E7}')); // ç
        assert!(is_consonant('\u{011F}')); // ğ
        assert!(is_consonant('\u{015F}')); // ş
        assert!(!is_consonant('a'));
        assert!(!is_consonant('q')); // not in the Turkish alphabet
        assert!(!is_consonant('x'));
        assert!(!is_consonant('w'));
    }

    #[test]
    fn alphabet_has_29_letters() {
        let count = BACK_VOWELS.len() + FRONT_VOWELS.len() + TURKISH_CONSONANTS.len();
        assert_eq!(count, 29);
    }

    #[test]
    fn harmony_classes() {
        assert_eq!(vowel_harmony('a'), Some(Harmony::Back));
        assert_eq!(vowel_harmony('\u{0131}'), Some(Harmony::Back)); // ı
        assert_eq!(vowel_harmony('e'), Some(Harmony::Front));
        assert_eq!(vowel_harmony('\u{00FC}'), Some(Harmony::Front)); // ü
        assert_eq!(vowel_harmony('t'), None);
    }

    #[test]
    fn narrow_vowel_sets() {
        assert!(is_narrow_vowel('\u{0131}'));
        assert!(is_narrow_vowel('i'));
        assert!(is_narrow_vowel('u'));
        assert!(is_narrow_vowel('\u{00FC}'));
        assert!(!is_narrow_vowel('a'));
        assert!(!is_narrow_vowel('o'));
        assert_eq!(narrow_vowels(Harmony::Back), &['\u{0131}', 'u']);
        assert_eq!(narrow_vowels(Harmony::Front), &['i', '\u{00FC}']);
    }

    #[test]
    fn devoicing_pairs() {
        assert_eq!(devoiced('\u{011F}'), Some('k')); // ğ
        assert_eq!(devoiced('g'), Some('k'));
        assert_eq!(devoiced('c'), Some('\u{00E7}')); // ç
        assert_eq!(devoiced('b'), Some('p'));
        assert_eq!(devoiced('d'), Some('t'));
        assert_eq!(devoiced('k'), None);
        assert_eq!(devoiced('a'), None);
    }

    #[test]
    fn turkish_lowercase_dotted_dotless_i() {
        assert_eq!(turkish_lower('I'), '\u{0131}'); // I -> ı
        assert_eq!(turkish_lower('\u{0130}'), 'i'); // İ -> i
        assert_eq!(turkish_lower('i'), 'i');
        assert_eq!(turkish_lower('\u{0131}'), '\u{0131}');
    }

    #[test]
    fn turkish_lowercase_other_letters() {
        assert_eq!(turkish_lower('A'), 'a');
        assert_eq!(turkish_lower('\u{00C7}'), '\u{00E7}'); // Ç -> ç
        assert_eq!(turkish_lower('\u{011E}'), '\u{011F}'); // Ğ -> ğ
        assert_eq!(turkish_lower('\u{015E}'), '\u{015F}'); // Ş -> ş
        assert_eq!(turkish_lower('\u{00DC}'), '\u{00FC}'); // Ü -> ü
        assert_eq!(turkish_lower('k'), 'k');
    }
}
