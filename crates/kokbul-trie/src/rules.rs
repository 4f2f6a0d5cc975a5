// Phonological repair rules.
//
// Each rule is a pure function from a candidate stem boundary to the surface
// variants that might be the true underlying root. The rules perform no
// dictionary lookups; validating the variants is the caller's concern.

use kokbul_core::alphabet::{self, Harmony};

/// Highest suffix class that triggers vowel narrowing.
///
/// Narrowing only occurs before the innermost verb suffix classes (the
/// progressive and related formations), so the traversal gates the rule on
/// the matched suffix's compare priority.
pub const NARROWING_PRIORITY_CEILING: u8 = 1;

/// Undo terminal devoicing at the stem boundary.
///
/// A root-final voiceless obstruent surfaces voiced before a vowel-initial
/// suffix (kitap → kitabı), so a stripped stem ending in a voiced obstruent
/// may hide a voiceless dictionary form. Emits at most one variant.
pub fn devoicing_repair(stem: &[char]) -> Option<String> {
    let last = *stem.last()?;
    let voiceless = alphabet::devoiced(last)?;
    let mut out: String = stem[..stem.len() - 1].iter().collect();
    out.push(voiceless);
    Some(out)
}

/// Undo vowel narrowing at the stem boundary of a verb.
///
/// Verb-final a/e narrow to ı/i/u/ü before the progressive (ye → yiyor), so
/// a stripped stem ending in a narrow vowel may hide a wide-vowel dictionary
/// form: back-narrow widens to `a`, front-narrow to `e`.
pub fn narrowing_repair(stem: &[char]) -> Option<String> {
    let last = *stem.last()?;
    if !alphabet::is_narrow_vowel(last) {
        return None;
    }
    let wide = match alphabet::vowel_harmony(last)? {
        Harmony::Back => 'a',
        Harmony::Front => 'e',
    };
    let mut out: String = stem[..stem.len() - 1].iter().collect();
    out.push(wide);
    Some(out)
}

/// Reinsert an elided vowel into a closed monosyllable noun stem.
///
/// Certain noun roots lose their final internal vowel before a vowel-initial
/// suffix (burun → burnu). When the stripped stem has exactly one vowel and
/// ends in two consonants, emit one variant per narrow vowel of the
/// suffix's harmony class, inserted between the last two characters.
pub fn elision_repairs(stem: &[char], harmony: Harmony) -> Vec<String> {
    let n = stem.len();
    if n < 3 {
        return Vec::new();
    }
    if alphabet::is_vowel(stem[n - 1]) || alphabet::is_vowel(stem[n - 2]) {
        return Vec::new();
    }
    let vowel_count = stem.iter().filter(|&&c| alphabet::is_vowel(c)).count();
    if vowel_count != 1 {
        return Vec::new();
    }
    alphabet::narrow_vowels(harmony)
        .iter()
        .map(|&v| {
            let mut out: String = stem[..n - 1].iter().collect();
            out.push(v);
            out.push(stem[n - 1]);
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn devoicing_recovers_voiceless_form() {
        assert_eq!(devoicing_repair(&chars("kitab")), Some("kitap".into()));
        assert_eq!(devoicing_repair(&chars("a\u{011F}a")), None); // ends in vowel
        assert_eq!(
            devoicing_repair(&chars("a\u{011F}")),
            Some("ak".into()) // ğ -> k
        );
        assert_eq!(devoicing_repair(&chars("gen\u{00E7}")), None); // already voiceless
    }

    #[test]
    fn devoicing_on_empty_stem() {
        assert_eq!(devoicing_repair(&[]), None);
    }

    #[test]
    fn narrowing_widens_final_narrow_vowel() {
        assert_eq!(narrowing_repair(&chars("yi")), Some("ye".into()));
        assert_eq!(narrowing_repair(&chars("d\u{0131}")), Some("da".into()));
        assert_eq!(narrowing_repair(&chars("su")), Some("sa".into()));
        assert_eq!(narrowing_repair(&chars("g\u{00FC}")), Some("ge".into()));
    }

    #[test]
    fn narrowing_ignores_wide_vowels_and_consonants() {
        assert_eq!(narrowing_repair(&chars("gel")), None);
        assert_eq!(narrowing_repair(&chars("oku")), Some("oka".into())); // final u still narrows
        assert_eq!(narrowing_repair(&chars("de")), None); // e is already wide
        assert_eq!(narrowing_repair(&chars("ara")), None);
    }

    #[test]
    fn elision_inserts_harmony_vowels() {
        // burn: one vowel, ends in two consonants
        let variants = elision_repairs(&chars("burn"), Harmony::Back);
        assert_eq!(variants, vec!["bur\u{0131}n".to_string(), "burun".to_string()]);

        let variants = elision_repairs(&chars("devr"), Harmony::Front);
        assert_eq!(variants, vec!["devir".to_string(), "dev\u{00FC}r".to_string()]);
    }

    #[test]
    fn elision_requires_closed_monosyllable() {
        // two vowels
        assert!(elision_repairs(&chars("kitap"), Harmony::Back).is_empty());
        // final character is a vowel
        assert!(elision_repairs(&chars("bura"), Harmony::Back).is_empty());
        // penultimate character is a vowel
        assert!(elision_repairs(&chars("bal"), Harmony::Back).is_empty());
        // too short to host an insertion
        assert!(elision_repairs(&chars("rn"), Harmony::Back).is_empty());
    }
}
