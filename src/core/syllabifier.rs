// src/core/syllabifier.rs
use crate::core::errors::SyllabifyError;
use crate::core::inventory::{
    is_lax, is_licit_medial_onset2, is_licit_medial_onset3, is_vowel, strip_stress,
};
use crate::core::types::{Phoneme, Syllable};

/// The rhotic consonant that liaises into a preceding nucleus.
const RHOTIC: &str = "R";
/// The palatal glide that can be absorbed by a following nucleus.
const GLIDE: &str = "Y";

/// Splits an ARPABET pronunciation into syllables. O(n) in the number of
/// phonemes.
///
/// The first pass finds vowel nuclei and the consonant runs around them.
/// The second pass settles each medial run between the coda on its left and
/// the onset on its right, applying in order: R liaison into the previous
/// nucleus, absorption of a trailing Y into the next nucleus, the Alaska
/// rule (a stressed lax vowel claims one consonant as coda, as in a.las.ka
/// versus a.la.ska), and onset maximization against the licit-cluster
/// tables. The result is checked to flatten back to the input before it is
/// returned.
///
/// `alaska_rule` is normally true; passing false disables that one step.
pub fn syllabify(pron: &[Phoneme], alaska_rule: bool) -> Result<Vec<Syllable>, SyllabifyError> {
    // 1. First pass: collect nuclei and the consonant runs between them.
    //    `onsets` holds unresolved interludes until the second pass.
    let mut nuclei: Vec<Vec<Phoneme>> = Vec::new();
    let mut onsets: Vec<Vec<Phoneme>> = Vec::new();
    let mut run_start = 0;
    for (j, segment) in pron.iter().enumerate() {
        if is_vowel(segment) {
            nuclei.push(vec![segment.clone()]);
            onsets.push(pron[run_start..j].to_vec());
            run_start = j + 1;
        }
    }
    if nuclei.is_empty() {
        return Err(SyllabifyError::NoSyllabicNucleus(pron.to_vec()));
    }
    let final_coda: Vec<Phoneme> = pron[run_start..].to_vec();

    // 2. Second pass: resolve each interlude. The run before the first
    //    nucleus is already a valid onset and is left alone.
    let mut codas: Vec<Vec<Phoneme>> = Vec::with_capacity(nuclei.len());
    for i in 1..onsets.len() {
        let mut coda: Vec<Phoneme> = Vec::new();

        // 2a. A leading R with company liaises into the previous nucleus.
        if onsets[i].len() > 1 && onsets[i][0] == RHOTIC {
            let rhotic = onsets[i].remove(0);
            nuclei[i - 1].push(rhotic);
        }
        // 2b. A trailing Y behind at least two consonants joins this
        //     nucleus, as in res.cue but not me.nu.
        if onsets[i].len() > 2 && onsets[i][onsets[i].len() - 1] == GLIDE {
            if let Some(glide) = onsets[i].pop() {
                nuclei[i].insert(0, glide);
            }
        }
        // 2c. Alaska rule: a stressed lax vowel keeps one consonant as its
        //     coda, bleeding onset maximization. A nucleus that just gained
        //     a liaised R is no longer lax-final and is exempt.
        if alaska_rule && onsets[i].len() > 1 && nuclei[i - 1].last().map_or(false, |v| is_lax(v))
        {
            let claimed = onsets[i].remove(0);
            coda.push(claimed);
        }
        // 2d. Onset maximization: keep the longest licit tail as the onset
        //     and push everything in front of it onto the coda.
        let mut depth = 1;
        let len = onsets[i].len();
        if len > 1 && is_licit_medial_onset2(&onsets[i][len - 2], &onsets[i][len - 1]) {
            depth = if len > 2
                && is_licit_medial_onset3(&onsets[i][len - 3], &onsets[i][len - 2], &onsets[i][len - 1])
            {
                3
            } else {
                2
            };
        }
        while onsets[i].len() > depth {
            let spill = onsets[i].remove(0);
            coda.push(spill);
        }
        codas.push(coda);
    }
    codas.push(final_coda);

    // 3. Assemble and verify.
    let syllables: Vec<Syllable> = onsets
        .into_iter()
        .zip(nuclei)
        .zip(codas)
        .map(|((onset, nucleus), coda)| Syllable {
            onset,
            nucleus,
            coda,
        })
        .collect();
    check_reconstruction(pron, &syllables)?;
    Ok(syllables)
}

/// Verifies that the syllables flatten back to the input, segment for
/// segment. The resolution steps only move segments between adjacent slots,
/// so a mismatch means the splitter itself is broken.
fn check_reconstruction(
    pron: &[Phoneme],
    syllables: &[Syllable],
) -> Result<(), SyllabifyError> {
    let reconstruction: Vec<Phoneme> = syllables
        .iter()
        .flat_map(Syllable::segments)
        .cloned()
        .collect();
    if reconstruction != pron {
        return Err(SyllabifyError::ReconstructionMismatch {
            input: pron.to_vec(),
            reconstruction,
        });
    }
    Ok(())
}

/// Returns a copy of the syllabification with stress digits removed from
/// the nuclei. Onsets and codas are untouched, so applying this twice is a
/// no-op.
pub fn destress(syllables: &[Syllable]) -> Vec<Syllable> {
    syllables
        .iter()
        .map(|syllable| Syllable {
            onset: syllable.onset.clone(),
            nucleus: syllable
                .nucleus
                .iter()
                .map(|v| strip_stress(v).to_string())
                .collect(),
            coda: syllable.coda.clone(),
        })
        .collect()
}

/// Renders a syllabification as a single string, `.` between syllables and
/// `-` between the slots of each: "M-IH1-N.S T R-AH0-L".
pub fn pretty(syllables: &[Syllable]) -> String {
    syllables
        .iter()
        .map(|syllable| syllable.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pron(text: &str) -> Vec<Phoneme> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn syl(onset: &[&str], nucleus: &[&str], coda: &[&str]) -> Syllable {
        let seg = |symbols: &[&str]| symbols.iter().map(|s| s.to_string()).collect();
        Syllable {
            onset: seg(onset),
            nucleus: seg(nucleus),
            coda: seg(coda),
        }
    }

    #[test]
    fn test_alaska_rule_on() {
        let syls = syllabify(&pron("AH0 L AE1 S K AH0"), true).unwrap();
        assert_eq!(
            syls,
            vec![
                syl(&[], &["AH0"], &[]),
                syl(&["L"], &["AE1"], &["S"]),
                syl(&["K"], &["AH0"], &[]),
            ]
        );
        assert_eq!(pretty(&syls), "-AH0-.L-AE1-S.K-AH0-");
    }

    #[test]
    fn test_alaska_rule_off() {
        let syls = syllabify(&pron("AH0 L AE1 S K AH0"), false).unwrap();
        assert_eq!(
            syls,
            vec![
                syl(&[], &["AH0"], &[]),
                syl(&["L"], &["AE1"], &[]),
                syl(&["S", "K"], &["AH0"], &[]),
            ]
        );
        assert_eq!(pretty(&syls), "-AH0-.L-AE1-.S K-AH0-");
    }

    #[test]
    fn test_onset_maximization_depth_three() {
        // min.strel keeps the full S T R onset.
        let syls = syllabify(&pron("M IH1 N S T R AH0 L"), true).unwrap();
        assert_eq!(
            syls,
            vec![
                syl(&["M"], &["IH1"], &["N"]),
                syl(&["S", "T", "R"], &["AH0"], &["L"]),
            ]
        );
    }

    #[test]
    fn test_r_liaison_extends_previous_nucleus() {
        let syls = syllabify(&pron("AA1 R T AH0 S T"), true).unwrap();
        assert_eq!(
            syls,
            vec![
                syl(&[], &["AA1", "R"], &[]),
                syl(&["T"], &["AH0"], &["S", "T"]),
            ]
        );
    }

    #[test]
    fn test_liaison_masks_laxness() {
        // The R liaised onto AO1 is what the Alaska rule inspects, so the
        // following M Y interlude is split by maximization alone.
        let syls = syllabify(&pron("F AO1 R M Y AH0 L AH0"), true).unwrap();
        assert_eq!(pretty(&syls), "F-AO1 R-M.Y-AH0-.L-AH0-");
    }

    #[test]
    fn test_glide_needs_two_consonants_before_it() {
        // me.nu: N Y is too short, Y stays an onset.
        let menu = syllabify(&pron("M EH1 N Y UW0"), true).unwrap();
        assert_eq!(
            menu,
            vec![syl(&["M"], &["EH1"], &["N"]), syl(&["Y"], &["UW0"], &[])]
        );
        // res.cue: S K Y is long enough, Y joins the nucleus.
        let rescue = syllabify(&pron("R EH1 S K Y UW0"), true).unwrap();
        assert_eq!(
            rescue,
            vec![
                syl(&["R"], &["EH1"], &["S"]),
                syl(&["K"], &["Y", "UW0"], &[]),
            ]
        );
        assert_eq!(pretty(&rescue), "R-EH1-S.K-Y UW0-");
    }

    #[test]
    fn test_empty_interlude() {
        // min.u.et has nothing at all between UW2 and EH1.
        let syls = syllabify(&pron("M IH0 N Y UW2 EH1 T"), true).unwrap();
        assert_eq!(pretty(&syls), "M-IH0-N.Y-UW2-.-EH1-T");
        assert!(syls[2].onset.is_empty());
    }

    #[test]
    fn test_monosyllable() {
        let syls = syllabify(&pron("DH IY1"), true).unwrap();
        assert_eq!(syls, vec![syl(&["DH"], &["IY1"], &[])]);
    }

    #[test]
    fn test_no_nucleus_is_an_error() {
        let input = pron("HH M");
        assert_eq!(
            syllabify(&input, true),
            Err(SyllabifyError::NoSyllabicNucleus(input.clone()))
        );
        assert!(matches!(
            syllabify(&[], true),
            Err(SyllabifyError::NoSyllabicNucleus(_))
        ));
    }

    #[test]
    fn test_reconstruction_check_catches_dropped_segment() {
        let input = pron("B AH1 T ER0");
        let mut syls = syllabify(&input, true).unwrap();
        syls[1].onset.clear();
        let err = check_reconstruction(&input, &syls).unwrap_err();
        assert_eq!(
            err,
            SyllabifyError::ReconstructionMismatch {
                input: input.clone(),
                reconstruction: pron("B AH1 ER0"),
            }
        );
    }

    #[test]
    fn test_reconstruction_check_catches_inserted_segment() {
        let input = pron("B AH1 T ER0");
        let mut syls = syllabify(&input, true).unwrap();
        syls[0].coda.push("T".to_string());
        assert!(check_reconstruction(&input, &syls).is_err());
    }

    #[test]
    fn test_destress_strips_nuclei_only() {
        let syls = syllabify(&pron("M IH1 L AH0 T EH2 R IY0"), true).unwrap();
        let bare = destress(&syls);
        assert_eq!(pretty(&bare), "M-IH-.L-AH-.T-EH-.R-IY-");
        // Idempotent.
        assert_eq!(destress(&bare), bare);
    }

    #[test]
    fn test_destress_keeps_liaised_consonant() {
        let syls = syllabify(&pron("AA1 R T AH0 S T"), true).unwrap();
        let bare = destress(&syls);
        assert_eq!(bare[0].nucleus, pron("AA R"));
        assert_eq!(bare[1].coda, pron("S T"));
    }
}
