//! Simplified codon table used by the translation lab.
//!
//! The table is deliberately partial: it covers the codons the lesson talks
//! about and maps every other codon to [`UNKNOWN_LABEL`].

pub const START_LABEL: &str = "Start (Met)";
pub const STOP_LABEL: &str = "STOP";
pub const UNKNOWN_LABEL: &str = "???";

/// Look up the amino acid label for a single uppercase RNA codon
pub fn codon_to_amino_acid(codon: &str) -> &'static str {
    match codon {
        "AUG" => START_LABEL,
        "UUU" | "UUC" => "Phe",
        "UUA" | "UUG" | "CUU" | "CUC" | "CUA" | "CUG" => "Leu",
        "AUU" | "AUC" | "AUA" => "Ile",
        "GUU" | "GUC" | "GUA" | "GUG" => "Val",
        "GCU" | "GCC" | "GCA" | "GCG" => "Ala",
        "UAA" | "UAG" | "UGA" => STOP_LABEL,
        _ => UNKNOWN_LABEL,
    }
}

/// Translate an RNA strand into amino acid labels, one per complete codon.
///
/// Trailing bases that do not fill a codon are dropped. A `STOP` label does
/// not end the translation.
pub fn translate(rna: &str) -> Vec<&'static str> {
    let chars: Vec<char> = rna.chars().collect();
    chars
        .chunks_exact(3)
        .map(|codon| codon_to_amino_acid(&codon.iter().collect::<String>()))
        .collect()
}

/// Whether the chain reached a stop codon
pub fn contains_stop(labels: &[&str]) -> bool {
    labels.iter().any(|&label| label == STOP_LABEL)
}

pub fn count_complete_codons(rna: &str) -> usize {
    rna.chars().count() / 3
}

/// Trailing bases still waiting for a full codon
pub fn partial_codon(rna: &str) -> String {
    let chars: Vec<char> = rna.chars().collect();
    let codon_start = (chars.len() / 3) * 3;
    chars[codon_start..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codon_table_entries() {
        assert_eq!(codon_to_amino_acid("AUG"), "Start (Met)");
        assert_eq!(codon_to_amino_acid("UUC"), "Phe");
        assert_eq!(codon_to_amino_acid("CUG"), "Leu");
        assert_eq!(codon_to_amino_acid("AUA"), "Ile");
        assert_eq!(codon_to_amino_acid("GUG"), "Val");
        assert_eq!(codon_to_amino_acid("GCA"), "Ala");
        assert_eq!(codon_to_amino_acid("UGA"), "STOP");
    }

    #[test]
    fn test_codons_outside_table() {
        assert_eq!(codon_to_amino_acid("CGC"), "???");
        assert_eq!(codon_to_amino_acid("UGG"), "???");
        assert_eq!(codon_to_amino_acid("aug"), "???");
        assert_eq!(codon_to_amino_acid("ATG"), "???");
    }

    #[test]
    fn test_translate_lab_default() {
        assert_eq!(translate("AUGCGC"), vec!["Start (Met)", "???"]);
    }

    #[test]
    fn test_incomplete_codon_is_dropped() {
        assert!(translate("").is_empty());
        assert!(translate("AU").is_empty());
        assert_eq!(translate("AUGUU"), vec!["Start (Met)"]);
    }

    #[test]
    fn test_stop_does_not_truncate() {
        let labels = translate("AUGUAAGCU");
        assert_eq!(labels, vec!["Start (Met)", "STOP", "Ala"]);
        assert!(contains_stop(&labels));
        assert!(!contains_stop(&translate("AUGGCU")));
    }

    #[test]
    fn test_partial_codon() {
        assert_eq!(partial_codon("AUGCG"), "CG");
        assert_eq!(partial_codon("AUG"), "");
        assert_eq!(partial_codon(""), "");
        assert_eq!(count_complete_codons("AUGCG"), 1);
    }
}
