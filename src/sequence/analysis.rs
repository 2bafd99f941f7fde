use bio_seq::prelude::*;

/// Percentage of G and C among the bases of a DNA strand.
///
/// Spaces are ignored. Returns 0.0 for an empty strand or one that does not
/// parse as DNA.
pub fn gc_content(dna: &str) -> f64 {
    let cleaned: String = dna
        .chars()
        .filter(|&c| c != ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<Seq<Dna>>() {
        Ok(seq) => {
            let gc_count = seq.iter().filter(|base| matches!(base, Dna::G | Dna::C)).count();
            (gc_count as f64 / seq.len() as f64) * 100.0
        }
        Err(_) => 0.0,
    }
}

/// Number of DNA bases in a strand, spaces excluded
pub fn count_bases(dna: &str) -> usize {
    dna.chars().filter(|&c| c != ' ').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_content() {
        assert_eq!(gc_content("GGCC"), 100.0);
        assert_eq!(gc_content("ATAT"), 0.0);
        assert!((gc_content("tac gcg") - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_gc_content_of_invalid_input() {
        assert_eq!(gc_content(""), 0.0);
        assert_eq!(gc_content("GAXC"), 0.0);
    }

    #[test]
    fn test_count_bases() {
        assert_eq!(count_bases("TAC GCG"), 6);
    }
}
