//! Base conversion functions for DNA/RNA sequences

/// Convert a DNA base to its complementary DNA base
pub fn complementary_base(base: char) -> Option<char> {
    match base.to_ascii_uppercase() {
        'A' => Some('T'),
        'T' => Some('A'),
        'G' => Some('C'),
        'C' => Some('G'),
        _ => None,
    }
}

/// Convert a DNA base to the RNA base transcribed opposite it
pub fn dna_to_rna_base(base: char) -> Option<char> {
    match base.to_ascii_uppercase() {
        'G' => Some('C'),
        'C' => Some('G'),
        'T' => Some('A'),
        'A' => Some('U'),
        _ => None,
    }
}

/// Result of transcribing a DNA strand.
///
/// When `is_valid` is false, `rna` holds the transcription of the bases read
/// before the first character outside the DNA alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcription {
    pub rna: String,
    pub is_valid: bool,
}

/// Transcribe a DNA strand into RNA, base by base.
///
/// Input is case-insensitive and spaces are skipped. The first character that
/// is neither a DNA base nor a space stops the transcription.
pub fn transcribe(dna: &str) -> Transcription {
    let mut rna = String::with_capacity(dna.len());

    for base in dna.chars() {
        if base == ' ' {
            continue;
        }
        match dna_to_rna_base(base) {
            Some(rna_base) => rna.push(rna_base),
            None => return Transcription { rna, is_valid: false },
        }
    }

    Transcription { rna, is_valid: true }
}

/// Build the partner DNA strand, skipping spaces and stopping at the first invalid base
pub fn complementary_strand(dna: &str) -> String {
    dna.chars()
        .filter(|&c| c != ' ')
        .map_while(complementary_base)
        .collect()
}
