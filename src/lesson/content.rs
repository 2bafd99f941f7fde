//! Static lesson text: the two molecule cards, the central dogma flow and the
//! comparison table.

pub struct MoleculeCard {
    pub name: &'static str,
    pub full_name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub structure: &'static str,
    pub structure_hint: &'static str,
    pub bases: [&'static str; 4],
    pub memory_hint: &'static str,
}

pub const DNA_CARD: MoleculeCard = MoleculeCard {
    name: "DNA",
    full_name: "Deoxyribonucleic Acid",
    role: "The Master Plan",
    description: "Think of DNA as the library that stays safe inside the nucleus. It holds all the instructions for building you!",
    structure: "Double Helix",
    structure_hint: "It looks like a twisted ladder (two strands).",
    bases: ["Adenine", "Thymine (Only in DNA!)", "Cytosine", "Guanine"],
    memory_hint: "Remember: A pairs with T (Apples in the Tree)",
};

pub const RNA_CARD: MoleculeCard = MoleculeCard {
    name: "RNA",
    full_name: "Ribonucleic Acid",
    role: "The Messenger",
    description: "Think of RNA as the photocopy of the plan. It carries instructions out of the nucleus to build proteins.",
    structure: "Single Strand",
    structure_hint: "It looks like half a ladder (one strand).",
    bases: ["Adenine", "Uracil (Only in RNA!)", "Cytosine", "Guanine"],
    memory_hint: "Remember: A pairs with U (Apples Under the tree)",
};

/// One box in the central dogma diagram and the arrow leaving it
pub struct FlowStep {
    pub node: &'static str,
    pub caption: &'static str,
    pub edge: Option<&'static str>,
}

pub static CENTRAL_DOGMA: [FlowStep; 3] = [
    FlowStep {
        node: "DNA",
        caption: "The Master Plan",
        edge: Some("Transcription (In Nucleus)"),
    },
    FlowStep {
        node: "mRNA",
        caption: "The Message",
        edge: Some("Translation (In Ribosome)"),
    },
    FlowStep {
        node: "Protein",
        caption: "The Result",
        edge: None,
    },
];

pub static COMPARISON_HEADER: [&str; 3] = ["Feature", "DNA", "RNA"];

pub static COMPARISON_ROWS: [[&str; 3]; 5] = [
    ["Number of Strands", "2 (Double Helix)", "1 (Single Strand)"],
    ["Sugar Type", "Deoxyribose", "Ribose"],
    ["Unique Base", "Thymine (T)", "Uracil (U)"],
    ["Location", "Nucleus", "Nucleus & Cytoplasm"],
    ["Job", "Stores Genetic Info", "Transfers Info/Makes Protein"],
];

pub static TRANSCRIPTION_RULES: [&str; 4] = [
    "G becomes C",
    "C becomes G",
    "T becomes A",
    "A becomes U (Because RNA doesn't have T!)",
];

/// Render the flow as a single line of text, e.g. `[DNA] --Transcription--> [mRNA]`
pub fn flow_line() -> String {
    let mut line = String::new();
    for step in &CENTRAL_DOGMA {
        line.push_str(&format!("[{}: {}]", step.node, step.caption));
        if let Some(edge) = step.edge {
            line.push_str(&format!(" --{edge}--> "));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_line() {
        assert_eq!(
            flow_line(),
            "[DNA: The Master Plan] --Transcription (In Nucleus)--> [mRNA: The Message] --Translation (In Ribosome)--> [Protein: The Result]"
        );
    }

    #[test]
    fn test_comparison_rows_are_complete() {
        for row in COMPARISON_ROWS {
            assert!(row.iter().all(|cell| !cell.is_empty()));
        }
    }
}
