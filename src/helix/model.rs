//! Base pair tags and the stack of pairs a student builds up.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

pub const AT_COLOR: &str = "#3498db";
pub const TA_COLOR: &str = "#f1c40f";
pub const GC_COLOR: &str = "#2ecc71";
pub const CG_COLOR: &str = "#e74c3c";
pub const DEFAULT_COLOR: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairTag {
    AT,
    TA,
    GC,
    CG,
}

impl PairTag {
    pub const ALL: [PairTag; 4] = [PairTag::AT, PairTag::TA, PairTag::GC, PairTag::CG];

    pub fn as_str(&self) -> &'static str {
        match self {
            PairTag::AT => "A-T",
            PairTag::TA => "T-A",
            PairTag::GC => "G-C",
            PairTag::CG => "C-G",
        }
    }

    pub fn color(&self) -> &'static str {
        pair_color(self.as_str())
    }
}

impl AsRef<str> for PairTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PairTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PairTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A-T" => Ok(PairTag::AT),
            "T-A" => Ok(PairTag::TA),
            "G-C" => Ok(PairTag::GC),
            "C-G" => Ok(PairTag::CG),
            other => Err(format!("Unknown base pair tag '{other}'")),
        }
    }
}

/// Hex display color for a base pair tag; anything unrecognised is black
pub fn pair_color(tag: &str) -> &'static str {
    match tag {
        "A-T" => AT_COLOR,
        "T-A" => TA_COLOR,
        "G-C" => GC_COLOR,
        "C-G" => CG_COLOR,
        _ => DEFAULT_COLOR,
    }
}

/// The only ways a helix sequence can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelixAction {
    Add(PairTag),
    Undo,
    Reset,
}

/// Ordered base pairs of the helix being built. Grows and shrinks at the end only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HelixSequence {
    pairs: Vec<PairTag>,
}

impl HelixSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pairs(&self) -> &[PairTag] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn append(&mut self, tag: PairTag) {
        self.pairs.push(tag);
        trace!("Appended {tag}, helix now has {} pairs", self.pairs.len());
    }

    /// Remove the most recently added pair. Does nothing on an empty helix.
    pub fn remove_last(&mut self) -> Option<PairTag> {
        let removed = self.pairs.pop();
        trace!("Removed {removed:?}, helix now has {} pairs", self.pairs.len());
        removed
    }

    pub fn reset(&mut self) {
        debug!("Resetting helix of {} pairs", self.pairs.len());
        self.pairs.clear();
    }

    pub fn apply(&mut self, action: HelixAction) {
        match action {
            HelixAction::Add(tag) => self.append(tag),
            HelixAction::Undo => {
                self.remove_last();
            }
            HelixAction::Reset => self.reset(),
        }
    }

    /// Letters along the first strand, e.g. "ATGC" for A-T, T-A, G-C, C-G
    pub fn strand_letters(&self) -> String {
        self.pairs
            .iter()
            .filter_map(|tag| tag.as_str().chars().next())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HelixSequence {
        let mut helix = HelixSequence::new();
        helix.append(PairTag::AT);
        helix.append(PairTag::CG);
        helix
    }

    #[test]
    fn test_pair_colors() {
        assert_eq!(PairTag::AT.color(), "#3498db");
        assert_eq!(PairTag::TA.color(), "#f1c40f");
        assert_eq!(PairTag::GC.color(), "#2ecc71");
        assert_eq!(PairTag::CG.color(), "#e74c3c");
        assert_eq!(pair_color("A-U"), "#000000");
    }

    #[test]
    fn test_pair_tag_parsing() {
        for tag in PairTag::ALL {
            assert_eq!(tag.to_string().parse::<PairTag>(), Ok(tag));
        }
        assert!("a-t".parse::<PairTag>().is_err());
    }

    #[test]
    fn test_append_then_undo_restores() {
        for start in [HelixSequence::new(), sample()] {
            let mut helix = start.clone();
            helix.apply(HelixAction::Add(PairTag::GC));
            assert_eq!(helix.len(), start.len() + 1);
            assert_eq!(helix.pairs().last(), Some(&PairTag::GC));
            helix.apply(HelixAction::Undo);
            assert_eq!(helix, start);
        }
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut helix = HelixSequence::new();
        assert_eq!(helix.remove_last(), None);
        helix.apply(HelixAction::Undo);
        helix.apply(HelixAction::Undo);
        assert!(helix.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut helix = sample();
        helix.apply(HelixAction::Reset);
        assert!(helix.is_empty());
        helix.apply(HelixAction::Reset);
        assert!(helix.is_empty());
    }

    #[test]
    fn test_strand_letters() {
        assert_eq!(sample().strand_letters(), "AC");
    }
}
