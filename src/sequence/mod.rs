pub mod analysis;
pub mod codon;
pub mod conversion;

pub use analysis::*;
pub use codon::*;
pub use conversion::*;
