pub mod codebook;
pub mod provenance;
pub mod ranges;
pub mod report;
pub mod stats;

pub use codebook::{CellValue, CodebookRecord, VariableLookup};
pub use provenance::{OriginMap, VariableOrigin};
pub use ranges::{RangeTable, ValidRange};
pub use report::{AuditReport, RangeViolation};
pub use stats::StatRecord;
