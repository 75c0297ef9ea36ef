pub mod codebook;
pub mod tabstat;

pub use codebook::{DELIMITER_CANDIDATES, detect_delimiter, parse_codebook, read_codebook};
pub use tabstat::{parse_tabstat, read_tabstat};
