mod tar_extractor;

pub use tar_extractor::{strip_member_name, ExtractionSummary, TarExtractor};
