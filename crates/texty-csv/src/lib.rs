pub mod convert;
pub mod error;
pub mod reader;
pub mod writer;

pub use convert::{
    convert_file, default_output_path, extract_phone_list_file, ConversionReport,
    DEFAULT_OUTPUT_FILE_NAME, DEFAULT_PHONE_LIST_FILE_NAME,
};
pub use error::{CsvError, Result};
pub use reader::{parse_source, read_source, SourceTable};
pub use writer::{render_canonical, render_phone_list};
