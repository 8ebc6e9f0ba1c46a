pub mod domain;
pub mod error;
pub mod mapping;
pub mod phone_list;

pub use domain::*;
pub use error::CoreError;
pub use mapping::{
    map_record, map_records, select_first_non_empty, ColumnMap, FieldNormalizer, FieldRule,
};
pub use phone_list::{extract_phone_list, PhoneList, PhoneListReport, PHONE_LIST_HEADER};
