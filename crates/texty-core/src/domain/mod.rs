pub mod email;
pub mod phone;
pub mod record;

pub use email::sanitize_email;
pub use phone::{format_phone_dashed, normalize_phone};
pub use record::{
    CanonicalField, CanonicalRecord, SourceRecord, BLOCKED_DEFAULT, CANONICAL_HEADERS,
    DEFAULT_OUTPUT_FILE_NAME,
};
