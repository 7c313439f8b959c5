//! Violation messages shared by the checks and their tests.

pub const NO_PREFIX: &str = "ARK must start with 'ark:/'";
pub const NAAN_TOO_SHORT: &str = "NAAN must be at least 5 digits long";
pub const NAAN_NOT_ALLOWED: &str = "The supplied NAAN is not allowed for the supplied profile";
pub const NO_OBJECT_ID: &str = "The ARK must contain an object identifier";
pub const INVALID_OBJECT_ID: &str = "The object identifier and qualifier is not valid";

pub const EOL_FOUND: &str = "character for EOL found in cell";

pub const WHITESPACE: &str = "field contains invalid characters (e.g., spaces, line breaks)";
pub const BAD_OBJECT_TYPE: &str = "object type field doesn't contain valid value";
pub const BAD_VISIBILITY: &str = "visibility field doesn't contain valid value";

pub const PAGE_NEEDS_SEQUENCE: &str = "the Item Sequence is required for a Page";
pub const NOT_AN_INT: &str = "the Item Sequence is not an integer";
pub const NOT_A_POSITIVE_INT: &str = "the Item Sequence value is not a positive integer";

pub const NO_HOST_DIR: &str = "a HOST_DIR must be set";

pub const URL_FORMAT: &str = "license URL is not in a proper format (check for HTTPS)";
pub const URL_CONNECT: &str = "problem connecting to license URL";
pub const URL_READ: &str = "problem reading body of license URL";
pub const URL_EMPTY: &str = "license URL returned an empty page";
pub const URL_DUPLICATE_BAD: &str = "duplicate invalid license URL";

pub const UNICODE_REPLACEMENT: &str = "field contains unicode replacement char (\u{FFFD})";
pub const UNICODE_DUPLICATE: &str =
    "field duplicates earlier entry with unicode replacement char (\u{FFFD})";

pub const ALL_MEDIA_MISSING: &str = "media fields (width, height, duration, format) are all missing";

pub fn bad_header(header: &str) -> String {
    format!("could not retrieve CSV header: {header}")
}

pub fn field_not_found(field: &str) -> String {
    format!("required field `{field}` was not found")
}

pub fn field_data_not_found(field: &str) -> String {
    format!("data for required field `{field}` was not found")
}

pub fn unknown_profile(profile: &str) -> String {
    format!("unknown profile `{profile}`")
}

pub fn file_not_found(path: &std::path::Path) -> String {
    format!("the file path given does not exist: {}", path.display())
}

pub fn media_field_missing(field: &str) -> String {
    format!("media column `{field}` is missing")
}

pub fn media_field_empty(field: &str) -> String {
    format!("media field `{field}` is empty")
}
