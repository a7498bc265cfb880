//! Files handed back to the user.

use chrono::NaiveDateTime;

/// A named file produced by export or render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// Suggested file name
    pub file_name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

/// `{prefix}-YYYYMMDD-HHMMSS.{extension}`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use podium_presenter::timestamped_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(14, 5, 7)
///     .unwrap();
/// assert_eq!(timestamped_name("outline", "json", at), "outline-20240309-140507.json");
/// ```
pub fn timestamped_name(prefix: &str, extension: &str, at: NaiveDateTime) -> String {
    format!("{}-{}.{}", prefix, at.format("%Y%m%d-%H%M%S"), extension)
}

pub(crate) fn now_named(prefix: &str, extension: &str) -> String {
    timestamped_name(prefix, extension, chrono::Local::now().naive_local())
}
