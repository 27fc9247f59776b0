use crate::utils::error::{PetAgeError, Result};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PetAgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PetAgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 解析表單的出生日期欄位
///
/// 空白或缺少 → `MissingBirthDate`；格式錯誤 → `InvalidBirthDate`。
pub fn parse_birth_date(value: Option<&str>) -> Result<NaiveDate> {
    let raw = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(PetAgeError::MissingBirthDate),
    };

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| PetAgeError::InvalidBirthDate {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
