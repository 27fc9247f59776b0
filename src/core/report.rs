use crate::core::batch::BatchSummary;
use crate::domain::model::{AgeReport, Locale, SizeCategory};
use crate::utils::error::{PetAgeError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &AgeReport, locale: Locale, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, locale)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn render_text(report: &AgeReport, locale: Locale) -> String {
    let size_name = report.size.display_name(locale);
    match locale {
        Locale::En => format!(
            "Chronological age: {} years\nHuman-equivalent age ({} table): {} years",
            report.chronological_years, size_name, report.human_years
        ),
        Locale::ZhTw => format!(
            "狗狗實際（精確）年齡: {} 歲\n換算成人類年齡（依體型 {} 的對照表）: {} 歲",
            report.chronological_years, size_name, report.human_years
        ),
    }
}

/// Error text in the given locale, without decoration.
pub fn error_message(error: &PetAgeError, locale: Locale) -> String {
    match locale {
        Locale::En => error.user_friendly_message(),
        Locale::ZhTw => zh_tw_message(error),
    }
}

/// Inline message for an error shown in place of the result.
pub fn render_error(error: &PetAgeError, locale: Locale) -> String {
    format!("❌ {}", error_message(error, locale))
}

pub fn render_suggestion(error: &PetAgeError, locale: Locale) -> String {
    let suggestion = match locale {
        Locale::En => error.recovery_suggestion(),
        Locale::ZhTw => zh_tw_suggestion(error).to_string(),
    };
    format!("💡 {}", suggestion)
}

pub fn render_nothing_saved(locale: Locale, format: OutputFormat) -> String {
    match (format, locale) {
        (OutputFormat::Json, _) => "null".to_string(),
        (OutputFormat::Text, Locale::En) => {
            "No saved input yet. Run `pet-age calc --birth YYYY-MM-DD --size small`.".to_string()
        }
        (OutputFormat::Text, Locale::ZhTw) => {
            "尚未儲存資料，請先執行 `pet-age calc --birth YYYY-MM-DD --size small`。".to_string()
        }
    }
}

pub fn render_batch_summary(summary: &BatchSummary, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "✅ {} converted, {} failed",
            summary.converted, summary.failed
        ),
        Locale::ZhTw => format!(
            "✅ 已轉換 {} 筆，失敗 {} 筆",
            summary.converted, summary.failed
        ),
    }
}

pub fn render_table(size: SizeCategory, locale: Locale) -> String {
    let (header, unit) = match locale {
        Locale::En => ("Pet years -> human years", "years"),
        Locale::ZhTw => ("狗狗年齡 -> 人類年齡", "歲"),
    };

    let rows = size
        .table()
        .iter()
        .enumerate()
        .map(|(index, human_years)| format!("{:>2} -> {:>3} {}\n", index + 1, human_years, unit));

    std::iter::once(format!("{} ({})\n", header, size.display_name(locale)))
        .chain(rows)
        .collect()
}

fn zh_tw_message(error: &PetAgeError) -> String {
    match error {
        PetAgeError::MissingBirthDate => "請選擇出生日期。".to_string(),
        PetAgeError::FutureBirthDate { .. } => "出生日期不能在未來。".to_string(),
        PetAgeError::InvalidBirthDate { value, .. } => format!("「{}」不是有效的出生日期。", value),
        PetAgeError::UnknownSizeCategory { value } => format!("「{}」不是已知的體型。", value),
        PetAgeError::IoError(e) => format!("無法讀寫檔案: {}", e),
        PetAgeError::TomlDeError(e) => format!("TOML 解析錯誤: {}", e),
        PetAgeError::TomlSerError(e) => format!("TOML 序列化錯誤: {}", e),
        PetAgeError::CsvError(e) => format!("CSV 處理錯誤: {}", e),
        PetAgeError::SerializationError(e) => format!("序列化錯誤: {}", e),
        PetAgeError::ConfigValidationError { field, message } => {
            format!("配置驗證失敗 ({}): {}", field, message)
        }
        PetAgeError::InvalidConfigValueError {
            field,
            value,
            reason,
        } => format!("「{}」的值「{}」無效: {}", field, value, reason),
        PetAgeError::StorageError { message } => format!("無法存取已儲存的資料: {}", message),
    }
}

fn zh_tw_suggestion(error: &PetAgeError) -> &'static str {
    match error {
        PetAgeError::MissingBirthDate => "請用 --birth YYYY-MM-DD 指定出生日期",
        PetAgeError::InvalidBirthDate { .. } => "請使用 YYYY-MM-DD 格式，例如 --birth 2020-05-17",
        PetAgeError::FutureBirthDate { .. } => "請確認出生日期，或 --as-of 指定的日期",
        PetAgeError::UnknownSizeCategory { .. } => "可用的體型: small, medium, large",
        PetAgeError::IoError(_) | PetAgeError::StorageError { .. } => {
            "請確認偏好設定檔的位置可寫入 (--store)"
        }
        PetAgeError::TomlSerError(_) => "請回報此錯誤",
        PetAgeError::TomlDeError(_)
        | PetAgeError::ConfigValidationError { .. }
        | PetAgeError::InvalidConfigValueError { .. } => "請修正配置檔，或在命令列覆蓋該設定",
        PetAgeError::CsvError(_) => "請確認 CSV 有 name,birth_date,size 標題列",
        PetAgeError::SerializationError(_) => "請改用 --format text",
    }
}
