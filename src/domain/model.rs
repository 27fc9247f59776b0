use crate::domain::ports::PreferenceStore;
use crate::utils::error::{PetAgeError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 每個體型 1..15 歲對應的人類年齡
pub const TABLE_YEARS: usize = 15;

const SMALL_TABLE: [f64; TABLE_YEARS] = [
    15.0, 24.0, 28.0, 32.0, 36.0, 40.0, 44.0, 48.0, 52.0, 56.0, 60.0, 64.0, 68.0, 72.0, 76.0,
];
const MEDIUM_TABLE: [f64; TABLE_YEARS] = [
    15.0, 24.0, 28.0, 32.0, 36.0, 42.0, 47.0, 56.0, 56.0, 60.0, 65.0, 69.0, 74.0, 78.0, 83.0,
];
const LARGE_TABLE: [f64; TABLE_YEARS] = [
    15.0, 24.0, 28.0, 32.0, 36.0, 45.0, 50.0, 55.0, 61.0, 66.0, 72.0, 77.0, 82.0, 88.0, 93.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Human-age values indexed by completed pet-years 1..15 (index 0 is year 1).
    pub fn table(self) -> &'static [f64; TABLE_YEARS] {
        match self {
            Self::Small => &SMALL_TABLE,
            Self::Medium => &MEDIUM_TABLE,
            Self::Large => &LARGE_TABLE,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn display_name(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::Small) => "small dog",
            (Locale::En, Self::Medium) => "medium dog",
            (Locale::En, Self::Large) => "large dog",
            (Locale::ZhTw, Self::Small) => "小型犬",
            (Locale::ZhTw, Self::Medium) => "中型犬",
            (Locale::ZhTw, Self::Large) => "大型犬",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SizeCategory {
    type Err = PetAgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(PetAgeError::UnknownSizeCategory {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-tw")]
    ZhTw,
}

impl FromStr for Locale {
    type Err = PetAgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" => Ok(Self::En),
            "zh-tw" => Ok(Self::ZhTw),
            _ => Err(PetAgeError::InvalidConfigValueError {
                field: "display.locale".to_string(),
                value: s.to_string(),
                reason: "Valid values: en, zh-tw".to_string(),
            }),
        }
    }
}

/// 一次計算的輸入 (不直接持久化)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRecord {
    pub birth_date: NaiveDate,
    pub size: SizeCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeReport {
    pub birth_date: NaiveDate,
    pub size: SizeCategory,
    pub chronological_years: f64,
    pub human_years: f64,
}

/// Last submitted form values, stored as two independent string entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub birth: Option<String>,
    pub size: Option<String>,
}

impl Preferences {
    pub const BIRTH_KEY: &'static str = "petBirth";
    pub const SIZE_KEY: &'static str = "petType";

    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self {
            birth: Self::read(store, Self::BIRTH_KEY)?,
            size: Self::read(store, Self::SIZE_KEY)?,
        })
    }

    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &S) -> Result<()> {
        match &self.birth {
            Some(birth) => store.set(Self::BIRTH_KEY, birth)?,
            None => store.remove(Self::BIRTH_KEY)?,
        }
        match &self.size {
            Some(size) => store.set(Self::SIZE_KEY, size)?,
            None => store.remove(Self::SIZE_KEY)?,
        }
        Ok(())
    }

    pub fn from_record(record: &AgeRecord) -> Self {
        Self {
            birth: Some(record.birth_date.format(crate::utils::validation::DATE_FORMAT).to_string()),
            size: Some(record.size.key().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.birth.is_none()
    }

    // 舊資料可能把缺值存成字串 "null"
    fn read<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Result<Option<String>> {
        Ok(store.get(key)?.filter(|v| v != "null"))
    }
}
