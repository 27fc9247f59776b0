use crate::core::converter;
use crate::domain::model::{AgeRecord, AgeReport, Preferences, SizeCategory};
use crate::domain::ports::PreferenceStore;
use crate::utils::error::Result;
use crate::utils::validation::parse_birth_date;
use chrono::{DateTime, TimeZone};

/// Raw form values, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub birth: Option<String>,
    pub size: SizeCategory,
}

impl FormInput {
    pub fn new(birth: Option<impl Into<String>>, size: SizeCategory) -> Self {
        Self {
            birth: birth.map(Into::into),
            size,
        }
    }

    pub fn validate<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<AgeRecord> {
        let birth_date = parse_birth_date(self.birth.as_deref())?;
        // 未來日期的檢查與體型無關
        converter::chronological_age(birth_date, now)?;
        Ok(AgeRecord {
            birth_date,
            size: self.size,
        })
    }
}

/// Handles one "calculate" action: validate, convert, remember the input.
pub struct AgeCalculator<S: PreferenceStore> {
    store: S,
    default_size: SizeCategory,
}

impl<S: PreferenceStore> AgeCalculator<S> {
    pub fn new(store: S, default_size: SizeCategory) -> Self {
        Self {
            store,
            default_size,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn preferences(&self) -> Result<Preferences> {
        Preferences::load(&self.store)
    }

    /// Rebuilds the form from saved preferences, if a birth date was saved.
    pub fn saved_form(&self) -> Result<Option<FormInput>> {
        let prefs = self.preferences()?;
        let Some(birth) = prefs.birth else {
            return Ok(None);
        };

        let size = match prefs.size.as_deref().map(str::parse::<SizeCategory>) {
            Some(Ok(size)) => size,
            Some(Err(e)) => {
                tracing::warn!("Ignoring saved size ({}), using {}", e, self.default_size);
                self.default_size
            }
            None => {
                tracing::warn!("No saved size, using {}", self.default_size);
                self.default_size
            }
        };

        Ok(Some(FormInput {
            birth: Some(birth),
            size,
        }))
    }

    /// 啟動時：若有舊資料就自動重新計算
    pub fn restore<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<Option<AgeReport>> {
        match self.saved_form()? {
            Some(form) => {
                tracing::info!("Restoring saved input: {:?}", form);
                self.calculate(&form, now).map(Some)
            }
            None => Ok(None),
        }
    }

    pub fn calculate<Tz: TimeZone>(&self, form: &FormInput, now: &DateTime<Tz>) -> Result<AgeReport> {
        let record = form.validate(now)?;
        let report = converter::convert(&record, now)?;

        Preferences::from_record(&record).save(&self.store)?;
        tracing::debug!("Saved preferences for {}", record.birth_date);

        Ok(report)
    }

    pub fn clear(&self) -> Result<()> {
        Preferences::default().save(&self.store)?;
        tracing::info!("Cleared saved preferences");
        Ok(())
    }
}
