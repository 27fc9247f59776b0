use crate::config::{AppConfig, Command};
use crate::core::batch;
use crate::core::calculator::{AgeCalculator, FormInput};
use crate::core::converter::resolve_now;
use crate::core::report;
use crate::domain::model::SizeCategory;
use crate::domain::ports::PreferenceStore;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

/// 沒有子命令時的行為：與頁面載入一樣，重新計算上次的輸入
pub fn default_command() -> Command {
    Command::Show { as_of: None }
}

/// Runs one command against `store`, writing results to `out`.
pub fn execute<S: PreferenceStore, W: Write>(
    command: Option<&Command>,
    config: &AppConfig,
    store: S,
    out: &mut W,
) -> Result<()> {
    let locale = config.display.locale;
    let format = config.display.format;
    let calculator = AgeCalculator::new(store, config.defaults.size);

    match command.cloned().unwrap_or_else(default_command) {
        Command::Calc { birth, size, as_of } => {
            let form = FormInput::new(birth, size.unwrap_or(config.defaults.size));
            let report = calculator.calculate(&form, &resolve_now(as_of)?)?;
            writeln!(out, "{}", report::render(&report, locale, format)?)?;
        }
        Command::Show { as_of } => match calculator.restore(&resolve_now(as_of)?)? {
            Some(report) => writeln!(out, "{}", report::render(&report, locale, format)?)?,
            None => {
                tracing::info!("Nothing saved in {}", config.store_path().display());
                writeln!(out, "{}", report::render_nothing_saved(locale, format))?;
            }
        },
        Command::Clear => calculator.clear()?,
        Command::Table { size } => {
            let sizes = size.map(|s| vec![s]).unwrap_or_else(|| SizeCategory::ALL.to_vec());
            for (index, size) in sizes.into_iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", report::render_table(size, locale))?;
            }
        }
        Command::Batch {
            input,
            output,
            as_of,
        } => {
            let now = resolve_now(as_of)?;
            let reader = BufReader::new(File::open(&input)?);
            let summary = match output {
                Some(path) => {
                    batch::convert_csv(reader, BufWriter::new(File::create(path)?), &now, locale)?
                }
                None => batch::convert_csv(reader, &mut *out, &now, locale)?,
            };
            eprintln!("{}", report::render_batch_summary(&summary, locale));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_store::MemoryStore;
    use crate::core::report::OutputFormat;
    use crate::domain::model::{Locale, Preferences};
    use chrono::NaiveDate;

    fn as_of() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2022, 8, 1)
    }

    fn saved_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.set(Preferences::BIRTH_KEY, "2020-01-01").unwrap();
        store.set(Preferences::SIZE_KEY, "small").unwrap();
        store
    }

    fn run(command: Option<Command>, config: &AppConfig, store: &MemoryStore) -> Result<String> {
        let mut out = Vec::new();
        execute(command.as_ref(), config, store, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_no_subcommand_restores_saved_input() {
        let store = saved_store();
        let output = run(None, &AppConfig::default(), &store).unwrap();

        assert!(output.starts_with("Chronological age: "));
        assert!(output.contains("(small dog table)"));
    }

    #[test]
    fn test_show_as_of_is_reproducible() {
        let store = saved_store();
        let output = run(Some(Command::Show { as_of: as_of() }), &AppConfig::default(), &store).unwrap();

        assert_eq!(
            output,
            "Chronological age: 2.6 years\nHuman-equivalent age (small dog table): 26.4 years\n"
        );
    }

    #[test]
    fn test_nothing_saved_text_and_json() {
        let store = MemoryStore::new();
        let mut config = AppConfig::default();

        let text = run(None, &config, &store).unwrap();
        assert!(text.starts_with("No saved input yet."));

        config.display.format = OutputFormat::Json;
        let json = run(None, &config, &store).unwrap();
        assert_eq!(json, "null\n");
    }

    #[test]
    fn test_calc_writes_report_and_saves() {
        let store = MemoryStore::new();
        let mut config = AppConfig::default();
        config.display.locale = Locale::ZhTw;
        config.defaults.size = SizeCategory::Large;

        let command = Command::Calc {
            birth: Some("2020-01-01".to_string()),
            size: None,
            as_of: as_of(),
        };
        let output = run(Some(command), &config, &store).unwrap();

        assert!(output.contains("依體型 大型犬 的對照表"));
        assert_eq!(store.get(Preferences::SIZE_KEY).unwrap().as_deref(), Some("large"));
    }

    #[test]
    fn test_calc_future_date_saves_nothing() {
        let store = MemoryStore::new();
        let command = Command::Calc {
            birth: Some("2022-08-02".to_string()),
            size: Some(SizeCategory::Small),
            as_of: as_of(),
        };

        let result = run(Some(command), &AppConfig::default(), &store);
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_forgets_saved_input() {
        let store = saved_store();
        run(Some(Command::Clear), &AppConfig::default(), &store).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_table_prints_every_size() {
        let store = MemoryStore::new();
        let output = run(Some(Command::Table { size: None }), &AppConfig::default(), &store).unwrap();

        assert!(output.contains("(small dog)"));
        assert!(output.contains("(medium dog)"));
        assert!(output.contains("(large dog)"));
        assert_eq!(output.lines().count(), 3 * 16 + 2);
    }
}
