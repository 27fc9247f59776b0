use anyhow::Result;
use chrono::{TimeZone, Utc};
use pet_age::app;
use pet_age::config::Command;
use pet_age::core::batch::{convert_csv, BatchSummary};
use pet_age::core::report::OutputFormat;
use pet_age::{AppConfig, LocalStore, Locale, Preferences};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use tempfile::TempDir;

const PETS_CSV: &str = "name,birth_date,size\n\
                        Old Timer,2006-01-01,small\n\
                        Puppy,2024-07-01,medium\n\
                        Mystery,not-a-date,large\n";

#[test]
fn test_batch_file_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("pets.csv");
    let output_path = temp_dir.path().join("ages.csv");
    std::fs::write(&input_path, PETS_CSV)?;

    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let summary = {
        let reader = BufReader::new(File::open(&input_path)?);
        let writer = BufWriter::new(File::create(&output_path)?);
        convert_csv(reader, writer, &now, Locale::En)?
    };
    assert_eq!(summary, BatchSummary { converted: 1, failed: 2 });

    let mut reader = csv::Reader::from_path(&output_path)?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 3);

    // 2006-01-01 → 2024-01-01 is 18.0 years, extrapolated past the table
    assert_eq!(&rows[0][3], "18.0");
    assert_eq!(&rows[0][4], "88.0");
    assert_eq!(&rows[0][5], "");

    assert_eq!(&rows[1][3], "");
    assert!(rows[1][5].contains("future"));
    assert!(rows[2][5].contains("not-a-date"));
    Ok(())
}

#[test]
fn test_batch_errors_follow_locale() -> Result<()> {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut output = Vec::new();

    convert_csv(PETS_CSV.as_bytes(), &mut output, &now, Locale::ZhTw)?;

    let text = String::from_utf8(output)?;
    assert!(text.contains("出生日期不能在未來。"));
    assert!(text.contains("「not-a-date」不是有效的出生日期。"));
    Ok(())
}

/// 批次轉換不可改動已儲存的偏好設定
#[test]
fn test_batch_command_leaves_saved_preferences_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().join("prefs.toml");
    let input_path = temp_dir.path().join("pets.csv");
    std::fs::write(&input_path, PETS_CSV)?;

    let saved = Preferences {
        birth: Some("2019-03-10".to_string()),
        size: Some("large".to_string()),
    };
    saved.save(&LocalStore::new(&store_path))?;
    let before = std::fs::read(&store_path)?;

    let command = Command::Batch {
        input: input_path,
        output: None,
        as_of: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
    };
    let mut config = AppConfig::default();
    config.storage.path = store_path.to_string_lossy().into_owned();
    config.display.format = OutputFormat::Text;

    let mut stdout = Vec::new();
    app::execute(Some(&command), &config, LocalStore::new(&store_path), &mut stdout)?;

    let csv_out = String::from_utf8(stdout)?;
    assert!(csv_out.starts_with("name,birth_date,size,chronological_years,human_years,error\n"));
    assert!(csv_out.contains("Old Timer,2006-01-01,small,18.0,88.0,"));

    assert_eq!(std::fs::read(&store_path)?, before);
    assert_eq!(Preferences::load(&LocalStore::new(&store_path))?, saved);
    Ok(())
}
