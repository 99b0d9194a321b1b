use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::tournament::TournamentNaming;
use crate::domain::TournamentRecord;
use crate::errors::store_context;

/// Directory of `NNN_slug.json` tournament records
pub struct RecordStore {
    dir: PathBuf,
    naming: TournamentNaming,
}

impl RecordStore {
    /// Open the store, creating the directory if needed
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        Ok(Self {
            dir,
            naming: TournamentNaming::new()?,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn naming(&self) -> &TournamentNaming {
        &self.naming
    }

    /// Write one record under its stable file name
    pub fn save_record(&self, record: &TournamentRecord) -> Result<PathBuf> {
        let file_name = self.naming.record_file_name(record.order, record.name.as_deref(), record.title.as_deref());
        let path = self.dir.join(file_name);
        write_json(&path, record)?;
        debug!("Saved record: {}", path.display());
        Ok(path)
    }

    pub fn save_all(&self, records: &[TournamentRecord]) -> Result<Vec<PathBuf>> {
        let paths = records
            .iter()
            .map(|record| self.save_record(record))
            .collect::<Result<Vec<_>>>()?;
        info!("Wrote {} tournament files to {}", paths.len(), self.dir.display());
        Ok(paths)
    }
}

/// Record files (`NNN_*.json`) directly inside `dir`, sorted by name
pub fn list_record_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| store_context("list", &dir.display().to_string()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_record_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

pub fn load_record(path: &Path) -> Result<TournamentRecord> {
    read_json(path)
}

fn is_record_file(path: &Path) -> bool {
    let has_json_ext = path.extension().is_some_and(|ext| ext == "json");
    let starts_with_digit = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.chars().next())
        .is_some_and(|c| c.is_ascii_digit());
    has_json_ext && starts_with_digit
}

fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let key = path.display().to_string();
    let json = serde_json::to_string_pretty(data).with_context(|| store_context("serialize", &key))?;
    fs::write(path, json).with_context(|| store_context("write", &key))?;
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let key = path.display().to_string();
    let json = fs::read_to_string(path).with_context(|| store_context("read", &key))?;
    serde_json::from_str(&json).with_context(|| {
        format!(
            "Failed to parse JSON from {:?}. First 200 chars: {}",
            path,
            json.chars().take(200).collect::<String>()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChampionSource, Finalist};
    use chrono::{TimeZone, Utc};

    fn temp_store(name: &str) -> RecordStore {
        let dir = std::env::temp_dir().join(format!("wta_store_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        RecordStore::new(&dir).unwrap()
    }

    fn record(order: usize, name: &str) -> TournamentRecord {
        TournamentRecord {
            order,
            tournament_group_id: Some(1058),
            name: Some(name.to_string()),
            title: Some(format!("{} Open", name)),
            level: Some("WTA 250".to_string()),
            level_number: Some("250".to_string()),
            year: Some(2026),
            start_date: Some("2026-01-04".to_string()),
            end_date: None,
            surface: Some("Hard".to_string()),
            indoor_outdoor: None,
            city: None,
            country: None,
            status: None,
            draw_size_singles: Some(32),
            draw_size_doubles: None,
            prize_money: None,
            prize_money_currency: None,
            champion: Some(Finalist {
                id: Some("1".to_string()),
                name: "Iga Swiatek".to_string(),
                country: Some("POL".to_string()),
            }),
            runner_up: None,
            champion_source: Some(ChampionSource::WinnersList),
            draw_year: None,
            draw: None,
            scores_year: Some(2026),
            matches: Vec::new(),
            generated_at: Utc.with_ymd_and_hms(2026, 1, 12, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_save_and_load_record() {
        let store = temp_store("roundtrip");
        let original = record(3, "Hobart International");

        let path = store.save_record(&original).unwrap();
        assert_eq!(path.file_name().unwrap(), "003_hobart-international.json");

        let loaded = load_record(&path).unwrap();
        assert_eq!(loaded, original);

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_list_records_skips_other_files() {
        let store = temp_store("listing");
        store.save_all(&[record(2, "Linz"), record(1, "Abu Dhabi")]).unwrap();
        fs::write(store.dir().join("notes.json"), "{}").unwrap();
        fs::write(store.dir().join("004_readme.txt"), "").unwrap();

        let names: Vec<String> = list_record_files(store.dir())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["001_abu-dhabi.json", "002_linz.json"]);

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_load_invalid_file() {
        let store = temp_store("invalid");
        let path = store.dir().join("001_broken.json");
        fs::write(&path, "{\"order\": ").unwrap();

        let err = load_record(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));

        fs::remove_dir_all(store.dir()).unwrap();
    }
}
