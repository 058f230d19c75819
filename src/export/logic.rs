use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::models::entry::FoodEntry;
use crate::ui::messages::warning;
use crate::utils::date::range_bounds;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries, oldest first.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `A:B` with A and B any of the above
    ///
    /// Returns the number of exported rows.
    pub fn export(
        entries: &[FoodEntry],
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(range_bounds(r)?),
        };

        let rows = select_rows(entries, bounds);

        if rows.is_empty() {
            warning("No entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}

fn select_rows(
    entries: &[FoodEntry],
    bounds: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
) -> Vec<EntryExport> {
    let mut picked: Vec<&FoodEntry> = entries
        .iter()
        .filter(|e| bounds.is_none_or(|(from, to)| e.date >= from && e.date <= to))
        .collect();

    // stored newest first; exports read chronologically
    picked.reverse();
    picked.sort_by_key(|e| e.date);

    picked.into_iter().map(EntryExport::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meal::Meal;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;

    fn entry(id: &str, day: u32) -> FoodEntry {
        FoodEntry {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            meal: Meal::Dinner,
            food: "清蒸鲈鱼".into(),
            calories: 180.0,
            protein: 32.0,
            carbs: 2.0,
            fat: 5.0,
        }
    }

    #[test]
    fn rows_are_chronological_and_filtered() {
        let entries = vec![entry("c", 19), entry("b", 18), entry("a", 1)];
        let bounds = Some(range_bounds("2026-10-10:2026-10-31").unwrap());
        let ids: Vec<_> = select_rows(&entries, bounds).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn relative_paths_are_refused() {
        let res = ExportLogic::export(&[entry("a", 1)], ExportFormat::Csv, "out.csv", None, true);
        assert!(matches!(res, Err(AppError::Export(_))));
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut path = env::temp_dir();
        path.push("rdietlogger_export_unit.csv");
        let file = path.to_string_lossy().to_string();

        let n = ExportLogic::export(
            &[entry("b", 19), entry("a", 18)],
            ExportFormat::Csv,
            &file,
            Some("all"),
            true,
        )
        .unwrap();
        assert_eq!(n, 2);

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,date,meal,meal_label,food,calories,protein,carbs,fat"
        );
        assert!(lines.next().unwrap().starts_with("a,2026-10-18,dinner,晚餐,清蒸鲈鱼"));
        fs::remove_file(&path).ok();
    }
}
