//! Food log manager: validation, append, delete and per-day totals.

use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{EntryDraft, FoodEntry};
use crate::models::macros::MacroTotals;
use chrono::{DateTime, Local, NaiveDate};

pub struct FoodLog<S: EntryStore> {
    store: S,
    entries: Vec<FoodEntry>,
}

impl<S: EntryStore> FoodLog<S> {
    /// Read the persisted list once; every mutation rewrites it whole.
    pub fn load(mut store: S) -> AppResult<Self> {
        let entries = store.load()?;
        Ok(Self { store, entries })
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn add_entry(&mut self, draft: &EntryDraft) -> AppResult<FoodEntry> {
        self.add_entry_at(draft, Local::now())
    }

    /// Validate `draft` and prepend a new entry dated `now`.
    pub fn add_entry_at(&mut self, draft: &EntryDraft, now: DateTime<Local>) -> AppResult<FoodEntry> {
        let food = draft.food.trim();
        if food.is_empty() {
            return Err(AppError::MissingField("食物名称"));
        }
        if draft.calories.trim().is_empty() {
            return Err(AppError::MissingField("热量"));
        }

        let calories = parse_amount("calories", &draft.calories)?;
        let entry = FoodEntry {
            id: self.fresh_id(now.timestamp_millis()),
            date: now.date_naive(),
            meal: draft.meal,
            food: food.to_string(),
            calories,
            protein: parse_optional_amount("protein", draft.protein.as_deref())?,
            carbs: parse_optional_amount("carbs", draft.carbs.as_deref())?,
            fat: parse_optional_amount("fat", draft.fat.as_deref())?,
        };

        self.entries.insert(0, entry.clone());
        self.store.save(&self.entries)?;
        Ok(entry)
    }

    /// Remove the entry with `id`. Returns the removed entry, if any.
    /// A missing id is not an error: the list is persisted unchanged.
    pub fn delete_entry(&mut self, id: &str) -> AppResult<Option<FoodEntry>> {
        let removed = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .map(|idx| self.entries.remove(idx));

        self.store.save(&self.entries)?;
        Ok(removed)
    }

    pub fn find(&self, id: &str) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<&FoodEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Entries with `from <= date <= to`, in stored order.
    pub fn entries_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&FoodEntry> {
        self.entries
            .iter()
            .filter(|e| e.date >= from && e.date <= to)
            .collect()
    }

    pub fn totals_on(&self, date: NaiveDate) -> MacroTotals {
        MacroTotals::sum(self.entries.iter().filter(|e| e.date == date))
    }

    pub fn today_totals(&self) -> MacroTotals {
        self.totals_on(Local::now().date_naive())
    }

    /// Millisecond timestamp, bumped until it does not collide.
    fn fresh_id(&self, millis: i64) -> String {
        let mut candidate = millis;
        while self.entries.iter().any(|e| e.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

fn parse_amount(field: &'static str, raw: &str) -> AppResult<f64> {
    let invalid = || AppError::InvalidNumber {
        field,
        value: raw.to_string(),
    };

    let v: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !v.is_finite() || v < 0.0 {
        return Err(invalid());
    }
    Ok(v)
}

/// Optional macros: missing or unparseable input counts as zero,
/// negative numbers are still rejected.
fn parse_optional_amount(field: &'static str, raw: Option<&str>) -> AppResult<f64> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(0.0);
    };

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(v) if v.is_finite() => Err(AppError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
        _ => Ok(0.0),
    }
}
