// src/pipeline/table.rs

//! Aggregation and filter pipeline.
//!
//! Turns normalized records into the export table: membership filter,
//! display title-casing, derived BMI column. Rows whose BMI cannot be
//! computed are dropped like any other per-item failure.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::PokemonRecord;
use crate::utils::title_case;

/// Column order of the emitted schema.
pub const COLUMNS: [&str; 10] = [
    "name",
    "id",
    "base_experience",
    "weight_hg",
    "height_dm",
    "order",
    "game_versions",
    "types",
    "front_default_sprite_url",
    "BMI",
];

/// One emitted row. Field order matches [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub name: String,
    pub id: i64,
    pub base_experience: i64,
    pub weight_hg: i64,
    pub height_dm: i64,
    pub order: i64,

    /// Semicolon-joined game versions
    pub game_versions: String,

    /// Semicolon-joined type tags
    pub types: String,

    /// Empty cell when the API served no sprite
    pub front_default_sprite_url: Option<String>,

    #[serde(rename = "BMI")]
    pub bmi: f64,
}

/// Build the export table from normalized records.
///
/// Steps, in order: retain records whose game versions intersect
/// `required_games`, title-case the retained names, then derive BMI per row.
pub fn build_table(records: Vec<PokemonRecord>, required_games: &[String]) -> Vec<ExportRow> {
    let required: HashSet<String> = required_games.iter().cloned().collect();
    let total = records.len();

    let mut rows = Vec::new();
    let mut filtered_out = 0usize;

    for record in records {
        if !record.in_games(&required) {
            filtered_out += 1;
            continue;
        }

        let name = title_case(&record.name);
        let bmi = match compute_bmi(record.weight_hg, record.height_dm) {
            Ok(bmi) => bmi,
            Err(error) => {
                log::error!("Dropping {}: {}", record.name, error);
                continue;
            }
        };

        rows.push(ExportRow {
            name,
            id: record.id,
            base_experience: record.base_experience,
            weight_hg: record.weight_hg,
            height_dm: record.height_dm,
            order: record.order,
            game_versions: record.game_versions.join(";"),
            types: record.types.join(";"),
            front_default_sprite_url: record.front_default_sprite_url,
            bmi,
        });
    }

    log::debug!(
        "Game filter kept {} of {} records ({} filtered out)",
        rows.len(),
        total,
        filtered_out
    );

    rows
}

/// Derive BMI from raw API units (hectograms, decimeters): kg / m².
///
/// A zero height has no defined BMI and is reported as a computation error
/// rather than dividing by zero.
pub fn compute_bmi(weight_hg: i64, height_dm: i64) -> Result<f64> {
    if height_dm == 0 {
        return Err(AppError::compute("height_dm is zero, BMI undefined"));
    }

    let weight_kg = weight_hg as f64 / 10.0;
    let height_m = height_dm as f64 / 10.0;
    Ok(weight_kg / (height_m * height_m))
}
