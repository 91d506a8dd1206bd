//! Decoding of the backend's `/plants` and `/cosmetics` payloads.

use crate::{
    error::{Error, Result},
    skin::Skin,
    types::Plant,
};
use serde::Deserialize;

/// One entry of the `/cosmetics` listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Cosmetic {
    /// Catalogue position assigned by the backend.
    pub id: u32,
    /// Stable cosmetic key, e.g. `golden_leaves`.
    #[serde(default)]
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub owned: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PlantsPayload {
    List(Vec<serde_json::Value>),
    Failure { error: String },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CosmeticsPayload {
    List(Vec<serde_json::Value>),
    Wrapped { cosmetics: Vec<serde_json::Value> },
    Failure { error: String },
}

/// Decodes a `/plants` response body.
///
/// Rows that do not decode as a [`Plant`] are skipped with a warning so one
/// bad row does not blank the whole garden.
pub fn parse_plants(json: &str) -> Result<Vec<Plant>> {
    let rows = match serde_json::from_str::<PlantsPayload>(json)? {
        PlantsPayload::List(rows) => rows,
        PlantsPayload::Failure { error } => return Err(Error::Backend(error)),
    };

    let mut plants = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<Plant>(row) {
            Ok(plant) => plants.push(plant),
            Err(err) => log::warn!("skipping plant row {i}: {err}"),
        }
    }
    Ok(plants)
}

/// Decodes a `/cosmetics` response body, either a bare array or an object
/// with a `cosmetics` array.
///
/// Like [`parse_plants`], rows that do not decode as a [`Cosmetic`] are
/// skipped with a warning.
pub fn parse_cosmetics(json: &str) -> Result<Vec<Cosmetic>> {
    let rows = match serde_json::from_str::<CosmeticsPayload>(json)? {
        CosmeticsPayload::List(rows) | CosmeticsPayload::Wrapped { cosmetics: rows } => rows,
        CosmeticsPayload::Failure { error } => return Err(Error::Backend(error)),
    };

    let mut cosmetics = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<Cosmetic>(row) {
            Ok(cosmetic) => cosmetics.push(cosmetic),
            Err(err) => log::warn!("skipping cosmetic row {i}: {err}"),
        }
    }
    Ok(cosmetics)
}

/// The skin to render with, given the user's cosmetics.
///
/// Follows [`Skin::first_owned`]: owned cosmetics are taken in listing
/// order and only the first one is considered.
pub fn active_skin(cosmetics: &[Cosmetic]) -> Option<Skin> {
    Skin::first_owned(
        cosmetics
            .iter()
            .filter(|c| c.owned)
            .map(|c| c.key.as_deref().unwrap_or(c.name.as_str())),
    )
}
