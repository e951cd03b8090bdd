use anyhow::{Context as _, Result};
use mkt_boundary as json;
use mkt_core::entities::*;
use mkt_db_memory::Snapshot;
use std::{fs, path::Path};

pub fn load_seed_file(path: &Path) -> Result<Snapshot> {
    log::info!("Loading marketplace data from {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Unable to read seed file {}", path.display()))?;
    let dataset: json::Dataset = serde_json::from_str(&contents)
        .with_context(|| format!("Malformed seed file {}", path.display()))?;
    Ok(import_dataset(dataset))
}

/// Malformed dates are dropped with a warning.
pub fn import_dataset(dataset: json::Dataset) -> Snapshot {
    let json::Dataset {
        categories,
        users,
        listings,
    } = dataset;
    for listing in &listings {
        if let Some(created_at) = &listing.created_at {
            if let Err(err) = json::parse_timestamp(created_at) {
                log::warn!("Listing {} has no valid creation time: {err}", listing.id);
            }
        }
    }
    for user in &users {
        if let Some(dob) = &user.dob {
            if let Err(err) = json::parse_date(dob) {
                log::warn!("User {} has no valid date of birth: {err}", user.id);
            }
        }
    }
    Snapshot {
        categories: categories.into_iter().map(Category::from).collect(),
        users: users.into_iter().map(User::from).collect(),
        listings: listings.into_iter().map(Listing::from).collect(),
    }
}
