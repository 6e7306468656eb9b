//! F&B commands: monthly inventories (live collection) plus the cache-only
//! cost-control data (recipes, ratio items, categories).

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use hotelos_shared::constants::{COLLECTION_INVENTORY, ID_FIELD};
use hotelos_shared::entities::{InventoryStatus, MonthlyInventory, RatioItem, Recipe};
use hotelos_store::keys;
use hotelos_sync::{check, Capability};

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Persist a monthly inventory.  The remote document is keyed by its
/// `monthId`, which doubles as the document id.
pub async fn save_inventory(
    state: &Arc<Mutex<AppState>>,
    inventory: MonthlyInventory,
) -> Result<()> {
    if inventory.month_id.is_empty() {
        return Err(ClientError::Invalid(
            "Inventory must carry a monthId".to_string(),
        ));
    }

    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::Fnb)?;
        guard.writer()?
    };

    let mut document = serde_json::to_value(&inventory)?;
    document[ID_FIELD] = serde_json::Value::String(inventory.month_id.clone());
    writer.write_raw(COLLECTION_INVENTORY, document).await?;
    info!(month = %inventory.month_id, "Inventory saved");
    Ok(())
}

/// Close a month: mark it closed, stamp the closing time, re-persist.
pub async fn close_month(state: &Arc<Mutex<AppState>>, month_id: &str) -> Result<()> {
    let mut inventory = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        check(guard.profile()?, Capability::Fnb)?;
        guard
            .view
            .inventory
            .get(month_id)
            .cloned()
            .ok_or_else(|| ClientError::Invalid(format!("Unknown inventory month: {month_id}")))?
    };

    inventory.status = InventoryStatus::Closed;
    inventory.closed_at = Some(Utc::now());
    save_inventory(state, inventory).await
}

/// Replace the recipe sheets.  Cache-only.
pub fn save_recipes(state: &Arc<Mutex<AppState>>, recipes: Vec<Recipe>) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::Fnb)?;

    guard.view.recipes = recipes;
    let recipes = guard.view.recipes.clone();
    guard.cache()?.save(keys::RECIPES, &recipes)?;
    Ok(())
}

/// Replace the ratio lines.  Cache-only.
pub fn save_ratio_items(state: &Arc<Mutex<AppState>>, items: Vec<RatioItem>) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::Fnb)?;

    guard.view.ratio_items = items;
    let items = guard.view.ratio_items.clone();
    guard.cache()?.save(keys::RATIO_ITEMS, &items)?;
    Ok(())
}

/// Replace the ratio category list.  Cache-only.
pub fn save_ratio_categories(state: &Arc<Mutex<AppState>>, categories: Vec<String>) -> Result<()> {
    let mut guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
    check(guard.profile()?, Capability::Fnb)?;

    guard.view.ratio_categories = categories;
    let categories = guard.view.ratio_categories.clone();
    guard.cache()?.save(keys::RATIO_CATEGORIES, &categories)?;
    Ok(())
}
