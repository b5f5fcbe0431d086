//! JavaScript bindings.
//!
//! Inputs and outputs cross the boundary as plain JS objects using the
//! camelCase field names of the serde representations.

use crate::geometry::Seat;
use crate::lottery::{LockedAssignment, LotteryConfig, LotteryResult, LotteryRunner};
use crate::rating::compute_score_updates;
use crate::tiering::Application;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("invalid {what}: {e}")))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Runs a lottery. `config` may be `undefined` for defaults.
#[wasm_bindgen(js_name = runLottery)]
pub fn run_lottery(
    seats: JsValue,
    applications: JsValue,
    locked: JsValue,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let seats: Vec<Seat> = from_js(seats, "seats")?;
    let applications: Vec<Application> = from_js(applications, "applications")?;
    let locked: Vec<LockedAssignment> = if locked.is_undefined() || locked.is_null() {
        Vec::new()
    } else {
        from_js(locked, "locked assignments")?
    };
    let config: LotteryConfig = if config.is_undefined() || config.is_null() {
        LotteryConfig::default()
    } else {
        from_js(config, "config")?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = LotteryRunner::run_with_locks(&seats, &applications, &locked, &config);
    to_js(&result)
}

/// Computes next-round scores from a run result.
#[wasm_bindgen(js_name = computeScoreUpdates)]
pub fn compute_score_updates_js(
    result: JsValue,
    applications: JsValue,
) -> Result<JsValue, JsValue> {
    let result: LotteryResult = from_js(result, "result")?;
    let applications: Vec<Application> = from_js(applications, "applications")?;
    let updates = compute_score_updates(&result.assignments, &result.unassigned, &applications);
    to_js(&updates)
}
