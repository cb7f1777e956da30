// src/specs/fantasy.rs
//! Reader for Sleeper season totals (`{ "<player id>": { pts_ppr, ... } }`).

use std::collections::HashMap;

use serde_json::Value;

use crate::core::Fetch;
use crate::core::json::num_of;
use crate::error::FetchResult;

/// Point keys in preference order.
const POINT_KEYS: [&str; 3] = ["pts_ppr", "fantasy_points", "points"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeasonPoints(HashMap<String, f64>);

impl SeasonPoints {
    pub fn get(&self, player_id: &str) -> Option<f64> {
        self.0.get(player_id).copied()
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

pub fn fetch(fetcher: &dyn Fetch, url: &str) -> FetchResult<SeasonPoints> {
    let payload = fetcher.get_json(url)?;
    Ok(parse(&payload))
}

/// Players with none of the point keys are left out.
pub fn parse(payload: &Value) -> SeasonPoints {
    let Some(map) = payload.as_object() else {
        return SeasonPoints::default();
    };
    SeasonPoints(
        map.iter()
            .filter_map(|(id, stats)| {
                POINT_KEYS
                    .iter()
                    .find_map(|k| num_of(stats, k))
                    .map(|pts| (id.clone(), pts))
            })
            .collect(),
    )
}
