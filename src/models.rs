use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Data Models
/// A role data file: mapping from role key to that role's champion names.
/// Each shipped file carries a single key, but the format allows more.
#[derive(Deserialize)]
pub struct PoolFile(pub HashMap<String, Vec<String>>);

// API Models
#[derive(Serialize)]
pub struct LineupResponse {
    pub message: String,
    pub status: String,
}
