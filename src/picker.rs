//! Champion draft core: per-role pools loaded from JSON, uniform draws,
//! and full-lineup assembly with duplicate rejection.

use crate::models::PoolFile;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// One positional role: chat trigger, backing data file, key inside that
/// file, display name, and draft priority (higher drafts earlier).
pub struct Role {
    pub trigger: &'static str,
    pub file: &'static str,
    pub key: &'static str,
    pub display: &'static str,
    pub priority: u8,
}

/// Draft order is table order: descending priority, top lane first.
pub const ROLES: &[Role] = &[
    Role {
        trigger: "上单",
        file: "sd.json",
        key: "上单",
        display: "上单",
        priority: 4,
    },
    Role {
        trigger: "中单",
        file: "zd.json",
        key: "中单",
        display: "中单",
        priority: 3,
    },
    Role {
        trigger: "AD",
        file: "xl.json",
        key: "下路",
        display: "下路AD",
        priority: 2,
    },
    Role {
        trigger: "打野",
        file: "dy.json",
        key: "打野",
        display: "打野",
        priority: 1,
    },
    Role {
        trigger: "辅助",
        file: "fz.json",
        key: "辅助",
        display: "辅助",
        priority: 0,
    },
];

pub const LINEUP_TRIGGER: &str = "随机阵容";

/// Bound on redraws per role when rejecting duplicates.
const MAX_ATTEMPTS: u32 = 100;

pub struct HeroPicker {
    data_dir: PathBuf,
}

impl HeroPicker {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Candidate pool for one role, read fresh from disk. Missing file,
    /// unparseable content and absent key all fold into an empty list;
    /// the cause only shows up in the logs.
    pub fn load_hero_list(&self, file: &str, key: &str) -> Vec<String> {
        let path = self.data_dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                error!("failed to read hero list {}: {}", path.display(), e);
                return Vec::new();
            }
        };
        let pools: PoolFile = match serde_json::from_str(&raw) {
            Ok(pools) => pools,
            Err(e) => {
                error!("failed to parse hero list {}: {}", path.display(), e);
                return Vec::new();
            }
        };
        match pools.0.get(key) {
            Some(heroes) => heroes.clone(),
            None => {
                error!("key {} missing in hero list {}", key, path.display());
                Vec::new()
            }
        }
    }

    /// Single-role draw. The returned string is the finished user reply;
    /// `Err` is reserved for faults the caller folds into a generic reply.
    pub fn pick_one(&self, role: &Role) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.pick_one_with(role, &mut rand::thread_rng())
    }

    fn pick_one_with(
        &self,
        role: &Role,
        rng: &mut impl Rng,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let heroes = self.load_hero_list(role.file, role.key);
        if heroes.is_empty() {
            return Ok(format!("未找到可用的{}英雄列表哦~", role.display));
        }

        let hero = heroes
            .choose(rng)
            .ok_or_else(|| format!("empty {} pool during draw", role.display))?;
        Ok(format!("随机抽取的{}英雄是：{}", role.display, hero))
    }

    /// Full five-role draft in descending priority order. Aborts without
    /// partial results on an empty pool or when no non-duplicate champion
    /// turns up within the redraw bound.
    pub fn pick_lineup(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.pick_lineup_with(&mut rand::thread_rng())
    }

    fn pick_lineup_with(
        &self,
        rng: &mut impl Rng,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        // (display name, champion, priority) in selection order
        let mut team: Vec<(&str, String, u8)> = Vec::with_capacity(ROLES.len());

        for role in ROLES {
            let heroes = self.load_hero_list(role.file, role.key);
            if heroes.is_empty() {
                return Ok(format!("未找到可用的{}英雄列表，无法组成阵容~", role.display));
            }

            let mut picked = None;
            for _ in 0..MAX_ATTEMPTS {
                let candidate = heroes
                    .choose(rng)
                    .ok_or_else(|| format!("empty {} pool during draw", role.display))?;
                // exact, case-sensitive comparison against accepted picks
                if team.iter().all(|(_, hero, _)| hero != candidate) {
                    picked = Some(candidate.clone());
                    break;
                }
            }

            let hero = match picked {
                Some(hero) => hero,
                None => {
                    return Ok(format!(
                        "尝试{}次后仍无法为{}找到不重复的英雄，请重试~",
                        MAX_ATTEMPTS, role.display
                    ));
                }
            };

            info!("drafted {} for {}", hero, role.display);
            team.push((role.display, hero, role.priority));
        }

        let mut reply = String::from("随机阵容已生成：\n");
        for (display, hero, _) in &team {
            reply.push_str(&format!("- {}：{}\n", display, hero));
        }
        Ok(reply.trim_end().to_string())
    }
}
