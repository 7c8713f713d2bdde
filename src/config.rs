use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::game::{MIN_PLAYERS, Role, clamp_players};

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub role: Role,
    pub players: u8,
    pub recent_calls: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            role: Role::Player,
            players: MIN_PLAYERS,
            recent_calls: 5,
        }
    }
}

impl GameConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config_map = parse_config(&content)?;
        Ok(Self::from_map(&config_map))
    }

    fn from_map(config_map: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        let role = config_map
            .get("role")
            .and_then(|r| r.parse::<Role>().ok())
            .unwrap_or(defaults.role);

        // Non-numeric player counts fall back to the minimum; numeric ones
        // clamp no matter how large, so parse wide and saturate
        let players = config_map
            .get("players")
            .and_then(|p| p.parse::<u64>().ok())
            .map(|p| clamp_players(p.min(u16::MAX as u64) as u16))
            .unwrap_or(MIN_PLAYERS);

        let recent_calls = config_map
            .get("recent_calls")
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(defaults.recent_calls);

        GameConfig { role, players, recent_calls }
    }

    pub fn load_or_default() -> Self {
        let config_path = "conf/bingo.conf";

        match Self::from_file(config_path) {
            Ok(config) => {
                println!("📄 Loaded configuration from {}", config_path);
                config
            }
            Err(e) => {
                println!("⚠️  Could not load config from {}: {}. Using defaults.", config_path, e);
                Self::default()
            }
        }
    }
}

fn parse_config(content: &str) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse key = value pairs
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_string();
            let value = value.trim().to_string();
            config.insert(key, value);
        }
    }

    Ok(config)
}
