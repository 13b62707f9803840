use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Sqlite,
    /// Records live in process memory and are lost on restart.
    Memory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub kind: StoreKind,

    #[serde(default = "default_store_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::default(),
            path: default_store_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl StoreConfig {
    pub fn database_url(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}

fn default_store_path() -> String {
    "./custom-dns.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}
