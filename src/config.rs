use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATASET_ROOT: &str = "imagenet-subset";
// Directory name as it exists on disk.
pub const DEFAULT_HIERARCHICAL_PREFIX: &str = "hierchical_datasets/";
pub const DEFAULT_BITMAP_SCALE: f64 = 16.0;
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct HiveConfig {
    /// Root that relative image paths are joined onto.
    pub dataset_root: PathBuf,
    /// Paths starting with this prefix are already rooted.
    pub hierarchical_prefix: String,
    pub bitmap_scale: f64,
    pub thumbnail_size: u32,
}

impl Default for HiveConfig {
    fn default() -> Self {
        HiveConfig {
            dataset_root: PathBuf::from(DEFAULT_DATASET_ROOT),
            hierarchical_prefix: DEFAULT_HIERARCHICAL_PREFIX.to_string(),
            bitmap_scale: DEFAULT_BITMAP_SCALE,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

impl HiveConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = HiveConfig::default();

        if let Some(root) = lookup("HIVE_DATASET_ROOT").filter(|v| !v.trim().is_empty()) {
            config.dataset_root = PathBuf::from(root.trim());
        }
        if let Some(prefix) = lookup("HIVE_HIERARCHICAL_PREFIX").filter(|v| !v.trim().is_empty()) {
            config.hierarchical_prefix = prefix.trim().to_string();
        }
        if let Some(raw) = lookup("HIVE_BITMAP_SCALE") {
            match raw.trim().parse::<f64>() {
                Ok(scale) if scale.is_finite() && scale > 0.0 => config.bitmap_scale = scale,
                _ => tracing::warn!(value = %raw, "ignoring invalid HIVE_BITMAP_SCALE"),
            }
        }
        if let Some(raw) = lookup("HIVE_THUMBNAIL_SIZE") {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => config.thumbnail_size = size,
                _ => tracing::warn!(value = %raw, "ignoring invalid HIVE_THUMBNAIL_SIZE"),
            }
        }

        config
    }

    pub fn with_dataset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.dataset_root = root.into();
        self
    }

    pub fn with_hierarchical_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.hierarchical_prefix = prefix.into();
        self
    }
}
