/// Id of the host element the client renders into.
pub const MOUNT_ELEMENT_ID: &str = "root";

/// Every client route lives below this path segment.
pub const BASE_PATH: &str = "colors";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mount_element_id: String,
    pub base_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_element_id: MOUNT_ELEMENT_ID.to_owned(),
            base_path: BASE_PATH.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_well_known_names() {
        let config = AppConfig::default();
        assert_eq!(config.mount_element_id, "root");
        assert_eq!(config.base_path, "colors");
    }
}
