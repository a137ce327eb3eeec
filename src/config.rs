use thiserror::Error;

/// Manifests larger than this are inspected only up to the cap.
pub const DEFAULT_MAX_MANIFEST_BYTES: usize = 64 * 1024;
const MAX_MANIFEST_BYTES_LIMIT: usize = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Tunables for a workspace scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Upper bound for the single read of each manifest.
    pub max_manifest_bytes: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_manifest_bytes: DEFAULT_MAX_MANIFEST_BYTES,
        }
    }
}

impl ScanConfig {
    pub fn with_max_manifest_bytes(mut self, max_manifest_bytes: usize) -> Self {
        self.max_manifest_bytes = max_manifest_bytes;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_manifest_bytes == 0 {
            return Err(ConfigError::ValidationFailed(
                "Max manifest size must be at least 1 byte".to_string(),
            ));
        }
        if self.max_manifest_bytes > MAX_MANIFEST_BYTES_LIMIT {
            return Err(ConfigError::ValidationFailed(format!(
                "Max manifest size cannot exceed {} bytes",
                MAX_MANIFEST_BYTES_LIMIT
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScanConfig::default();
        assert_eq!(config.max_manifest_bytes, 65_536);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = ScanConfig::default().with_max_manifest_bytes(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least 1 byte"));
    }

    #[test]
    fn test_oversized_cap_rejected() {
        let config = ScanConfig::default().with_max_manifest_bytes(32 * 1024 * 1024);
        assert!(config.validate().is_err());
    }
}
