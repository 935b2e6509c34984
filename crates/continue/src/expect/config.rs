use http::{StatusCode, Version};

/// Wire-level knobs of the continue handshake.
///
/// Defaults: HTTP/1.1 and HTTP/2 honor `Expect: 100-continue`, rejections answer
/// `417 Expectation Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinueConfig {
    continue_versions: Vec<Version>,
    rejection_status: StatusCode,
}

impl ContinueConfig {
    pub fn new(continue_versions: impl IntoIterator<Item = Version>, rejection_status: StatusCode) -> Self {
        Self { continue_versions: continue_versions.into_iter().collect(), rejection_status }
    }

    pub fn continue_versions(&self) -> &[Version] {
        &self.continue_versions
    }

    pub fn rejection_status(&self) -> StatusCode {
        self.rejection_status
    }

    /// Whether requests of `version` can be answered with an interim response.
    pub fn supports_continue(&self, version: Version) -> bool {
        self.continue_versions.contains(&version)
    }

    pub fn with_continue_versions(mut self, versions: impl IntoIterator<Item = Version>) -> Self {
        self.continue_versions = versions.into_iter().collect();
        self
    }

    pub fn with_rejection_status(mut self, status: StatusCode) -> Self {
        self.rejection_status = status;
        self
    }
}

impl Default for ContinueConfig {
    fn default() -> Self {
        Self::new([Version::HTTP_11, Version::HTTP_2], StatusCode::EXPECTATION_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gates_old_versions() {
        let config = ContinueConfig::default();

        assert!(config.supports_continue(Version::HTTP_11));
        assert!(config.supports_continue(Version::HTTP_2));
        assert!(!config.supports_continue(Version::HTTP_10));
        assert!(!config.supports_continue(Version::HTTP_09));
        assert_eq!(config.rejection_status(), StatusCode::EXPECTATION_FAILED);
    }

    #[test]
    fn overrides() {
        let config = ContinueConfig::default()
            .with_continue_versions([Version::HTTP_11])
            .with_rejection_status(StatusCode::PAYLOAD_TOO_LARGE);

        assert_eq!(config.continue_versions(), &[Version::HTTP_11]);
        assert!(!config.supports_continue(Version::HTTP_2));
        assert_eq!(config.rejection_status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
