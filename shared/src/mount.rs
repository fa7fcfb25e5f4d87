use crate::AppConfig;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("mount target `#{0}` is missing from the host document")]
    MountTargetMissing(String),
}

/// The document the client application is injected into.
pub trait MountHost {
    fn has_element(&self, id: &str) -> bool;

    /// Builds the render root inside the element with the given id and renders the app into it.
    fn render_root(&mut self, id: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    Mounted,
    AlreadyMounted,
}

/// Binds the application to its attachment point. The render root is built at most once;
/// everything after that is re-rendering driven by navigation.
pub struct MountBinder<H> {
    host: H,
    config: AppConfig,
    mounted: bool,
}

impl<H: MountHost> MountBinder<H> {
    pub fn new(host: H, config: AppConfig) -> Self {
        Self {
            host,
            config,
            mounted: false,
        }
    }

    pub fn mount(&mut self) -> Result<MountState, MountError> {
        if self.mounted {
            debug!(id = %self.config.mount_element_id, "render root already mounted");
            return Ok(MountState::AlreadyMounted);
        }
        let id = self.config.mount_element_id.as_str();
        if !self.host.has_element(id) {
            error!(id, "mount target missing");
            return Err(MountError::MountTargetMissing(id.to_owned()));
        }
        self.host.render_root(id);
        self.mounted = true;
        debug!(id, "render root mounted");
        Ok(MountState::Mounted)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeDocument {
        element_ids: Vec<String>,
        rendered_into: Vec<String>,
    }

    impl FakeDocument {
        fn with_element(id: &str) -> Self {
            Self {
                element_ids: vec![id.to_string()],
                ..Self::default()
            }
        }
    }

    impl MountHost for FakeDocument {
        fn has_element(&self, id: &str) -> bool {
            self.element_ids.iter().any(|element_id| element_id == id)
        }

        fn render_root(&mut self, id: &str) {
            self.rendered_into.push(id.to_string());
        }
    }

    #[test]
    fn mounts_into_root_element() {
        let mut binder = MountBinder::new(FakeDocument::with_element("root"), AppConfig::default());
        assert_eq!(binder.mount(), Ok(MountState::Mounted));
        assert!(binder.is_mounted());
        assert_eq!(binder.host().rendered_into, vec!["root".to_string()]);
    }

    #[test]
    fn missing_target_is_an_error() {
        let mut binder = MountBinder::new(FakeDocument::with_element("main"), AppConfig::default());
        assert_eq!(
            binder.mount(),
            Err(MountError::MountTargetMissing("root".to_string()))
        );
        assert!(!binder.is_mounted());
        assert!(binder.host().rendered_into.is_empty());
    }

    #[test]
    fn missing_target_error_names_the_element() {
        let err = MountError::MountTargetMissing("root".to_string());
        assert_eq!(
            err.to_string(),
            "mount target `#root` is missing from the host document"
        );
    }

    #[test]
    fn second_mount_does_not_render_again() {
        let mut binder = MountBinder::new(FakeDocument::with_element("root"), AppConfig::default());
        assert_eq!(binder.mount(), Ok(MountState::Mounted));
        assert_eq!(binder.mount(), Ok(MountState::AlreadyMounted));
        assert_eq!(binder.host().rendered_into.len(), 1);
    }

    #[test]
    fn uses_configured_element_id() {
        let config = AppConfig {
            mount_element_id: "app".to_string(),
            ..AppConfig::default()
        };
        let mut binder = MountBinder::new(FakeDocument::with_element("app"), config);
        assert_eq!(binder.mount(), Ok(MountState::Mounted));
        assert_eq!(binder.host().rendered_into, vec!["app".to_string()]);
    }
}
