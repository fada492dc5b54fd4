use std::path::PathBuf;

/// Name of the task manifest a host resolves before running anything.
pub const MANIFEST_FILE: &str = "tasks.yaml";

/// What the reporting layer needs to know about the host that attached it.
///
/// Handed to observers once, at attach time; everything afterwards flows
/// through [`crate::events::Event`].
#[derive(Debug, Clone)]
pub struct HostInfo {
    /// Directory the host was launched from; manifest paths are shown
    /// relative to it.
    pub cwd: PathBuf,
    /// Resolved manifest location, or `None` when the host found no
    /// manifest and is running on defaults.
    pub manifest_path: Option<PathBuf>,
    /// Names of the plugins the host loaded, in load order.
    pub plugins: Vec<String>,
}

impl HostInfo {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            manifest_path: None,
            plugins: Vec::new(),
        }
    }

    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    pub fn with_plugins<S: Into<String>>(mut self, plugins: impl IntoIterator<Item = S>) -> Self {
        self.plugins = plugins.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_info_defaults() {
        let host = HostInfo::new("/work/project");
        assert_eq!(host.cwd, PathBuf::from("/work/project"));
        assert!(host.manifest_path.is_none());
        assert!(host.plugins.is_empty());
    }

    #[test]
    fn test_host_info_builders() {
        let host = HostInfo::new("/work/project")
            .with_manifest("/work/project/tasks.yaml")
            .with_plugins(["log", "watch"]);
        assert_eq!(
            host.manifest_path.as_deref(),
            Some(std::path::Path::new("/work/project/tasks.yaml"))
        );
        assert_eq!(host.plugins, vec!["log", "watch"]);
    }
}
