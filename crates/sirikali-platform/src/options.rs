use crate::dir;
use crate::os::Os;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Historical tool names and the executables that replaced them.
const LEGACY_ALIASES: &[(&str, &str)] = &[("ecryptfs", "ecryptfs-simple")];

/// Where and under what name executables are searched for.
///
/// Defaults follow the running platform. When deserialized, fields left out
/// keep those defaults; a supplied `aliases` table replaces the built-in one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    os:          Os,
    system_dirs: Vec<PathBuf>,
    home:        Option<PathBuf>,
    aliases:     BTreeMap<String, String>,
    exe_suffix:  Option<String>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::for_os(Os::current())
    }
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_os(os: Os) -> Self {
        Self {
            os,
            system_dirs: os.system_bin_dirs().iter().map(PathBuf::from).collect(),
            home: dir::user_home(),
            aliases: LEGACY_ALIASES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            exe_suffix: os.exe_suffix().map(String::from),
        }
    }

    pub fn home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn without_home(mut self) -> Self {
        self.home = None;
        self
    }

    pub fn system_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.system_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aliases.insert(from.into(), to.into());
        self
    }

    pub fn exe_suffix(mut self, suffix: Option<String>) -> Self {
        self.exe_suffix = suffix;
        self
    }

    pub fn os(&self) -> Os {
        self.os
    }

    /// Directories to probe, in order: system directories, then the user's
    /// `bin` and `.bin`.
    pub fn candidate_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.system_dirs.clone();
        match &self.home {
            Some(home) => dirs.extend(dir::user_bin_dirs(home)),
            None => tracing::debug!("no home directory; skipping per-user bin directories"),
        }
        dirs
    }

    /// On-disk executable name for `name`: legacy alias first, then the
    /// platform suffix when missing.
    pub fn rewrite<'a>(&self, name: &'a str) -> Cow<'a, str> {
        let mut exe = match self.aliases.get(name) {
            Some(alias) => {
                tracing::debug!(tool = name, alias = alias.as_str(), "rewriting legacy executable name");
                Cow::Owned(alias.clone())
            }
            None => Cow::Borrowed(name),
        };
        if let Some(suffix) = &self.exe_suffix {
            if !exe.ends_with(suffix.as_str()) {
                exe.to_mut().push_str(suffix);
            }
        }
        exe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_candidates_system_first() {
        let dirs = ResolverOptions::for_os(Os::Unix)
            .home("/home/alice")
            .candidate_dirs();

        let mut expected: Vec<PathBuf> = Os::Unix
            .system_bin_dirs()
            .iter()
            .map(PathBuf::from)
            .collect();
        expected.push(PathBuf::from("/home/alice/bin"));
        expected.push(PathBuf::from("/home/alice/.bin"));

        assert_eq!(dirs, expected);
    }

    #[test]
    fn test_windows_candidates_home_only() {
        let dirs = ResolverOptions::for_os(Os::Windows)
            .home("C:/Users/alice")
            .candidate_dirs();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("C:/Users/alice").join("bin"),
                PathBuf::from("C:/Users/alice").join(".bin"),
            ]
        );
    }

    #[test]
    fn test_without_home_drops_user_dirs() {
        let dirs = ResolverOptions::for_os(Os::Unix)
            .without_home()
            .candidate_dirs();
        assert_eq!(dirs.len(), Os::Unix.system_bin_dirs().len());
    }

    #[test]
    fn test_rewrite_legacy_alias() {
        let options = ResolverOptions::for_os(Os::Unix);
        assert_eq!(options.rewrite("ecryptfs"), "ecryptfs-simple");
        assert_eq!(options.rewrite("gocryptfs"), "gocryptfs");
    }

    #[test]
    fn test_rewrite_borrows_when_unchanged() {
        let options = ResolverOptions::for_os(Os::Unix);
        assert!(matches!(options.rewrite("cryfs"), Cow::Borrowed("cryfs")));
    }

    #[test]
    fn test_rewrite_windows_suffix() {
        let options = ResolverOptions::for_os(Os::Windows);
        assert_eq!(options.rewrite("encfs"), "encfs.exe");
        assert_eq!(options.rewrite("encfs.exe"), "encfs.exe");
        assert_eq!(options.rewrite("ecryptfs"), "ecryptfs-simple.exe");
    }

    #[test]
    fn test_custom_alias() {
        let options = ResolverOptions::for_os(Os::Unix).alias("veracrypt", "veracrypt-cli");
        assert_eq!(options.rewrite("veracrypt"), "veracrypt-cli");
        assert_eq!(options.rewrite("ecryptfs"), "ecryptfs-simple");
    }

    #[test]
    fn test_deserialize_config() {
        let options: ResolverOptions = serde_json::from_str(
            r#"{ "os": "unix", "system_dirs": ["/srv/tools"], "home": null, "aliases": { "sshfs": "sshfs-fuse" }, "exe_suffix": null }"#,
        )
        .unwrap();
        assert_eq!(options.os(), Os::Unix);
        assert_eq!(options.candidate_dirs(), vec![PathBuf::from("/srv/tools")]);
        assert_eq!(options.rewrite("sshfs"), "sshfs-fuse");
        assert_eq!(options.rewrite("ecryptfs"), "ecryptfs");
    }
}
