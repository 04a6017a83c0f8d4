//! Executable resolution.
//!
//! A [`TargetResolver`] maps a tool name to an absolute path. Resolvers
//! compose: [`PairResolver`] asks its primary first and falls back to the
//! second, which is how a caller-supplied [`OverrideResolver`] takes
//! precedence over the built-in [`SearchResolver`].

use crate::error::{Error, Result};
use crate::options::ResolverOptions;
use std::path::{self, PathBuf};

pub trait TargetResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

impl<F> TargetResolver for F
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self(name)
    }
}

/// Asks `first`, then `then` only when `first` has no answer.
///
/// Pairs nest, so longer chains are `PairResolver<A, PairResolver<B, C>>`.
#[derive(Debug, Clone)]
pub struct PairResolver<A, B> {
    first: A,
    then:  B,
}

impl<A, B> PairResolver<A, B>
where
    A: TargetResolver,
    B: TargetResolver,
{
    pub fn new(first: A, then: B) -> Self {
        Self { first, then }
    }
}

impl<A, B> TargetResolver for PairResolver<A, B>
where
    A: TargetResolver,
    B: TargetResolver,
{
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.first.resolve(name).or_else(|| self.then.resolve(name))
    }
}

/// Caller hook consulted before any search. An empty path means "no answer".
#[derive(Clone)]
pub struct OverrideResolver<F>(F);

impl<F> OverrideResolver<F>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    pub fn new(hook: F) -> Self {
        Self(hook)
    }
}

impl<F> TargetResolver for OverrideResolver<F>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = (self.0)(name).filter(|p| !p.as_os_str().is_empty())?;
        tracing::debug!(tool = name, path = %path.display(), "executable supplied by override");
        Some(path)
    }
}

/// Probes the candidate directories of [`ResolverOptions`] in order.
#[derive(Debug, Clone, Default)]
pub struct SearchResolver {
    options: ResolverOptions,
}

impl SearchResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Every path probed for `name`, in probe order.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let exe = self.options.rewrite(name);
        self.options
            .candidate_dirs()
            .into_iter()
            .map(|dir| candidate_path(dir, &exe))
            .collect()
    }

    /// Like [`TargetResolver::resolve`], but a miss lists what was searched.
    pub fn require(&self, name: &str) -> Result<PathBuf> {
        self.resolve(name).ok_or_else(|| Error::NotFound {
            name:     name.to_owned(),
            searched: self.candidates(name),
        })
    }
}

impl TargetResolver for SearchResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let found = self.candidates(name).into_iter().find(|candidate| {
            tracing::trace!(candidate = %candidate.display(), "probing");
            candidate.exists()
        });
        match &found {
            Some(path) => tracing::debug!(tool = name, path = %path.display(), "resolved executable"),
            None => tracing::debug!(tool = name, "executable not found"),
        }
        found
    }
}

/// `dir` followed by `exe`. Unlike `Path::join`, a rooted `exe` stays under
/// `dir`.
fn candidate_path(dir: PathBuf, exe: &str) -> PathBuf {
    let mut path = dir.into_os_string();
    let dir_ends_with_sep = path
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| path::is_separator(char::from(b)));
    if !path.is_empty() && !dir_ends_with_sep && !exe.starts_with(path::is_separator) {
        path.push(path::MAIN_SEPARATOR_STR);
    }
    path.push(exe);
    PathBuf::from(path)
}

/// Searches the default locations for `name`.
pub fn resolve(name: &str) -> Option<PathBuf> {
    SearchResolver::default().resolve(name)
}

/// Asks `hook` first; searches the default locations only if it has no answer.
pub fn resolve_with<F>(name: &str, hook: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    PairResolver::new(OverrideResolver::new(hook), SearchResolver::default()).resolve(name)
}

/// Like [`resolve`], but a miss is an [`Error::NotFound`].
pub fn require(name: &str) -> Result<PathBuf> {
    SearchResolver::default().require(name)
}
