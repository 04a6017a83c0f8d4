use sirikali_utility::platform::{Os, SearchResolver};
use sirikali_utility::{
    DropRelease, Owned, PendingReleases, ResolverOptions, TargetResolver, resolve_with, unpack,
};
use std::cell::Cell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::tempdir;

#[test]
fn test_unpack_volume_entry_then_resolve_backend() {
    let root = tempdir().unwrap();
    let bin = root.path().join("home/bin");
    fs::create_dir_all(&bin).unwrap();
    fs::write(bin.join("ecryptfs-simple"), b"").unwrap();

    let entry: Vec<&str> = "ecryptfs /mnt/private".split(' ').collect();
    let (backend, mount, mode): (Option<String>, Option<PathBuf>, Option<String>) =
        unpack::unpack(&entry);
    assert_eq!(mount, Some(PathBuf::from("/mnt/private")));
    assert_eq!(mode.unwrap_or_else(|| String::from("rw")), "rw");

    let resolver = SearchResolver::new(
        ResolverOptions::for_os(Os::Unix)
            .system_dirs(Vec::<PathBuf>::new())
            .home(root.path().join("home")),
    );
    let backend = backend.unwrap();
    assert_eq!(resolver.resolve(&backend), Some(bin.join("ecryptfs-simple")));
}

#[test]
fn test_configured_paths_take_precedence() {
    let configured: HashMap<&str, PathBuf> =
        HashMap::from([("cryfs", PathBuf::from("/srv/cryfs/bin/cryfs"))]);

    let path = resolve_with("cryfs", |name: &str| configured.get(name).cloned());
    assert_eq!(path, Some(PathBuf::from("/srv/cryfs/bin/cryfs")));

    let missing = resolve_with("definitely-nonexistent-tool-xyz", |name: &str| {
        configured.get(name).cloned()
    });
    assert_eq!(missing, None);
}

#[test]
fn test_owned_file_for_resolved_tool() {
    let root = tempdir().unwrap();
    let sys = root.path().join("usr/bin");
    fs::create_dir_all(&sys).unwrap();
    fs::write(sys.join("gocryptfs"), b"#!/bin/sh\n").unwrap();

    let resolver = SearchResolver::new(
        ResolverOptions::for_os(Os::Unix)
            .system_dirs([sys.clone()])
            .without_home(),
    );
    let path = resolver.resolve("gocryptfs").unwrap();

    let closed = Rc::new(Cell::new(0));
    let seen = closed.clone();
    let mut owner = Owned::try_acquire(
        || File::open(&path),
        move |file: File| {
            drop(file);
            seen.set(seen.get() + 1);
        },
    )
    .unwrap();

    let moved = owner.transfer();
    drop(owner);
    assert_eq!(closed.get(), 0);
    drop(moved);
    assert_eq!(closed.get(), 1);
}

#[test]
fn test_deferred_and_immediate_owners_side_by_side() {
    let queue = PendingReleases::new();
    let deferred = Owned::deferred(vec![1u8, 2, 3], queue.sender());
    let immediate = Owned::boxed(vec![4u8], DropRelease);

    drop(immediate);
    drop(deferred);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.run_pending(), 1);
}

#[test]
fn test_fill_keeps_defaults_for_short_entry() {
    let mut backend = String::from("_");
    let mut mount = String::from("_");
    let mut options = String::from("_");
    let written = unpack::fill(&["sshfs", "/mnt/remote"], (&mut backend, &mut mount, &mut options));
    assert_eq!(written, 2);
    assert_eq!(backend, "sshfs");
    assert_eq!(mount, "/mnt/remote");
    assert_eq!(options, "_");
}
