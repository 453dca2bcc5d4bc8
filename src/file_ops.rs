// SPDX-FileCopyrightText: 2026 The polkadots developers
//
// SPDX-License-Identifier: MIT

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::polkadots_error::LinkError;

/// What to do when the destination is a symlink pointing somewhere else.
/// Regular files and directories are never touched under either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Skip the request and report a conflict.
    #[default]
    Skip,
    /// Atomically replace the stale symlink with the intended one.
    Relink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Created,
    Unchanged,
    Replaced,
}

/// Ensure `dst` is a symlink to `src`, creating it with create-new semantics.
///
/// An absent destination is linked directly through the host symlink call, so
/// there is no delete-then-recreate window. A destination that already
/// resolves to `src` is left untouched. Anything else is a conflict: skipped
/// under [`ConflictPolicy::Skip`], and only a symlink pointing elsewhere is
/// replaced (via a sibling temp name and rename) under
/// [`ConflictPolicy::Relink`]. Missing destination parents are an error, not
/// something this function creates.
pub fn ensure_symlink(
    src: &Path,
    dst: &Path,
    policy: ConflictPolicy,
) -> Result<LinkStatus, LinkError> {
    if !src.exists() {
        return Err(LinkError::SourceNotFound(src.to_path_buf()));
    }
    match dst.symlink_metadata() {
        Ok(meta) => {
            if meta.is_symlink() {
                if points_at(dst, src) {
                    return Ok(LinkStatus::Unchanged);
                }
                match policy {
                    ConflictPolicy::Relink => {
                        replace_symlink(src, dst)?;
                        log::info!("Relinked {} to {}", dst.display(), src.display());
                        Ok(LinkStatus::Replaced)
                    }
                    ConflictPolicy::Skip => {
                        let target = dst
                            .read_link()
                            .map(|t| format!("a symlink to {}", t.display()))
                            .unwrap_or_else(|_| "an unreadable symlink".to_string());
                        Err(LinkError::Conflict {
                            destination: dst.to_path_buf(),
                            occupant: target,
                        })
                    }
                }
            } else {
                let occupant = if meta.is_dir() {
                    "a directory"
                } else {
                    "a file"
                };
                Err(LinkError::Conflict {
                    destination: dst.to_path_buf(),
                    occupant: occupant.to_string(),
                })
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if let Some(parent) = dst.parent()
                && !parent.as_os_str().is_empty()
                && !parent.is_dir()
            {
                return Err(LinkError::MissingParent(parent.to_path_buf()));
            }
            create_symlink(src, dst)?;
            log::info!("Linked {} to {}", dst.display(), src.display());
            Ok(LinkStatus::Created)
        }
        Err(e) => Err(classify_io(dst.to_path_buf(), e)),
    }
}

/// A symlink counts as correct when its literal target is the source, or when
/// both resolve to the same canonical path.
fn points_at(dst: &Path, src: &Path) -> bool {
    match dst.read_link() {
        Ok(target) => {
            target == src
                || match (dst.canonicalize(), src.canonicalize()) {
                    (Ok(a), Ok(b)) => a == b,
                    _ => false,
                }
        }
        Err(_) => false,
    }
}

fn create_symlink(src: &Path, dst: &Path) -> Result<(), LinkError> {
    symlink(src, dst).map_err(|e| match e.kind() {
        // Lost a race with a concurrent writer; treat as an occupied destination.
        ErrorKind::AlreadyExists => LinkError::Conflict {
            destination: dst.to_path_buf(),
            occupant: "a concurrently created entry".to_string(),
        },
        ErrorKind::NotFound => {
            LinkError::MissingParent(dst.parent().unwrap_or(Path::new("/")).to_path_buf())
        }
        _ => classify_io(dst.to_path_buf(), e),
    })
}

/// Replace an existing symlink atomically: link under a sibling temp name,
/// then rename over the destination.
fn replace_symlink(src: &Path, dst: &Path) -> Result<(), LinkError> {
    let Some(file_name) = dst.file_name() else {
        return Err(LinkError::Io(
            dst.to_path_buf(),
            std::io::Error::new(ErrorKind::InvalidInput, "destination has no file name"),
        ));
    };
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(OsString::from(format!(".polkadots-{}", std::process::id())));
    let tmp = dst.with_file_name(tmp_name);
    // A leftover temp link from an interrupted run would fail the create-new call.
    let _ = std::fs::remove_file(&tmp);
    create_symlink(src, &tmp)?;
    std::fs::rename(&tmp, dst).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        classify_io(dst.to_path_buf(), e)
    })
}

fn symlink(src: &Path, dst: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(src, dst)
    }
    #[cfg(windows)]
    {
        if src.is_dir() {
            std::os::windows::fs::symlink_dir(src, dst)
        } else {
            std::os::windows::fs::symlink_file(src, dst)
        }
    }
}

pub(crate) fn classify_io(path: PathBuf, e: std::io::Error) -> LinkError {
    if e.kind() == ErrorKind::PermissionDenied {
        LinkError::PermissionDenied(path)
    } else {
        LinkError::Io(path, e)
    }
}
