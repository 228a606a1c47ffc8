//! rsync command assembly.
//!
//! Pure string construction: no I/O happens here. Segment order
//! matters — the per-file `--include`s must come before the catch-all
//! `--exclude="*"` or rsync would transfer nothing.

use crate::config::NetStorageConfig;
use crate::error::{SyncError, SyncResult};
use crate::spec::SyncSpec;

/// Substring that marks a configured host as the NetStorage service
/// itself (daemon addressing) rather than an alternate remote host.
pub(crate) const NETSTORAGE_HOST_MARKER: &str = "akamai";

/// Compile the full rsync command line for `spec` against `config`.
pub(crate) fn compile(config: &NetStorageConfig, spec: &SyncSpec) -> SyncResult<String> {
    if spec.files.is_empty() {
        return Err(SyncError::EmptyFileList);
    }

    let mut parts: Vec<String> = vec!["rsync -a".to_string()];
    if spec.dry_run {
        parts.push("--dry-run --verbose".to_string());
    }
    if spec.delete {
        parts.push("--delete".to_string());
    }
    for file in &spec.files {
        parts.push(format!("--include=\"{}\"", escape_double_quotes(file)));
    }
    // Only the explicitly included files may transfer.
    parts.push("--exclude=\"*\"".to_string());
    parts.push(standardize_directory(&spec.source_directory));
    parts.push(destination(config, &spec.destination_subpath));
    // stderr through the same stream so the caller captures everything
    parts.push("2>&1".to_string());

    Ok(parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Resolve the destination address for `destination_subpath`.
///
/// Recomputed on every build; host and credentials may be reconfigured
/// between calls, so nothing is cached.
pub(crate) fn destination(config: &NetStorageConfig, destination_subpath: &str) -> String {
    let root = config.root_directory.trim_end_matches('/');
    let subpath = standardize_directory(destination_subpath.trim_start_matches('/'));
    let dir = format!("{root}/{subpath}");

    if !config.host.is_empty() && !config.username.is_empty() {
        let user = &config.username;
        let host = &config.host;
        if host.contains(NETSTORAGE_HOST_MARKER) {
            // daemon syntax for NetStorage itself
            format!("{user}@{host}::{user}/{dir}")
        } else {
            // another server, e.g. staging
            format!("{user}@{host}:{dir}")
        }
    } else {
        // local filesystem target
        dir
    }
}

/// Guarantee exactly one trailing `/` on a non-empty directory.
///
/// The trailing slash on the source means "copy the contents of the
/// directory", not the directory itself.
pub(crate) fn standardize_directory(dir: &str) -> String {
    if dir.is_empty() {
        return String::new();
    }
    format!("{}/", dir.trim_end_matches('/'))
}

/// Escape embedded double quotes for a double-quoted shell token.
///
/// Single quotes pass through untouched; they sit inside a
/// double-quoted token.
fn escape_double_quotes(filename: &str) -> String {
    filename.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, root: &str, user: &str) -> NetStorageConfig {
        NetStorageConfig::new(host, root, user, "password")
    }

    #[test]
    fn standardize_guarantees_exactly_one_slash() {
        assert_eq!(standardize_directory("/source/directory"), "/source/directory/");
        assert_eq!(standardize_directory("/source/directory/"), "/source/directory/");
        assert_eq!(standardize_directory("/source/directory//"), "/source/directory/");
        assert_eq!(standardize_directory(""), "");
    }

    #[test]
    fn escaping_touches_double_quotes_only() {
        assert_eq!(escape_double_quotes("file1's.jpg"), "file1's.jpg");
        assert_eq!(
            escape_double_quotes("file2\"test\".gif"),
            "file2\\\"test\\\".gif"
        );
    }

    #[test]
    fn daemon_form_for_netstorage_hosts() {
        assert_eq!(
            destination(&config("upload.akamai.com", "12345", "username"), "dest/"),
            "username@upload.akamai.com::username/12345/dest/"
        );
    }

    #[test]
    fn remote_shell_form_for_other_hosts() {
        assert_eq!(
            destination(&config("staging.example.com", "/directory", "username"), "dest"),
            "username@staging.example.com:/directory/dest/"
        );
    }

    #[test]
    fn local_form_when_host_or_user_is_missing() {
        assert_eq!(
            destination(&config("", "/directory", "username"), "dest"),
            "/directory/dest/"
        );
        assert_eq!(
            destination(&config("host", "/directory", ""), "dest"),
            "/directory/dest/"
        );
    }

    #[test]
    fn empty_subpath_collapses_to_the_root() {
        assert_eq!(
            destination(&config("host", "/directory", "u"), ""),
            "u@host:/directory/"
        );
    }

    #[test]
    fn joins_never_double_a_slash() {
        // trailing slash on the root and leading slash on the subpath
        assert_eq!(
            destination(&config("", "/directory/", "u"), "/dest/"),
            "/directory/dest/"
        );
    }

    #[test]
    fn empty_file_list_is_rejected_before_any_command_exists() {
        let spec = SyncSpec::new("/src", "dest", &[] as &[&str]);
        let result = compile(&config("host", "/r", "u"), &spec);
        assert!(matches!(result, Err(SyncError::EmptyFileList)));
    }
}
