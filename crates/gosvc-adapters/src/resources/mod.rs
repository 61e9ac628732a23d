//! Resource tree adapters.
//!
//! Both adapters store a flat list of `/`-separated file paths and derive
//! directory listings from it, so a directory exists exactly when some file
//! lives beneath it.

mod embedded;
mod memory;

pub use embedded::EmbeddedResources;
pub use memory::MemoryResourceTree;

use std::collections::BTreeMap;

use gosvc_core::domain::{EntryKind, ResourceEntry, ResourcePath};

/// Immediate children of `dir` among `paths`, sorted by name.
///
/// Returns `None` when `dir` is not the root and no path lives beneath it.
fn children_of<'a>(
    paths: impl IntoIterator<Item = &'a str>,
    dir: &ResourcePath,
) -> Option<Vec<ResourceEntry>> {
    let prefix = if dir.is_root() {
        String::new()
    } else {
        format!("{}/", dir.as_str())
    };

    let mut children: BTreeMap<&str, EntryKind> = BTreeMap::new();
    for path in paths {
        let Some(rest) = path.strip_prefix(prefix.as_str()) else {
            continue;
        };
        match rest.split_once('/') {
            Some((head, _)) => {
                children.insert(head, EntryKind::Directory);
            }
            None if !rest.is_empty() => {
                children.entry(rest).or_insert(EntryKind::File);
            }
            None => {}
        }
    }

    if children.is_empty() && !dir.is_root() {
        return None;
    }

    Some(
        children
            .into_iter()
            .map(|(name, kind)| match kind {
                EntryKind::Directory => ResourceEntry::directory(name),
                EntryKind::File => ResourceEntry::file(name),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: [&str; 4] = ["z.txt", "b/inner.go", "b/deeper/x", "a.tmpl"];

    #[test]
    fn root_children_are_sorted_with_kinds() {
        let entries = children_of(PATHS, &ResourcePath::root()).unwrap();

        let listed: Vec<_> = entries.iter().map(|e| (e.name(), e.is_dir())).collect();
        assert_eq!(listed, vec![("a.tmpl", false), ("b", true), ("z.txt", false)]);
    }

    #[test]
    fn nested_listing() {
        let entries = children_of(PATHS, &ResourcePath::new("b")).unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["deeper", "inner.go"]);
    }

    #[test]
    fn unknown_directory_is_none() {
        assert!(children_of(PATHS, &ResourcePath::new("nope")).is_none());
        assert!(children_of(PATHS, &ResourcePath::new("z.txt")).is_none());
    }

    #[test]
    fn prefix_must_match_whole_segment() {
        let entries = children_of(["bb/x", "b/y"], &ResourcePath::new("b")).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "y");
    }
}
