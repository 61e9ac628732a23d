//! Template Materializer - mirrors a resource tree onto the filesystem.
//!
//! The walk is a plain recursive descent over [`ResourceTree`]:
//!
//! 1. List the children of the current source directory
//! 2. Directories: apply the rename table, recurse
//! 3. Files: apply the rename table, drop the `.tmpl` suffix, render if
//!    the source was a template, create missing parents, write
//!
//! Destination directories only appear once a file is written beneath them,
//! so empty source directories leave no trace. The first error stops the
//! walk; nothing after the failing entry is written.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError, RenderFailure, TemplateErrorKind,
        ports::{Filesystem, ResourceTree, TemplateRenderer},
    },
    domain::{RenameTable, ResourceEntry, ResourcePath, SubstitutionContext, strip_template_suffix},
    error::GosvcResult,
};

/// Files written by one materialization, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub files: Vec<PathBuf>,
}

impl MaterializeReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Walks a resource tree and writes the rendered copy of it.
pub struct TemplateMaterializer<'a> {
    resources: &'a dyn ResourceTree,
    filesystem: &'a dyn Filesystem,
    renderer: &'a dyn TemplateRenderer,
    renames: Option<RenameTable>,
}

impl<'a> TemplateMaterializer<'a> {
    pub fn new(
        resources: &'a dyn ResourceTree,
        filesystem: &'a dyn Filesystem,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self {
            resources,
            filesystem,
            renderer,
            renames: None,
        }
    }

    /// Use an explicit rename table instead of [`RenameTable::for_context`].
    pub fn with_renames(mut self, renames: RenameTable) -> Self {
        self.renames = Some(renames);
        self
    }

    /// Mirror everything under `source_root` into `dest_root`.
    ///
    /// # Errors
    ///
    /// The first failing resource read, template render, directory creation
    /// or file write. Files written before the failure are left in place.
    #[instrument(
        skip_all,
        fields(source = %source_root, dest = %dest_root.display())
    )]
    pub fn materialize(
        &self,
        source_root: &ResourcePath,
        dest_root: &Path,
        context: &SubstitutionContext,
    ) -> GosvcResult<MaterializeReport> {
        let renames = match &self.renames {
            Some(table) => table.clone(),
            None => RenameTable::for_context(context),
        };

        let mut report = MaterializeReport::default();
        self.walk(source_root, dest_root, context, &renames, &mut report)?;

        debug!(files = report.file_count(), "Materialization finished");
        Ok(report)
    }

    fn walk(
        &self,
        source: &ResourcePath,
        dest: &Path,
        context: &SubstitutionContext,
        renames: &RenameTable,
        report: &mut MaterializeReport,
    ) -> GosvcResult<()> {
        for entry in self.resources.list_children(source)? {
            let source_path = source.join(entry.name());
            let dest_name = renames.apply(entry.name());

            if entry.is_dir() {
                self.walk(&source_path, &dest.join(dest_name), context, renames, report)?;
                continue;
            }

            let dest_path = dest.join(strip_template_suffix(dest_name));
            self.write_entry(&entry, &source_path, &dest_path, context)?;
            report.files.push(dest_path);
        }

        Ok(())
    }

    fn write_entry(
        &self,
        entry: &ResourceEntry,
        source_path: &ResourcePath,
        dest_path: &Path,
        context: &SubstitutionContext,
    ) -> GosvcResult<()> {
        let raw = self.resources.read_file(source_path)?;
        let content = if entry.is_template() {
            self.render(source_path, raw, context)?.into_bytes()
        } else {
            raw
        };

        if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(dest_path, &content)?;

        debug!(
            source = %source_path,
            dest = %dest_path.display(),
            template = entry.is_template(),
            bytes = content.len(),
            "Wrote file"
        );
        Ok(())
    }

    fn render(
        &self,
        source_path: &ResourcePath,
        raw: Vec<u8>,
        context: &SubstitutionContext,
    ) -> GosvcResult<String> {
        let text = String::from_utf8(raw).map_err(|e| {
            ApplicationError::template(
                source_path.as_str(),
                RenderFailure::new(TemplateErrorKind::Encoding, e.to_string()),
            )
        })?;

        self.renderer
            .render(&text, context)
            .map_err(|failure| ApplicationError::template(source_path.as_str(), failure).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::{BraceRenderer, FakeTree, RecordingFs};
    use crate::domain::{derive, keys};
    use crate::error::GosvcError;

    fn context() -> SubstitutionContext {
        SubstitutionContext::from_names(&derive("github.com/acme/ledger").unwrap())
    }

    fn run(tree: &FakeTree, fs: &RecordingFs) -> GosvcResult<MaterializeReport> {
        TemplateMaterializer::new(tree, fs, &BraceRenderer).materialize(
            &ResourcePath::root(),
            Path::new("out"),
            &context(),
        )
    }

    #[test]
    fn plain_and_template_file_produce_two_files() {
        let tree = FakeTree::new()
            .file("LICENSE", "MIT {{not rendered}}")
            .file("main.go.tmpl", "package main // {{ExportedName}} in {{ModulePath}}");
        let fs = RecordingFs::new();

        let report = run(&tree, &fs).unwrap();

        assert_eq!(report.file_count(), 2);
        assert_eq!(fs.file_count(), 2);
        assert_eq!(
            fs.read("out/LICENSE").unwrap(),
            b"MIT {{not rendered}}".to_vec()
        );
        assert_eq!(
            fs.read_string("out/main.go").unwrap(),
            "package main // Ledger in github.com/acme/ledger"
        );
        assert!(fs.read("out/main.go.tmpl").is_none());
    }

    #[test]
    fn renames_placeholder_directory_and_dotfiles() {
        let tree = FakeTree::new()
            .file("service/service.go.tmpl", "package {{UnexportedName}}")
            .file("gitignore", "/bin\n");
        let fs = RecordingFs::new();

        run(&tree, &fs).unwrap();

        assert_eq!(
            fs.read_string("out/ledger/service.go").unwrap(),
            "package ledger"
        );
        assert_eq!(fs.read_string("out/.gitignore").unwrap(), "/bin\n");
        assert!(!fs.has_dir("out/service"));
    }

    #[test]
    fn empty_directories_are_not_created() {
        let tree = FakeTree::new()
            .empty_dir("docs/empty")
            .file("go.mod.tmpl", "module {{ModulePath}}");
        let fs = RecordingFs::new();

        run(&tree, &fs).unwrap();

        assert!(!fs.has_dir("out/docs"));
        assert!(fs.has_dir("out"));
    }

    #[test]
    fn materializing_twice_is_idempotent() {
        let tree = FakeTree::new()
            .file("a/b/c.txt", "plain")
            .file("a/d.go.tmpl", "// {{FolderName}}");
        let fs = RecordingFs::new();

        run(&tree, &fs).unwrap();
        let first = fs.read("out/a/d.go").unwrap();
        run(&tree, &fs).unwrap();

        assert_eq!(fs.read("out/a/d.go").unwrap(), first);
        assert_eq!(fs.file_count(), 2);
    }

    #[test]
    fn undefined_variable_aborts_before_later_files() {
        let tree = FakeTree::new()
            .file("first.txt", "ok")
            .file("broken.go.tmpl", "{{NoSuchThing}}")
            .file("last.txt", "never");
        let fs = RecordingFs::new();

        let err = run(&tree, &fs).unwrap_err();

        match err {
            GosvcError::Application(ApplicationError::Template { path, kind, .. }) => {
                assert_eq!(path, "broken.go.tmpl");
                assert_eq!(kind, TemplateErrorKind::UndefinedVariable);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs.write_order(), vec![PathBuf::from("out/first.txt")]);
    }

    #[test]
    fn syntax_error_is_distinguished() {
        let tree = FakeTree::new().file("x.tmpl", "{{ExportedName");
        let err = run(&tree, &RecordingFs::new()).unwrap_err();

        assert!(matches!(
            err,
            GosvcError::Application(ApplicationError::Template {
                kind: TemplateErrorKind::Syntax,
                ..
            })
        ));
    }

    #[test]
    fn non_utf8_template_reports_encoding() {
        let tree = FakeTree::new().bytes("bin.tmpl", &[0xff, 0xfe]);
        let err = run(&tree, &RecordingFs::new()).unwrap_err();

        assert!(matches!(
            err,
            GosvcError::Application(ApplicationError::Template {
                kind: TemplateErrorKind::Encoding,
                ..
            })
        ));
    }

    #[test]
    fn binary_plain_files_are_copied_verbatim() {
        let bytes = [0u8, 159, 146, 150];
        let tree = FakeTree::new().bytes("logo.png", &bytes);
        let fs = RecordingFs::new();

        run(&tree, &fs).unwrap();

        assert_eq!(fs.read("out/logo.png").unwrap(), bytes.to_vec());
    }

    #[test]
    fn write_failure_carries_destination_path() {
        let tree = FakeTree::new().file("a.txt", "a").file("b.txt", "b");
        let fs = RecordingFs::new().failing_on("out/a.txt");

        let err = run(&tree, &fs).unwrap_err();

        assert!(matches!(
            err,
            GosvcError::Application(ApplicationError::Filesystem { ref path, .. })
                if path == Path::new("out/a.txt")
        ));
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn traversal_follows_listing_order() {
        let tree = FakeTree::new()
            .file("z.txt", "z")
            .file("m/inner.txt", "m")
            .file("a.txt", "a");
        let fs = RecordingFs::new();

        let report = run(&tree, &fs).unwrap();

        assert_eq!(
            report.files,
            vec![
                PathBuf::from("out/z.txt"),
                PathBuf::from("out/m/inner.txt"),
                PathBuf::from("out/a.txt"),
            ]
        );
    }

    #[test]
    fn explicit_rename_table_overrides_defaults() {
        let tree = FakeTree::new().file("service/x.txt", "x");
        let fs = RecordingFs::new();

        TemplateMaterializer::new(&tree, &fs, &BraceRenderer)
            .with_renames(RenameTable::new().with_entry("service", "custom"))
            .materialize(&ResourcePath::root(), Path::new("out"), &context())
            .unwrap();

        assert!(fs.read("out/custom/x.txt").is_some());
    }

    #[test]
    fn rendering_sees_context_values() {
        let ctx = context().with_variable("Extra", "value");
        let tree = FakeTree::new().file("e.tmpl", "{{Extra}}-{{OwnerName}}");
        let fs = RecordingFs::new();

        TemplateMaterializer::new(&tree, &fs, &BraceRenderer)
            .materialize(&ResourcePath::root(), Path::new("out"), &ctx)
            .unwrap();

        assert_eq!(fs.read_string("out/e").unwrap(), "value-acme");
        assert_eq!(ctx.get(keys::OWNER_NAME), Some("acme"));
    }
}
