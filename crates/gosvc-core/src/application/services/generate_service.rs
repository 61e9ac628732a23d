//! Generate Service - main application orchestrator.
//!
//! This service coordinates a whole `gosvc init` run:
//! 1. Derive names from the module path
//! 2. Materialize the skeleton into `output_dir/<folder>`
//! 3. Run the post-process commands inside the new project
//!
//! A failure in step 2 or 3 removes the destination, but only when this run
//! created it.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{CommandRunner, Filesystem, ResourceTree, TemplateRenderer},
        services::materializer::TemplateMaterializer,
    },
    domain::{DerivedNames, PostProcessCommand, ResourcePath, SubstitutionContext, derive},
    error::GosvcResult,
};

/// Input for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub module_path: String,
    pub output_dir: PathBuf,
    pub post_process: Vec<PostProcessCommand>,
    pub cleanup_on_failure: bool,
    pub dry_run: bool,
}

impl GenerateRequest {
    /// Request with the default post-process commands and cleanup enabled.
    pub fn new(module_path: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            module_path: module_path.into(),
            output_dir: output_dir.into(),
            post_process: PostProcessCommand::defaults(),
            cleanup_on_failure: true,
            dry_run: false,
        }
    }

    pub fn with_post_process(mut self, commands: Vec<PostProcessCommand>) -> Self {
        self.post_process = commands;
        self
    }

    pub fn without_post_process(self) -> Self {
        self.with_post_process(Vec::new())
    }

    pub fn with_cleanup(mut self, cleanup_on_failure: bool) -> Self {
        self.cleanup_on_failure = cleanup_on_failure;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub names: DerivedNames,
    pub destination: PathBuf,
    /// Files written, empty for a dry run.
    pub files: Vec<PathBuf>,
    /// Post-process commands that ran (or would run, for a dry run).
    pub commands: Vec<String>,
    pub dry_run: bool,
}

/// Orchestrates derivation, materialization and post-processing.
pub struct GenerateService {
    resources: Box<dyn ResourceTree>,
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    runner: Box<dyn CommandRunner>,
    source_root: ResourcePath,
}

impl GenerateService {
    pub fn new(
        resources: Box<dyn ResourceTree>,
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            resources,
            filesystem,
            renderer,
            runner,
            source_root: ResourcePath::root(),
        }
    }

    /// Materialize from a subdirectory of the resource tree.
    pub fn with_source_root(mut self, source_root: impl Into<ResourcePath>) -> Self {
        self.source_root = source_root.into();
        self
    }

    /// Generate a service skeleton.
    ///
    /// # Errors
    ///
    /// Invalid input is reported before anything is written. Materialization
    /// and post-process failures are returned after the optional cleanup.
    #[instrument(
        skip_all,
        fields(
            module = %request.module_path,
            output_dir = %request.output_dir.display(),
            dry_run = request.dry_run
        )
    )]
    pub fn generate(&self, request: &GenerateRequest) -> GosvcResult<GenerateReport> {
        let names = derive(&request.module_path)?;
        let destination = request.output_dir.join(names.folder_name());
        let commands: Vec<String> = request.post_process.iter().map(ToString::to_string).collect();

        if request.dry_run {
            info!(destination = %destination.display(), "Dry run, nothing written");
            return Ok(GenerateReport {
                names,
                destination,
                files: Vec::new(),
                commands,
                dry_run: true,
            });
        }

        let existed = self.filesystem.exists(&destination);
        info!(
            service = names.exported_name(),
            destination = %destination.display(),
            existed,
            "Generating service"
        );

        match self.build(&names, &destination, &request.post_process) {
            Ok(files) => {
                info!(files = files.len(), "Service generated");
                Ok(GenerateReport {
                    names,
                    destination,
                    files,
                    commands,
                    dry_run: false,
                })
            }
            Err(e) => {
                if request.cleanup_on_failure && !existed {
                    warn!(error = %e, "Generation failed, removing destination");
                    self.cleanup(&destination);
                } else if existed {
                    warn!(
                        error = %e,
                        path = %destination.display(),
                        "Generation failed, leaving pre-existing destination in place"
                    );
                }
                Err(e)
            }
        }
    }

    fn build(
        &self,
        names: &DerivedNames,
        destination: &Path,
        commands: &[PostProcessCommand],
    ) -> GosvcResult<Vec<PathBuf>> {
        let context = SubstitutionContext::from_names(names);
        let report = TemplateMaterializer::new(
            self.resources.as_ref(),
            self.filesystem.as_ref(),
            self.renderer.as_ref(),
        )
        .materialize(&self.source_root, destination, &context)?;

        // An empty tree writes nothing, but commands still need a working directory.
        if !commands.is_empty() {
            self.filesystem.create_dir_all(destination)?;
        }

        for command in commands {
            info!(command = %command, "Running post-process command");
            self.runner.run(command, destination)?;
        }

        Ok(report.files)
    }

    /// Best-effort removal of a destination created by this run.
    fn cleanup(&self, destination: &Path) {
        if !self.filesystem.exists(destination) {
            return;
        }
        if let Err(e) = self.filesystem.remove_dir_all(destination) {
            warn!(
                error = %e,
                path = %destination.display(),
                "Cleanup failed"
            );
        } else {
            info!(path = %destination.display(), "Cleanup successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::MockCommandRunner,
        services::testing::{BraceRenderer, FakeTree, RecordingFs},
    };
    use crate::domain::DomainError;
    use crate::error::GosvcError;
    use mockall::Sequence;

    fn skeleton() -> FakeTree {
        FakeTree::new()
            .file("go.mod.tmpl", "module {{ModulePath}}\n")
            .file("service/service.go.tmpl", "package {{service}}\n")
            .file("gitignore", "/bin\n")
    }

    fn service(tree: FakeTree, fs: &RecordingFs, runner: MockCommandRunner) -> GenerateService {
        GenerateService::new(
            Box::new(tree),
            Box::new(fs.clone()),
            Box::new(BraceRenderer),
            Box::new(runner),
        )
    }

    fn failing_command(reason: &str) -> GosvcError {
        ApplicationError::CommandFailed {
            command: "go mod tidy".into(),
            reason: reason.into(),
        }
        .into()
    }

    #[test]
    fn generates_into_folder_named_after_module() {
        let fs = RecordingFs::new();
        let svc = service(skeleton(), &fs, MockCommandRunner::new());
        let request =
            GenerateRequest::new("github.com/acme/my-cool_service", "work").without_post_process();

        let report = svc.generate(&request).unwrap();

        assert_eq!(report.destination, PathBuf::from("work/my-cool_service"));
        assert_eq!(report.files.len(), 3);
        assert_eq!(
            fs.read_string("work/my-cool_service/go.mod").unwrap(),
            "module github.com/acme/my-cool_service\n"
        );
        assert_eq!(
            fs.read_string("work/my-cool_service/my-cool_service/service.go")
                .unwrap(),
            "package myCoolService\n"
        );
        assert!(fs.read("work/my-cool_service/.gitignore").is_some());
    }

    #[test]
    fn post_process_commands_run_in_order_inside_destination() {
        let fs = RecordingFs::new();
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        let dest = PathBuf::from("work/ledger");
        let second_dest = dest.clone();

        runner
            .expect_run()
            .withf(move |cmd, dir| cmd.to_string() == "go mod tidy" && dir == dest)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        runner
            .expect_run()
            .withf(move |cmd, dir| cmd.to_string() == "go generate ./..." && dir == second_dest)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let report = service(skeleton(), &fs, runner)
            .generate(&GenerateRequest::new("github.com/acme/ledger", "work"))
            .unwrap();

        assert_eq!(report.commands, vec!["go mod tidy", "go generate ./..."]);
    }

    #[test]
    fn empty_tree_still_gives_commands_a_destination() {
        let fs = RecordingFs::new();
        let seen_fs = fs.clone();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(move |_, dir| seen_fs.has_dir(dir))
            .times(2)
            .returning(|_, _| Ok(()));

        let report = service(FakeTree::new(), &fs, runner)
            .generate(&GenerateRequest::new("github.com/acme/ledger", "work"))
            .unwrap();

        assert!(report.files.is_empty());
        assert!(fs.has_dir("work/ledger"));
    }

    #[test]
    fn empty_tree_without_commands_writes_nothing() {
        let fs = RecordingFs::new();
        let report = service(FakeTree::new(), &fs, MockCommandRunner::new())
            .generate(&GenerateRequest::new("github.com/acme/ledger", "work").without_post_process())
            .unwrap();

        assert!(report.files.is_empty());
        assert!(!fs.has_dir("work/ledger"));
    }

    #[test]
    fn first_failing_command_stops_and_cleans_up_new_destination() {
        let fs = RecordingFs::new();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_, _| Err(failing_command("go: no network")));

        let err = service(skeleton(), &fs, runner)
            .generate(&GenerateRequest::new("github.com/acme/ledger", "work"))
            .unwrap_err();

        assert_eq!(err, failing_command("go: no network"));
        assert!(!fs.exists(Path::new("work/ledger")));
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn keep_on_failure_leaves_partial_output() {
        let fs = RecordingFs::new();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_, _| Err(failing_command("boom")));

        let request = GenerateRequest::new("github.com/acme/ledger", "work").with_cleanup(false);
        service(skeleton(), &fs, runner).generate(&request).unwrap_err();

        assert!(fs.read("work/ledger/go.mod").is_some());
    }

    #[test]
    fn pre_existing_destination_is_never_removed() {
        let fs = RecordingFs::new();
        fs.create_dir_all(Path::new("work/ledger")).unwrap();
        fs.write_file(Path::new("work/ledger/NOTES.md"), b"mine").unwrap();

        let tree = skeleton().file("broken.tmpl", "{{Missing}}");
        let err = service(tree, &fs, MockCommandRunner::new())
            .generate(&GenerateRequest::new("github.com/acme/ledger", "work"))
            .unwrap_err();

        assert!(matches!(
            err,
            GosvcError::Application(ApplicationError::Template { .. })
        ));
        assert_eq!(fs.read_string("work/ledger/NOTES.md").unwrap(), "mine");
    }

    #[test]
    fn template_failure_cleans_up_and_skips_commands() {
        let fs = RecordingFs::new();
        let tree = skeleton().file("broken.tmpl", "{{Missing}}");
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        service(tree, &fs, runner)
            .generate(&GenerateRequest::new("github.com/acme/ledger", "work"))
            .unwrap_err();

        assert_eq!(fs.file_count(), 0);
        assert!(!fs.has_dir("work/ledger"));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let fs = RecordingFs::new();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let request = GenerateRequest::new("github.com/acme/ledger", "work").with_dry_run(true);
        let report = service(skeleton(), &fs, runner).generate(&request).unwrap();

        assert!(report.dry_run);
        assert!(report.files.is_empty());
        assert_eq!(report.destination, PathBuf::from("work/ledger"));
        assert_eq!(report.commands.len(), 2);
        assert_eq!(fs.file_count(), 0);
        assert!(!fs.has_dir("work"));
    }

    #[test]
    fn invalid_module_path_has_no_side_effects() {
        let fs = RecordingFs::new();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        let svc = service(skeleton(), &fs, runner);

        for raw in [".bad/path", "/abs/path"] {
            let err = svc.generate(&GenerateRequest::new(raw, "work")).unwrap_err();
            assert!(err.is_invalid_input(), "{raw} should be rejected");
        }
        let err = svc
            .generate(&GenerateRequest::new("github.com/acme/---", "work"))
            .unwrap_err();
        assert!(matches!(
            err,
            GosvcError::Domain(DomainError::EmptyIdentifier { .. })
        ));

        assert_eq!(fs.file_count(), 0);
        assert!(fs.write_order().is_empty());
    }

    #[test]
    fn source_root_selects_subtree() {
        let fs = RecordingFs::new();
        let tree = FakeTree::new()
            .file("go/main.go.tmpl", "// {{Service}}")
            .file("other/ignored.txt", "x");

        service(tree, &fs, MockCommandRunner::new())
            .with_source_root("go")
            .generate(&GenerateRequest::new("example.com/billing", "out").without_post_process())
            .unwrap();

        assert_eq!(fs.read_string("out/billing/main.go").unwrap(), "// Billing");
        assert_eq!(fs.file_count(), 1);
    }
}
