//! cleartool command executor
//!
//! Handles running cleartool commands and capturing their output.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use super::ClearToolError;
use super::constants::{self, commands, flags};
use super::parser::Parser;
use crate::logging::Logger;
use crate::model::{Describe, HistoryTree};

/// Process execution seam
///
/// Runs one cleartool invocation and returns its captured standard output,
/// or fails with the captured error text.
pub trait CommandRunner: Send + Sync + fmt::Debug {
    fn run(&self, args: &[&str]) -> Result<String, ClearToolError>;
}

/// [`CommandRunner`] that spawns the real cleartool binary
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: PathBuf,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(constants::CLEARTOOL_COMMAND)
    }
}

impl ProcessRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, args: &[&str]) -> Result<String, ClearToolError> {
        let output = Command::new(&self.program).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ClearToolError::ClearToolNotFound
            } else {
                ClearToolError::IoError(e)
            }
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            return Err(ClearToolError::CommandFailed { stderr, exit_code });
        }

        // cleartool reports some failures on stderr with a zero exit code
        if !stderr.trim().is_empty() {
            return Err(ClearToolError::StderrOutput(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Comment argument for operations that record one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentArg {
    /// `-c <text>`
    Comment(String),
    /// `-nc`
    NoComment,
}

impl CommentArg {
    /// Build from dialog input; blank text is no answer at all
    ///
    /// `-nc` is only used when the comment dialog is turned off.
    pub fn from_input(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| Self::Comment(trimmed.to_string()))
    }

    fn push_args<'a>(&'a self, args: &mut Vec<&'a str>) {
        match self {
            Self::Comment(text) => {
                args.push(flags::COMMENT);
                args.push(text);
            }
            Self::NoComment => args.push(flags::NO_COMMENT),
        }
    }
}

/// Executor for cleartool commands
#[derive(Debug, Clone)]
pub struct ClearToolExecutor {
    runner: Arc<dyn CommandRunner>,
    logger: Arc<dyn Logger>,
}

impl ClearToolExecutor {
    /// Create an executor over an arbitrary runner
    pub fn new(runner: Arc<dyn CommandRunner>, logger: Arc<dyn Logger>) -> Self {
        Self { runner, logger }
    }

    /// Create an executor spawning the given cleartool binary
    pub fn with_program(program: impl Into<PathBuf>, logger: Arc<dyn Logger>) -> Self {
        Self::new(Arc::new(ProcessRunner::new(program)), logger)
    }

    /// Run a cleartool command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, ClearToolError> {
        self.logger.log(&format!("cleartool {}", args.join(" ")));
        let result = self.runner.run(args);
        if let Err(ref e) = result {
            let command = args.first().copied().unwrap_or_default();
            self.logger.log(&format!("cleartool {} failed: {}", command, e));
        }
        result
    }

    /// Run `cleartool describe`
    pub fn describe_raw(&self, element: &Path) -> Result<String, ClearToolError> {
        let path = element.to_string_lossy();
        self.run(&[commands::DESCRIBE, &path])
    }

    /// Describe an element and classify its state
    pub fn describe(&self, element: &Path) -> Result<Describe, ClearToolError> {
        let output = self.describe_raw(element)?;
        Ok(Parser::parse_describe(&output))
    }

    /// Run `cleartool lshistory`
    pub fn history_raw(&self, element: &Path) -> Result<String, ClearToolError> {
        let path = element.to_string_lossy();
        self.run(&[commands::LSHISTORY, &path])
    }

    /// Fetch the history of an element and build its version tree
    pub fn history(&self, element: &Path) -> Result<HistoryTree, ClearToolError> {
        let output = self.history_raw(element)?;
        let events = Parser::parse_history(&output);
        Ok(HistoryTree::from_events(&events))
    }

    /// Run `cleartool co`
    pub fn checkout(&self, element: &Path, comment: &CommentArg) -> Result<String, ClearToolError> {
        self.run_with_comment(commands::CHECKOUT, element, comment)
    }

    /// Run `cleartool ci`
    pub fn checkin(&self, element: &Path, comment: &CommentArg) -> Result<String, ClearToolError> {
        self.run_with_comment(commands::CHECKIN, element, comment)
    }

    /// Run `cleartool mkelem`
    pub fn make_element(
        &self,
        element: &Path,
        comment: &CommentArg,
    ) -> Result<String, ClearToolError> {
        self.run_with_comment(commands::MKELEM, element, comment)
    }

    /// Run `cleartool unco -rm`
    pub fn uncheckout(&self, element: &Path) -> Result<String, ClearToolError> {
        let path = element.to_string_lossy();
        self.run(&[commands::UNCHECKOUT, flags::REMOVE, &path])
    }

    /// Run `cleartool diff -pred`
    pub fn diff_predecessor(&self, element: &Path) -> Result<String, ClearToolError> {
        let path = element.to_string_lossy();
        self.run(&[commands::DIFF, flags::PREDECESSOR, &path])
    }

    fn run_with_comment(
        &self,
        command: &str,
        element: &Path,
        comment: &CommentArg,
    ) -> Result<String, ClearToolError> {
        let path = element.to_string_lossy();
        let mut args = vec![command];
        comment.push_args(&mut args);
        args.push(&path);
        self.run(&args)
    }
}

/// Resolve the path cleartool should operate on
///
/// Symbolic links are followed one level; a relative link target is
/// resolved against the link's directory.
pub fn resolve_element_path(path: &Path) -> Result<PathBuf, ClearToolError> {
    let element_path_error = |source| ClearToolError::ElementPath {
        path: path.to_path_buf(),
        source,
    };

    let metadata = std::fs::symlink_metadata(path).map_err(element_path_error)?;
    if !metadata.file_type().is_symlink() {
        return Ok(path.to_path_buf());
    }

    let target = std::fs::read_link(path).map_err(element_path_error)?;
    if target.is_absolute() {
        Ok(target)
    } else {
        Ok(path
            .parent()
            .map(|dir| dir.join(&target))
            .unwrap_or(target))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::logging::RecordingLogger;
    use crate::model::FileState;

    /// Runner that records arguments and replies with a canned output
    #[derive(Debug, Default)]
    struct CannedRunner {
        reply: String,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl CannedRunner {
        fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: Mutex::default(),
            }
        }
    }

    impl CommandRunner for CannedRunner {
        fn run(&self, args: &[&str]) -> Result<String, ClearToolError> {
            self.calls
                .lock()
                .unwrap()
                .push(args.iter().map(|s| s.to_string()).collect());
            Ok(self.reply.clone())
        }
    }

    #[derive(Debug)]
    struct FailingRunner;

    impl CommandRunner for FailingRunner {
        fn run(&self, _args: &[&str]) -> Result<String, ClearToolError> {
            Err(ClearToolError::CommandFailed {
                stderr: "cleartool: Error: Not a vob object".to_string(),
                exit_code: 1,
            })
        }
    }

    fn executor_with(runner: Arc<CannedRunner>) -> (ClearToolExecutor, Arc<RecordingLogger>) {
        let logger = Arc::new(RecordingLogger::default());
        (ClearToolExecutor::new(runner, logger.clone()), logger)
    }

    #[test]
    fn test_checkout_with_comment_args() {
        let runner = Arc::new(CannedRunner::replying("Checked out"));
        let (executor, _) = executor_with(runner.clone());

        executor
            .checkout(Path::new("foo.c"), &CommentArg::Comment("fix".to_string()))
            .unwrap();

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls[0], vec!["co", "-c", "fix", "foo.c"]);
    }

    #[test]
    fn test_checkin_without_comment_args() {
        let runner = Arc::new(CannedRunner::replying(""));
        let (executor, _) = executor_with(runner.clone());

        executor
            .checkin(Path::new("foo.c"), &CommentArg::NoComment)
            .unwrap();

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls[0], vec!["ci", "-nc", "foo.c"]);
    }

    #[test]
    fn test_uncheckout_removes_copy() {
        let runner = Arc::new(CannedRunner::replying(""));
        let (executor, _) = executor_with(runner.clone());

        executor.uncheckout(Path::new("foo.c")).unwrap();

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls[0], vec!["unco", "-rm", "foo.c"]);
    }

    #[test]
    fn test_describe_classifies_output() {
        let runner = Arc::new(CannedRunner::replying(
            "version \"foo.c@@\\main\\CHECKEDOUT\" from \\main\\3 (reserved)\n",
        ));
        let (executor, _) = executor_with(runner);

        let describe = executor.describe(Path::new("foo.c")).unwrap();
        assert_eq!(describe.state, FileState::CheckedOut);
    }

    #[test]
    fn test_history_builds_tree() {
        let runner = Arc::new(CannedRunner::replying(
            "01-Jan-24 alice checkout version from \\main\\3\n",
        ));
        let (executor, _) = executor_with(runner);

        let tree = executor.history(Path::new("foo.c")).unwrap();
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree[tree.roots()[0]].label, "main");
    }

    #[test]
    fn test_run_logs_command_line() {
        let runner = Arc::new(CannedRunner::replying(""));
        let (executor, logger) = executor_with(runner);

        executor.describe_raw(Path::new("foo.c")).unwrap();

        assert_eq!(logger.messages(), vec!["cleartool describe foo.c"]);
    }

    #[test]
    fn test_run_logs_failure() {
        let logger = Arc::new(RecordingLogger::default());
        let executor = ClearToolExecutor::new(Arc::new(FailingRunner), logger.clone());

        let result = executor.describe(Path::new("foo.c"));

        assert!(matches!(
            result,
            Err(ClearToolError::CommandFailed { exit_code: 1, .. })
        ));
        assert_eq!(logger.messages().len(), 2);
        assert!(logger.messages()[1].contains("Not a vob object"));
    }

    #[test]
    fn test_comment_arg_from_input() {
        assert_eq!(CommentArg::from_input("   \n"), None);
        assert_eq!(
            CommentArg::from_input(" fix typo \n"),
            Some(CommentArg::Comment("fix typo".to_string()))
        );
    }

    #[test]
    fn test_resolve_element_path_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("foo.c");
        std::fs::write(&file, "int main;").unwrap();

        assert_eq!(resolve_element_path(&file).unwrap(), file);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_element_path_follows_relative_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.c");
        std::fs::write(&target, "int main;").unwrap();
        let link = dir.path().join("link.c");
        std::os::unix::fs::symlink("real.c", &link).unwrap();

        assert_eq!(resolve_element_path(&link).unwrap(), target);
    }

    #[test]
    fn test_resolve_element_path_missing_file() {
        let result = resolve_element_path(Path::new("/definitely/not/here.c"));
        assert!(matches!(result, Err(ClearToolError::ElementPath { .. })));
    }
}
