use crate::domain::BuildTarget;
use anyhow::{Context, Result};
use duct::cmd;
use std::ffi::OsString;
use std::fmt;
use std::time::Instant;

/// Outcome of one compiler process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompileStatus {
    Success,
    /// `code` is `None` when the process was terminated by a signal.
    Failure { code: Option<i32> },
}

impl fmt::Display for CompileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileStatus::Success => f.write_str("success"),
            CompileStatus::Failure { code: Some(code) } => write!(f, "exit code {}", code),
            CompileStatus::Failure { code: None } => f.write_str("terminated by signal"),
        }
    }
}

/// An external compiler called as `<program> <source> -o <destination> [extra_args...]`.
#[derive(Clone, Debug)]
pub struct Compiler {
    program: OsString,
    extra_args: Vec<OsString>,
}

impl Compiler {
    pub fn new<P, I, S>(program: P, extra_args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            extra_args: extra_args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invocation_args(&self, target: &BuildTarget) -> Vec<OsString> {
        let mut args = Vec::with_capacity(3 + self.extra_args.len());
        args.push(target.source.path.clone().into_os_string());
        args.push("-o".into());
        args.push(target.destination.clone().into_os_string());
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Blocks until the compiler exits. A non-zero exit is reported, not raised;
    /// only a failure to launch the process is an error.
    pub fn compile(&self, target: &BuildTarget) -> Result<CompileStatus> {
        let args = self.invocation_args(target);
        log::debug!(
            "{} - Command \"{} {}\" - Executing",
            target,
            self.program.to_string_lossy(),
            args.iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let compile_start = Instant::now();
        let output = cmd(&self.program, &args)
            .unchecked()
            .run()
            .with_context(|| {
                format!(
                    "Failed to run compiler {} for {}",
                    self.program.to_string_lossy(),
                    target
                )
            })?;

        if output.status.success() {
            log::info!(
                "{} - Built (took: {}ms)",
                target,
                compile_start.elapsed().as_millis()
            );
            Ok(CompileStatus::Success)
        } else {
            Ok(CompileStatus::Failure {
                code: output.status.code(),
            })
        }
    }
}
