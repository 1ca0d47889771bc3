use crate::cli::arg;
use crate::engine::compiler::Compiler;
use crate::engine::IncrementalBuilder;
use crate::profile::Profile;
use anyhow::{anyhow, Result};
use clap::ArgMatches;
use std::path::{Path, PathBuf};

/// Everything a builder run needs, resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    pub source_root: PathBuf,
    pub build_root: PathBuf,
    pub profile: Profile,
    pub compiler_program: String,
}

impl BuildConfig {
    pub fn new(source_root: &Path, build_dir: &Path, profile: Profile, compiler: &str) -> Self {
        Self {
            source_root: source_root.to_path_buf(),
            build_root: profile.build_root(build_dir),
            profile,
            compiler_program: compiler.to_string(),
        }
    }

    pub fn from_arg_matches(arg_matches: &ArgMatches) -> Self {
        let profile = Profile::from_optimize_flag(arg_matches.is_present(arg::OPTIMIZE));
        Self::new(
            Path::new(arg_matches.value_of(arg::SOURCE_DIR).unwrap_or("src")),
            Path::new(arg_matches.value_of(arg::BUILD_DIR).unwrap_or("build")),
            profile,
            arg_matches.value_of(arg::COMPILER).unwrap_or("gcc"),
        )
    }

    pub fn validate(&self) -> Result<()> {
        if !self.source_root.is_dir() {
            return Err(anyhow!(
                "Source directory {} does not exist or is not a directory",
                self.source_root.display()
            ));
        }

        if self.compiler_program.is_empty() {
            return Err(anyhow!("Compiler program cannot be empty"));
        }

        Ok(())
    }

    pub fn compiler(&self) -> Compiler {
        Compiler::new(&self.compiler_program, self.profile.compiler_args())
    }

    pub fn builder(&self) -> IncrementalBuilder {
        IncrementalBuilder::new(self.source_root.clone(), self.build_root.clone())
    }
}
