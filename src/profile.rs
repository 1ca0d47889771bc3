use std::fmt;
use std::path::{Path, PathBuf};

const RELEASE_COMPILER_ARGS: &[&str] = &["-O3"];

/// Output root and compiler flags selected by the `-O` switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    pub fn from_optimize_flag(optimize: bool) -> Self {
        if optimize {
            Profile::Release
        } else {
            Profile::Debug
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }

    pub fn build_root(self, build_dir: &Path) -> PathBuf {
        build_dir.join(self.name())
    }

    pub fn compiler_args(self) -> &'static [&'static str] {
        match self {
            Profile::Debug => &[],
            Profile::Release => RELEASE_COMPILER_ARGS,
        }
    }

    pub fn optimizations_notice(self) -> &'static str {
        match self {
            Profile::Debug => "Optimizations disabled",
            Profile::Release => "Optimizations enabled",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
