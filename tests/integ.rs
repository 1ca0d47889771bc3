use assert_cmd::prelude::*;
use predicate::str::contains;
use predicates::prelude::*;
use std::ffi;
use std::process::Command;

#[test]
fn flag_selector_without_optimizations() {
    Command::cargo_bin("build-flags")
        .unwrap()
        .assert()
        .success()
        .stdout("Optimizations disabled\n");
}

#[test]
fn flag_selector_with_optimizations() {
    Command::cargo_bin("build-flags")
        .unwrap()
        .arg("-O")
        .assert()
        .success()
        .stdout("Optimizations enabled\n");
}

#[test]
fn flag_selector_rejects_unknown_flags() {
    Command::cargo_bin("build-flags")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure();
}

#[test]
fn flag_selector_rejects_builder_options() {
    Command::cargo_bin("build-flags")
        .unwrap()
        .args(&["--compiler", "gcc"])
        .assert()
        .failure();
}

#[cfg(unix)]
mod builder {
    use super::*;
    use filetime::{set_file_mtime, FileTime};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A project directory holding `src/` and a fake compiler that logs its
    /// arguments and creates its `-o` destination. Sources whose path contains
    /// `fail` make it exit with status 1 without producing anything.
    struct Project {
        dir: TempDir,
    }

    impl Project {
        fn new() -> Self {
            let project = Self {
                dir: TempDir::new().unwrap(),
            };
            fs::create_dir_all(project.path("src")).unwrap();

            let compiler = project.compiler_path();
            fs::write(
                &compiler,
                format!(
                    "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\ncase \"$1\" in *fail*) exit 1;; esac\ntouch \"$3\"\n",
                    project.invocations_path().display()
                ),
            )
            .unwrap();
            fs::set_permissions(&compiler, fs::Permissions::from_mode(0o755)).unwrap();

            project
        }

        fn path(&self, relative_path: &str) -> PathBuf {
            self.dir.path().join(relative_path)
        }

        fn compiler_path(&self) -> PathBuf {
            self.path("fake-cc")
        }

        fn invocations_path(&self) -> PathBuf {
            self.path("invocations.log")
        }

        fn add_source(&self, relative_path: &str) {
            let path = self.path(relative_path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "int main() { return 0; }\n").unwrap();
            set_file_mtime(&path, FileTime::from_unix_time(1_000_000, 0)).unwrap();
        }

        fn invocations(&self) -> Vec<String> {
            match fs::read_to_string(self.invocations_path()) {
                Ok(content) => content.lines().map(str::to_string).collect(),
                Err(_) => vec![],
            }
        }

        fn build_final<I, S>(&self, args: I) -> Command
        where
            I: IntoIterator<Item = S>,
            S: AsRef<ffi::OsStr>,
        {
            let mut cmd = Command::cargo_bin("build-final").unwrap();
            cmd.current_dir(self.dir.path())
                .arg("--compiler")
                .arg(self.compiler_path())
                .args(args);
            cmd
        }
    }

    #[test]
    fn builds_missing_target() {
        let project = Project::new();
        project.add_source("src/a.c");

        project
            .build_final(&[] as &[&str])
            .assert()
            .success()
            .stdout("Building src/a.c...\n");

        assert_eq!(project.invocations(), vec!["src/a.c -o build/debug/a"]);
        assert!(project.path("build/debug/a").is_file());
    }

    #[test]
    fn second_run_skips_up_to_date_target() {
        let project = Project::new();
        project.add_source("src/a.c");

        project.build_final(&[] as &[&str]).assert().success();
        project
            .build_final(&[] as &[&str])
            .assert()
            .success()
            .stdout("Skipping src/a.c\n");

        assert_eq!(project.invocations().len(), 1);
    }

    #[test]
    fn creates_intermediate_build_directories() {
        let project = Project::new();
        project.add_source("src/sub/b.c");

        project
            .build_final(&[] as &[&str])
            .assert()
            .success()
            .stdout(contains("Building src/sub/b.c..."));

        assert_eq!(project.invocations(), vec!["src/sub/b.c -o build/debug/sub/b"]);
        assert!(project.path("build/debug/sub").is_dir());
    }

    #[test]
    fn optimized_build_uses_release_tree() {
        let project = Project::new();
        project.add_source("src/a.c");

        project.build_final(&["-O"]).assert().success();

        assert_eq!(project.invocations(), vec!["src/a.c -o build/release/a -O3"]);
        assert!(project.path("build/release/a").is_file());
        assert!(!project.path("build/debug").exists());
    }

    #[test]
    fn profiles_do_not_share_targets() {
        let project = Project::new();
        project.add_source("src/a.c");

        project.build_final(&[] as &[&str]).assert().success();
        project
            .build_final(&["-O"])
            .assert()
            .success()
            .stdout("Building src/a.c...\n");

        assert_eq!(
            project.invocations(),
            vec!["src/a.c -o build/debug/a", "src/a.c -o build/release/a -O3"]
        );
    }

    #[test]
    fn touched_source_is_rebuilt_alone() {
        let project = Project::new();
        project.add_source("src/a.c");
        project.add_source("src/b.c");
        project.build_final(&[] as &[&str]).assert().success();

        let far_future = FileTime::from_unix_time(4_000_000_000, 0);
        set_file_mtime(project.path("src/b.c"), far_future).unwrap();

        project
            .build_final(&[] as &[&str])
            .assert()
            .success()
            .stdout("Skipping src/a.c\nBuilding src/b.c...\n");

        assert_eq!(
            project.invocations(),
            vec![
                "src/a.c -o build/debug/a",
                "src/b.c -o build/debug/b",
                "src/b.c -o build/debug/b"
            ]
        );
    }

    #[test]
    fn ignores_non_c_files() {
        let project = Project::new();
        project.add_source("src/a.c");
        project.add_source("src/a.h");
        project.add_source("src/notes.txt");

        project
            .build_final(&[] as &[&str])
            .assert()
            .success()
            .stdout("Building src/a.c...\n");
    }

    #[test]
    fn failed_compilation_is_reported_after_all_sources() {
        let project = Project::new();
        project.add_source("src/fail.c");
        project.add_source("src/ok.c");

        project
            .build_final(&[] as &[&str])
            .assert()
            .failure()
            .code(1)
            .stdout(contains("Building src/fail.c..."))
            .stdout(contains("Building src/ok.c..."))
            .stderr(contains("src/fail.c - Build failed"));

        assert!(!project.path("build/debug/fail").exists());
        assert!(project.path("build/debug/ok").is_file());
    }

    #[test]
    fn missing_source_directory_is_fatal() {
        let project = Project::new();

        project
            .build_final(&["--source-dir", "nowhere"])
            .assert()
            .failure()
            .stderr(contains("nowhere does not exist"));
    }

    #[test]
    fn missing_compiler_is_fatal() {
        let project = Project::new();
        project.add_source("src/a.c");

        let mut cmd = Command::cargo_bin("build-final").unwrap();
        cmd.current_dir(project.dir.path())
            .args(&["--compiler", "cbuild-no-such-compiler"])
            .assert()
            .failure()
            .stderr(contains("Failed to run compiler cbuild-no-such-compiler"));
    }

    #[test]
    fn custom_build_directory() {
        let project = Project::new();
        project.add_source("src/a.c");

        project.build_final(&["--build-dir", "out"]).assert().success();

        assert_eq!(project.invocations(), vec!["src/a.c -o out/debug/a"]);
        assert!(Path::new(&project.path("out/debug/a")).is_file());
    }

    #[test]
    fn blocked_output_directory_is_fatal() {
        let project = Project::new();
        project.add_source("src/sub/b.c");
        fs::create_dir_all(project.path("build/debug")).unwrap();
        fs::write(project.path("build/debug/sub"), "").unwrap();

        project
            .build_final(&[] as &[&str])
            .assert()
            .failure()
            .stderr(contains("Failed to create directory"));

        assert!(project.invocations().is_empty());
    }

    #[test]
    fn symlinked_source_is_built() {
        let project = Project::new();
        project.add_source("shared/a.c");
        std::os::unix::fs::symlink(project.path("shared/a.c"), project.path("src/link.c")).unwrap();

        project
            .build_final(&[] as &[&str])
            .assert()
            .success()
            .stdout("Building src/link.c...\n");

        assert_eq!(project.invocations(), vec!["src/link.c -o build/debug/link"]);
    }
}
