include!("../src/cli.rs");

use std::ffi::OsString;

pub fn generate_shell_completion_scripts(outdir: &OsString) {
    for &bin_name in &[BUILD_FLAGS_BIN, BUILD_FINAL_BIN] {
        let mut app = get_app(bin_name);
        for &shell in &[Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            app.gen_completions(bin_name, shell, outdir);
        }
    }
}
