mod shell_completion;

use std::env;
use std::fs;
use std::process;

fn main() {
    let outdir = match env::var_os("OUT_DIR") {
        Some(outdir) => outdir,
        None => {
            eprintln!("OUT_DIR environment variable not defined.");
            process::exit(1);
        }
    };
    fs::create_dir_all(&outdir).unwrap();

    shell_completion::generate_shell_completion_scripts(&outdir);
}
