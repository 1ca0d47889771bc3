use anyhow::Result;
use cbuild::cli::{self, arg, BUILD_FINAL_BIN};
use cbuild::config::BuildConfig;
use std::io;
use std::process;

fn main() -> Result<()> {
    let arg_matches = cli::get_app(BUILD_FINAL_BIN).get_matches();

    if arg_matches.is_present(arg::GENERATE_ZSH_COMPLETION) {
        cli::write_zsh_completion(BUILD_FINAL_BIN, &mut io::stdout());
        return Ok(());
    }

    cbuild::init_logger(arg_matches.occurrences_of(arg::VERBOSITY))?;

    let config = BuildConfig::from_arg_matches(&arg_matches);
    config.validate()?;
    log::debug!(
        "Building {} into {} ({} profile)",
        config.source_root.display(),
        config.build_root.display(),
        config.profile
    );

    let compiler = config.compiler();
    let summary = config.builder().build(|target| compiler.compile(target))?;
    summary.log();

    if summary.has_failures() {
        process::exit(1);
    }

    Ok(())
}
