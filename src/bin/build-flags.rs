use anyhow::Result;
use cbuild::cli::{self, arg, BUILD_FLAGS_BIN};
use cbuild::profile::Profile;
use std::io;

fn main() -> Result<()> {
    let arg_matches = cli::get_app(BUILD_FLAGS_BIN).get_matches();

    if arg_matches.is_present(arg::GENERATE_ZSH_COMPLETION) {
        cli::write_zsh_completion(BUILD_FLAGS_BIN, &mut io::stdout());
        return Ok(());
    }

    cbuild::init_logger(arg_matches.occurrences_of(arg::VERBOSITY))?;

    let profile = Profile::from_optimize_flag(arg_matches.is_present(arg::OPTIMIZE));
    println!("{}", profile.optimizations_notice());

    Ok(())
}
