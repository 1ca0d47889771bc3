use clap::{crate_version, App, AppSettings, Arg, Shell};
use std::io::Write;

pub static BUILD_FLAGS_BIN: &str = "build-flags";
pub static BUILD_FINAL_BIN: &str = "build-final";

pub fn write_zsh_completion<W: Write>(bin_name: &'static str, buf: &mut W) {
    get_app(bin_name).gen_completions_to(bin_name, Shell::Zsh, buf);
}

pub mod arg {
    pub static OPTIMIZE: &str = "optimize";
    pub static VERBOSITY: &str = "verbosity";
    pub static SOURCE_DIR: &str = "source_dir";
    pub static BUILD_DIR: &str = "build_dir";
    pub static COMPILER: &str = "compiler";
    pub static GENERATE_ZSH_COMPLETION: &str = "generate_zsh_completion";
}

pub fn get_app(bin_name: &'static str) -> App<'static, 'static> {
    let app = App::new(bin_name)
        .version(crate_version!())
        .arg(
            Arg::with_name(arg::OPTIMIZE)
                .short("O")
                .help("enable optimizations"),
        )
        .arg(
            Arg::with_name(arg::VERBOSITY)
                .short("v")
                .multiple(true)
                .takes_value(false)
                .help("Increases message verbosity"),
        )
        .arg(
            Arg::with_name(arg::GENERATE_ZSH_COMPLETION)
                .long("generate-zsh-completion")
                .hidden(true),
        )
        .setting(AppSettings::ColoredHelp);

    if bin_name == BUILD_FINAL_BIN {
        with_builder_args(app)
    } else {
        app.about("Report whether optimizations are selected")
    }
}

fn with_builder_args(app: App<'static, 'static>) -> App<'static, 'static> {
    app.about("Compile every C source whose executable is missing or older than the source")
        .arg(
            Arg::with_name(arg::SOURCE_DIR)
                .long("source-dir")
                .takes_value(true)
                .value_name("DIR")
                .default_value("src")
                .help("Directory scanned recursively for .c files"),
        )
        .arg(
            Arg::with_name(arg::BUILD_DIR)
                .long("build-dir")
                .takes_value(true)
                .value_name("DIR")
                .default_value("build")
                .help("Directory receiving the debug/ and release/ output trees"),
        )
        .arg(
            Arg::with_name(arg::COMPILER)
                .long("compiler")
                .takes_value(true)
                .value_name("PROGRAM")
                .default_value("gcc")
                .help("C compiler invoked as: PROGRAM <source> -o <dest> [flags]"),
        )
}
