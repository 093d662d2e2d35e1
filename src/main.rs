use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Writes a `.txt` character map next to every glyph-metadata `.json` file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the `.json` files [default: the directory of this executable]
    dir: Option<PathBuf>,
}

/// The directory the executable lives in, or the current directory if that is unknown.
fn default_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("glyphmap=info"))
        .init();

    let args = Args::parse();
    let dir = args.dir.unwrap_or_else(default_dir);

    match glyphmap::run(&dir) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
