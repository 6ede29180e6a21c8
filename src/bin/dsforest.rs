use std::{
    fs::{self, File},
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use dsforest::*;
use typed_arena::Arena;

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs a script of forest operations (`-` reads stdin).
    Run { script: PathBuf },
    /// Runs the built-in eight element walkthrough.
    Demo,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Backend {
    Indexed,
    Linked,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long)]
    log: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
    #[arg(long, value_enum, default_value_t = Linking::Unconditional)]
    linking: Linking,
    #[arg(long, value_enum, default_value_t = Backend::Indexed)]
    backend: Backend,
    /// Log re-added elements at debug level only.
    #[arg(long)]
    quiet_duplicates: bool,

    #[command(subcommand)]
    command: Command,
}

const DEMO: &str = "
add 0 1 2 3 4 5 6 7
union 1 2
union 5 2
union 6 7
union 7 2
union 0 4
union 4 3
dump
expect-connected 1 5
expect-connected 6 2
expect-connected 0 4
expect-disconnected 1 0
expect-size 1 5
expect-size 0 3
expect-count 2
count
sets
add 2
expect-count 2
dump
";

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log) = &args.log {
        let log_file = match File::create(log) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("cannot create {}: {}", log.display(), e);
                return ExitCode::FAILURE;
            }
        };
        let level = if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(log_file)
            .init();
    }

    let conf = Config {
        linking: args.linking,
        report_duplicates: !args.quiet_duplicates,
    };
    let src = match &args.command {
        Command::Run { script } => match read_script(script) {
            Ok(src) => src,
            Err(e) => {
                eprintln!("cannot read {}: {}", script.display(), e);
                return ExitCode::FAILURE;
            }
        },
        Command::Demo => DEMO.to_string(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let res = match args.backend {
        Backend::Indexed => {
            let mut forest = DisjointSetForest::with_config(conf);
            script::run_str(&src, &mut forest, &mut out)
        }
        Backend::Linked => {
            let arena = Arena::new();
            let mut forest = LinkedForest::with_config(&arena, conf);
            script::run_str(&src, &mut forest, &mut out)
        }
    };
    let _ = out.flush();

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_script(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut src = String::new();
        io::stdin().read_to_string(&mut src)?;
        Ok(src)
    } else {
        fs::read_to_string(path)
    }
}
