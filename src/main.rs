extern crate flowhist;
use flowhist::command::EditorCommand;
use flowhist::controller::Controller;
use flowhist::{Caretaker, Document, HistoryConfig, Originator};

extern crate docopt;
#[macro_use] extern crate serde_derive;
use docopt::Docopt;

use tracing_subscriber::EnvFilter;

use std::error::Error;
use std::fs;
use std::io::{BufRead, Write, stdin, stdout};

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

const USAGE: &'static str = "
Usage:
  flowhist [options] [<file>]
  flowhist (-h | --help)
  flowhist --version

Commands (one per line on stdin):
  w, save         checkpoint the document
  u, undo         step back to the previous checkpoint
  r, redo         step forward again
  cu, cr          clear the undo / redo list
  xml <text>      replace the flow XML
  path <text>     change the document path
  config <json>   replace the configuration
  p, show         print the document
  q, quit         leave

Options:
  -h --help          Show this screen.
  --version          Show version.
  --capacity=<n>     Keep at most <n> snapshots per stack.
  --keep-redo        Do not discard the redo list on a new checkpoint.
  --config=<file>    Read history settings from a JSON file.
";

#[derive(Deserialize)]
struct Args {
    arg_file: Option<String>,
    flag_capacity: Option<usize>,
    flag_keep_redo: bool,
    flag_config: Option<String>,
}

struct Config {
    pub file: Option<String>,
    pub history: HistoryConfig,
}

impl Config {
    fn from_args(args: Args) -> Result<Config, Box<dyn Error>> {
        let mut history = match args.flag_config {
            Some(path) => HistoryConfig::from_json(&fs::read_to_string(path)?)?,
            None => HistoryConfig::default(),
        };

        if args.flag_capacity.is_some() {
            history.capacity = args.flag_capacity;
        }
        history.retain_redo_on_save |= args.flag_keep_redo;
        history.validate()?;

        Ok(Config {
            file: args.arg_file,
            history,
        })
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flowhist=warn"));

    // stdout carries the status lines
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open(file: Option<String>) -> Result<Document, Box<dyn Error>> {
    match file {
        Some(path) => {
            let xml = fs::read_to_string(&path)?;
            Ok(Document::new(path, xml))
        }
        None => Ok(Document::default()),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = {
        let args: Args = Docopt::new(USAGE)
            .and_then(|d| d.version(Some(VERSION.into())).deserialize())
            .unwrap_or_else(|e| e.exit());

        Config::from_args(args)?
    };

    setup_logging();

    let mut ctrl = {
        let originator = Originator::new(open(config.file)?);
        let mut caretaker = Caretaker::with_config(originator, &config.history);

        // baseline for the first undo
        caretaker.save();

        Controller::new(caretaker)
    };

    let stdin = stdin();
    let stdout = stdout();
    let mut stdout = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match EditorCommand::parse(&line) {
            Ok(command) => {
                if !ctrl.transition(command) {
                    break;
                }
            }
            Err(e) => ctrl.set_status(&format!("error: {}", e)),
        }

        writeln!(stdout, "{}", ctrl.status())?;
    }

    stdout.flush()?;

    Ok(())
}

fn main() {
    run().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
}
