use hello_lambda::Config;
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

mod local;

/// Invokes the hello function locally and prints its responses
#[derive(StructOpt, Debug)]
struct Opt {
    /// Event JSON file, `-` for stdin (defaults to an empty object)
    #[structopt(long, parse(from_os_str))]
    event: Option<PathBuf>,
    /// Context JSON file (defaults to null)
    #[structopt(long, parse(from_os_str))]
    context: Option<PathBuf>,
    /// Config file (defaults to Lambda.toml in the current directory, if present)
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Number of invocations
    #[structopt(long, default_value = "1")]
    repeat: u32,
    /// Pretty-print responses
    #[structopt(long)]
    pretty: bool,
}

fn run(opt: &Opt) -> Result<(), local::InvokeError> {
    let cwd = env::current_dir().map_err(|source| local::InvokeError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    let config = Config::discover(opt.config.as_deref(), &cwd)?;
    simple_logger::init_with_level(config.logging.level)?;

    let event = local::read_document(opt.event.as_deref(), Value::Object(Default::default()))?;
    let context = local::read_document(opt.context.as_deref(), Value::Null)?;

    for response in local::invoke(&event, &context, opt.repeat, opt.pretty)? {
        println!("{}", response);
    }
    Ok(())
}

fn main() {
    let opt = Opt::from_args();

    if let Err(e) = run(&opt) {
        eprintln!("Invocation failed: {}", e);
        process::exit(1);
    }
}
