use std::io;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use ocrtext::PaddleBridge;

use super::args::CliArgs;

fn init_logging() {
    // stdout carries the recognized text only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> ExitCode {
    if args.log {
        init_logging();
    }

    let invocation = args.invocation();
    let mut engine = PaddleBridge::new(args.python);
    if let Some(script) = args.bridge {
        engine = engine.with_script(script);
    }
    debug!("Engine: {:?}", engine);

    let code = ocrtext::run(
        &engine,
        &invocation,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(code)
}
