use reflayout_conformance::report::console;
use reflayout_conformance::{write_summary, Suite, SuiteReport, SuiteResult, Summary};

use crate::cli::args::{OutputFormat, RunArgs};

pub fn run(args: RunArgs) -> anyhow::Result<i32> {
    let outcome = load_and_run(&args);

    let summary = match &outcome {
        Ok(report) => Summary::from_report(report),
        Err(e) => Summary::from_error(e),
    };
    if let Some(path) = &args.output {
        write_summary(&summary, path)?;
        tracing::info!(path = %path.display(), "wrote summary");
    }

    match (args.format, &outcome) {
        (OutputFormat::Json, _) => println!("{}", summary.to_json()?),
        (OutputFormat::Text, Ok(report)) => print!("{}", console::render(report)),
        (OutputFormat::Text, Err(e)) => eprintln!("error: {e}"),
    }

    Ok(summary.exit_code)
}

fn load_and_run(args: &RunArgs) -> SuiteResult<SuiteReport> {
    let suite = match &args.suite {
        Some(path) => Suite::load(path)?,
        None => Suite::builtin()?,
    };
    suite.run()
}
