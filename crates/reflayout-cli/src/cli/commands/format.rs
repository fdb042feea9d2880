use anyhow::Context;
use reflayout_conformance::exit_codes::SUCCESS;
use reflayout_conformance::resolve_layout;
use reflayout_core::{FixedZone, Moment};

use crate::cli::args::FormatArgs;

pub fn run(args: FormatArgs) -> anyhow::Result<i32> {
    let layout = resolve_layout(&args.layout)?;
    let zone = FixedZone::new(args.zone_name.as_str(), args.offset).context("invalid --offset")?;
    let moment =
        Moment::from_unix_nanos(args.unix_nanos, zone).context("invalid --unix-nanos")?;
    println!("{}", moment.format(&layout));
    Ok(SUCCESS)
}
