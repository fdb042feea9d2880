use reflayout_conformance::exit_codes::SUCCESS;
use reflayout_core::layout::named::NAMED_LAYOUTS;

pub fn run() -> i32 {
    let width = NAMED_LAYOUTS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, layout) in NAMED_LAYOUTS {
        println!("{name:<width$}  {layout}");
    }
    SUCCESS
}
