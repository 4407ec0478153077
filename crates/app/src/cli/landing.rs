use clap::Args;
use storefront::animation::{
    Element, LandingSequence, PlaybackEngine, Viewport, landing::SCRUB_LAG,
};
use tabled::{builder::Builder, settings::Style};

/// Seconds ticked after mounting so the entry animation has finished
/// before sampling.
const SETTLE_SECONDS: f64 = 10.0;

#[derive(Debug, Args)]
pub(crate) struct LandingArgs {
    /// Viewport width in CSS pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in CSS pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Number of scroll steps across the pinned section
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    steps: u32,
}

pub(crate) fn run(args: &LandingArgs) -> Result<(), String> {
    let viewport = Viewport::new(args.width, args.height);

    let mut sequence = LandingSequence::mount(PlaybackEngine::new(), viewport, 0.0)
        .map_err(|error| format!("failed to build landing timelines: {error}"))?;

    sequence.tick(SETTLE_SECONDS);

    println!(
        "{} tier, pinned {}px to {}px",
        sequence.tier(),
        sequence.trigger().start(),
        sequence.trigger().end()
    );

    let mut builder = Builder::default();

    builder.push_record(["Scroll", "Progress", "Element", "Style"]);

    for step in 0..=args.steps {
        let scroll = args.height * f64::from(step) / f64::from(args.steps);

        sequence.on_scroll(scroll);

        let progress = sequence.tick(SCRUB_LAG);

        for element in Element::ALL {
            builder.push_record([
                format!("{scroll:.0}"),
                format!("{progress:.2}"),
                element.to_string(),
                sequence.driver().styles().css(element),
            ]);
        }
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    println!("{table}");

    Ok(())
}
