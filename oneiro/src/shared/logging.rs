use clap::{ArgGroup, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::filter_fn, prelude::*};
use tracing_subscriber::{
    fmt::format::{Format, PrettyFields},
    Registry,
};

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("logging"))]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global(true))]
    pub verbose: u8,

    #[arg(skip = LevelFilter::WARN)]
    default_level: LevelFilter,
}

impl LoggingOpts {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => self.default_level,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Install the console subscriber. Events routed by target: `user`
    /// honors the verbosity flag, `always` is unconditional, and internal
    /// targets only show up at `-vv` and beyond.
    pub fn configure_logging(&self) {
        let level_filter = self.to_level_filter();
        let console_output = tracing_subscriber::fmt::layer()
            .event_format(
                Format::default()
                    .with_target(false)
                    .without_time()
                    .compact(),
            )
            .fmt_fields(PrettyFields::new())
            .with_filter(filter_fn(move |metadata| match metadata.target() {
                "user" => level_filter >= *metadata.level(),
                "always" => true,
                _ => level_filter >= LevelFilter::DEBUG,
            }));

        let subscriber = Registry::default().with(console_output);

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    }
}
