mod journal;
mod logging;

pub const JOURNAL_PATH_ENV: &str = "ONEIRO_JOURNAL";

pub mod prelude {
    pub use crate::shared::journal::{load_entries, load_journal, sample_journal, JournalError};
    pub use crate::shared::logging::LoggingOpts;
    pub use crate::shared::JOURNAL_PATH_ENV;
}

pub(crate) fn convert_to_string(input: Vec<&str>) -> Vec<String> {
    input.iter().map(|x| x.to_string()).collect()
}
