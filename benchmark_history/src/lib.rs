//!
//! The benchmark history library.
//!

pub mod analysis;
pub mod context;
pub mod data_file;
pub mod input;
pub mod model;
pub mod output;
pub mod results;

pub use crate::analysis::compare;
pub use crate::analysis::DEFAULT_ALERT_THRESHOLD;
pub use crate::context::Context;
pub use crate::data_file::codec::Error as DataFileCodecError;
pub use crate::data_file::error::Error as DataFileError;
pub use crate::input::error::Error as InputError;
pub use crate::input::format::Format as InputFormat;
pub use crate::input::go_bench::GoBenchOutput;
pub use crate::input::Input;
pub use crate::model::history::History;
pub use crate::model::history::DEFAULT_TOOL_LABEL;
pub use crate::model::run::commit::Commit;
pub use crate::model::run::commit::person::Person;
pub use crate::model::run::measurement::Measurement;
pub use crate::model::run::Run;
pub use crate::output::csv::Csv as CsvOutput;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::xlsx::Xlsx as XlsxOutput;
pub use crate::output::Output;
pub use crate::results::comparison::Comparison;
pub use crate::results::Results;
