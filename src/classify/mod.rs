mod compare;
mod engine;
mod partition;
mod report;
mod similarity;

pub use compare::compare_directories;
pub use engine::{Classification, classify_files, classify_pair};
pub use partition::{Metadata, PartitionResult, Report};
pub use report::{print_report, show_report};
pub use similarity::byte_similarity;
