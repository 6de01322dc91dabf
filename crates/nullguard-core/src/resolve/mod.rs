//! Resolver: turns a policy model and a concrete call into a verdict.

pub mod frame;
pub mod presence;
pub mod resolver;
pub mod verdict;

pub use frame::{Frame, LineSuffix, PlaceholderSuffix, UNKNOWN_LINE};
pub use presence::Presence;
pub use resolver::Resolver;
pub use verdict::{AbsenceKind, Rejection, Verdict};
