//! Mock providers for testing.

mod optical;

pub use optical::{MockOpticalProvider, MockOutcome, RecordedRequest};
