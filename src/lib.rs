pub mod error;
pub mod excel;
pub mod fixture;
pub mod inspect;
pub mod logging;
pub mod normalize;
pub mod preview;

pub use error::{InspectError, InspectResult};
pub use inspect::{InspectConfig, InspectOutcome, OutputFormat, SheetErrorPolicy, run};
