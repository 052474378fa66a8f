mod run;

pub use run::{Options, consume, run};
