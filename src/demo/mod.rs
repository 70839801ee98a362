//! Demonstration drivers.
//!
//! Each driver builds the sample expressions or machines of one variant,
//! applies every algebra that variant offers and writes one labelled line
//! per observation to `out`. Diagnostics for expected failures go to `err`.

mod classic;
mod fsm;
mod generic;
mod model;

use std::io::Write;

pub type Driver = fn(&mut dyn Write, &mut dyn Write) -> anyhow::Result<()>;

/// All drivers, in the order the binary runs them.
pub const DRIVERS: &[(&str, Driver)] = &[
    ("classic", classic::run),
    ("generic", generic::run),
    ("model", model::run),
    ("fsm", fsm::run),
];

pub use classic::run as run_classic;
pub use fsm::run as run_fsm;
pub use generic::run as run_generic;
pub use model::run as run_model;
