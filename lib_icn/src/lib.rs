pub mod fork;
pub mod icon;
pub mod palette;
pub mod rez;

use log::*;
use std::io::Write;

pub use crate::fork::{ForkError, ResourceEntry, ResourceFork};
pub use crate::icon::loader::{load_family, FamilyPaths, LoadError, SourceImage};
pub use crate::icon::quantize::{
    quantize, QuantizeError, QuantizeOptions, QuantizedIcon, TransparencyRule,
};
pub use crate::icon::role::IconRole;
pub use crate::palette::matcher::DistanceMetric;
pub use crate::rez::emitter::{emit_document, EmitError, RezOptions};

pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
