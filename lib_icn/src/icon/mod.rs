pub mod loader;
pub mod quantize;
pub mod role;

pub use loader::{load_family, FamilyPaths, LoadError, SourceImage};
pub use quantize::{quantize, QuantizeError, QuantizeOptions, QuantizedIcon, TransparencyRule};
pub use role::IconRole;
