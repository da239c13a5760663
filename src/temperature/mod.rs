pub mod convert;
pub mod disk;

pub use convert::{celsius_to_fahrenheit, convert_line, process_temperature_file, processed_path};
pub use disk::{FixedSpace, SpaceProbe, SystemDisks};
