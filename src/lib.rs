pub mod combinatorics;
pub mod config;
pub mod error;
pub mod logging;
pub mod numeric;
pub mod temperature;

pub use combinatorics::{
	for_each_permutation,
	generate_permutations,
	permutation_count,
	sample_permutations,
	sample_with_replacement,
	sampling_rng,
	DEFAULT_SAMPLE_SIZE,
};
pub use config::{PermutationConfig, TemperatureConfig, ToolConfig};
pub use error::{ToolError, ToolResult};
pub use logging::init_logging;
pub use numeric::{average, describe_average, timed, LucasNumbers, Memo};
pub use temperature::{
	celsius_to_fahrenheit,
	convert_line,
	process_temperature_file,
	processed_path,
	FixedSpace,
	SpaceProbe,
	SystemDisks,
};
