pub mod average;
pub mod lucas;
pub mod memo;
pub mod timing;

pub use average::{average, describe_average};
pub use lucas::LucasNumbers;
pub use memo::Memo;
pub use timing::timed;
