//! Chain driver for MAX72xx LED display controllers.

mod max72xx;

pub use max72xx::Max72xx;
