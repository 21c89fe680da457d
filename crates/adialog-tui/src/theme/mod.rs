//! Terminal theme for dialogs.
//!
//! - `palette` - Raw color constants
//! - `stylesheet` - Class name to style resolution

pub mod palette;
pub mod stylesheet;

pub use stylesheet::StyleSheet;
