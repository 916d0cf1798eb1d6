pub mod enums;
pub mod error;
pub mod rule;
pub mod table;

pub use enums::{ComorbidityIndex, IcdVersion, MappingMode};
pub use error::{ComorbidityError, ErrorKind, Result};
pub use rule::{CategoryRule, RuleSet};
pub use table::{ComorbidityRow, ComorbidityTable};
