//! Domain Services
//!
//! Pure bundling rules. No I/O; inventory lookup goes through a port.

mod exclusions;
mod header;
mod inventory;
mod redirects;

pub use exclusions::{build_exclusions, THIRD_PARTY_SCRIPTS};
pub use header::{prepend_header, LICENSE_HEADER};
pub use inventory::{ComponentInventory, FIRST_PARTY_PREFIXES};
pub use redirects::{build_redirects, component_path, normalize_components_root};
