//! Domain Value Objects
//!
//! Immutable configuration values computed once per bundle invocation.

mod component_name;
mod exclusion_list;
mod output_spec;
mod path_redirect;

pub use component_name::ComponentName;
pub use exclusion_list::ExclusionList;
pub use output_spec::OutputSpec;
pub use path_redirect::PathRedirect;
