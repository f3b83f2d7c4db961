//! DocumentStore integration suite
//!
//! End-to-end coverage of the public API, organized by concern:
//!
//! - accessors: get / get_or / set / all
//! - removal: remove and the filtered sequence removals
//! - appending: append_array / append_unique and their uniqueness rules
//! - finding: find_paths / find
//! - persistence: save / reload / autosave / builder wiring
//! - properties: property-based algebra (set/get, remove, append)
//!
//! ```bash
//! cargo test --test store_api
//! ```

mod util;

mod appending;
mod properties;
mod removal;
