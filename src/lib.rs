//! Group tagged objects by their discriminant (`__typename` by default).
//!
//! ```
//! use typename_group::{group_by_typename, Typename};
//!
//! struct Node { kind: &'static str, id: u32 }
//!
//! impl Typename for Node {
//!     fn typename(&self) -> &str { self.kind }
//! }
//!
//! let nodes = [
//!     Node { kind: "User", id: 1 },
//!     Node { kind: "Post", id: 1 },
//!     Node { kind: "User", id: 2 },
//! ];
//! let grouped = group_by_typename(&nodes);
//! let user_ids: Vec<u32> = grouped.get("User").unwrap().iter().map(|n| n.id).collect();
//! assert_eq!(user_ids, [1, 2]);
//! ```

pub mod errors;
pub mod file_io;
pub mod group;
pub mod handler;
pub mod parser;
pub mod records;
pub mod utils;

pub use errors::{GroupError, Result};
pub use group::{
    fold_by_typename, group_by_key, group_by_typename, Grouped, IntoVariant, Typename,
    TypenameLiteral, Variant,
};
pub use records::Record;
