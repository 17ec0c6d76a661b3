//! Query encoder: structured arguments to the `variables` grammar.
//!
//! The server does not take URL-encoded JSON. It takes a parenthesised
//! grammar:
//!
//! ```text
//! (start:0,origin:FACETED_SEARCH,query:(keywords:data%20scientist,
//!  queryParameters:(network:List(F,O))))
//! ```
//!
//! ## Pipeline
//!
//! ```ignore
//! let args = SearchArgs::new("data scientist").network(["F", "O"]);
//! let value = search_value(&args)?;        // builder → value tree
//! let fragment = encode(&value);           // recursive writer
//! let url = request_url(base, id, &fragment)?;
//! ```
//!
//! Empty lists are never written; the key that would hold them is dropped.

pub mod request;
pub mod value;
pub mod variables;
pub mod writer;

pub use request::{profile_url, request_url, search_referer};
pub use value::{Record, Value};
pub use variables::{
    profile_value, profile_variables, search_value, search_variables, FilterLayout, SearchArgs,
};
pub use writer::{encode, escape_text};
