//! # Voyager
//!
//! Client core for normalized social-graph APIs.
//!
//! Responses from these APIs are split into a root result holding URNs and
//! a flat `included` array of `$type`-tagged entities. Requests take their
//! arguments in a bespoke `(key:value,list:List(a,b))` grammar.
//!
//! ## Key Features
//!
//! - **Query encoder**: structured search/profile arguments to the
//!   `variables` grammar, keys in schema order, free text escaped
//! - **Graph resolver**: tagged wire entities back into nested profiles,
//!   with an explicit association policy per endpoint
//! - **Tolerant decoding**: wrong-shaped fields degrade to empty values
//! - **Pluggable transport**: any [`Requester`] can carry the request
//!
//! ## Quick Start
//!
//! ```rust
//! use voyager::{encode, search_value, resolve_profile, Payload, SearchArgs};
//!
//! let args = SearchArgs::new("data scientist").network(["F", "O"]);
//! let fragment = encode(&search_value(&args).unwrap());
//! assert!(fragment.contains("keywords:data%20scientist"));
//!
//! let payload = Payload::from_slice(br#"{"included": [{
//!     "$type": "com.linkedin.voyager.dash.identity.profile.Profile",
//!     "entityUrn": "urn:li:fsd_profile:A",
//!     "publicIdentifier": "jane-doe", "firstName": "Jane", "lastName": "Doe"
//! }]}"#).unwrap();
//! let profile = resolve_profile(&payload, "jane-doe").unwrap();
//! assert_eq!(profile.full_name, "Jane Doe");
//! ```

pub mod client;
pub mod config;
pub mod encoder;
pub mod error;
pub mod model;
pub mod resolve;
pub mod wire;

// Re-exports for convenience
pub use error::{EncodingError, Result, VoyagerError};

pub use client::{Client, HttpRequester, RawResponse, Requester};
pub use config::{AuthCredentials, Config, EndpointConfig, HttpConfig};
pub use encoder::{
    encode, profile_variables, request_url, search_value, search_variables, FilterLayout,
    SearchArgs,
};
pub use model::{
    Certification, ConnectionInfo, DateRange, Education, Experience, Location, Profile,
    ProfilePicture, Skill, YearMonth,
};
pub use resolve::{resolve_profile, resolve_profile_auto, resolve_search, SearchPage};
pub use wire::{flexible_text, Payload, Urn};
