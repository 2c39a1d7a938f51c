//! Response encoding subsystem.
//!
//! # Data Flow
//! ```text
//! search result ─▶ value.rs (EncodableValue → JSON members)
//!                      │
//! error ─▶ disclosure.rs (full diagnostic or error_code:<uuid>)
//!                      │
//!                      ▼
//!               envelope.rs ({"response":{version,status,...}})
//!                      │
//!                      ▼
//!               callback.rs (/**/cb(...) when JSONP applies)
//! ```
//!
//! # Design Decisions
//! - Encoding never fails; unknown shapes are rendered as strings
//! - The only side effect besides logging is the 401 challenge on auth failures
//! - Body fragments are trusted and embedded verbatim

pub mod callback;
pub mod disclosure;
pub mod envelope;
pub mod value;

pub use callback::escape_callback_name;
pub use disclosure::{detailed_message, ErrorDisclosure};
pub use envelope::{body_fragment, ResponseEncoder, ResponseSink, STATUS_ERROR, STATUS_OK};
pub use value::{escape_json, EncodableValue};
