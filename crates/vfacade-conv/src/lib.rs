//! vfacade-conv - Tagged-value decoding for upstream telemetry payloads
//!
//! The upstream vehicle service describes every field with an explicit type
//! tag. This crate turns those self-describing values into plain JSON and
//! strips denylisted fields on the way.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use vfacade_conv::{decode_root, Denylist};
//!
//! let data = json!({
//!     "vin": {"type": "String", "value": "123123412412"},
//!     "fourDoorSedan": {"type": "Boolean", "value": "True"},
//!     "twoDoorCoupe": {"type": "Boolean", "value": "False"}
//! });
//!
//! let decoded = decode_root(data, &Denylist::default()).unwrap();
//! assert_eq!(decoded["vin"], json!("123123412412"));
//! assert_eq!(decoded["fourDoorSedan"], json!(true));
//! assert!(!decoded.contains_key("twoDoorCoupe"));
//! ```
//!
//! # Tags
//!
//! | Tag | Payload | Decoded as |
//! |-----|---------|------------|
//! | `String` | `value` | string, unchanged |
//! | `Boolean` | `value` | boolean |
//! | `Number`, `Float` | `value` | float |
//! | `Integer` | `value` | integer |
//! | `Array` | `values` | list of decoded field mappings |
//! | `Null` | - | null |
//! | anything else | `value` | payload, unchanged |

pub mod decode;
pub mod error;
pub mod filter;
pub mod tag;

pub use decode::{decode_object, decode_root, decode_value};
pub use error::{ConvError, ConvResult};
pub use filter::{Denylist, DEFAULT_DENYLIST};
pub use tag::TypeTag;
