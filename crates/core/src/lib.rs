//! Compile JSON localization resources into typed TypeScript accessors.
//!
//! Plain strings become string literals, strings with `{name: type}`
//! placeholders become typed arrow functions, and plural-form (`"0"`, `"1"`,
//! `"n"`) or boolean-form (`"true"`, `"false"`) objects become functions that
//! select a form from their first argument.
//!
//! ```
//! use i18nts_core::{GenerateOptions, generate_from_str};
//!
//! let ts = generate_from_str(r#"{ "greeting": "Hi {name: string}" }"#, &GenerateOptions::default())?;
//! assert_eq!(ts, "{\n  greeting: (name: string) => `Hi ${name}`,\n}\n");
//! # Ok::<(), i18nts_core::CodegenError>(())
//! ```

mod emitter;
mod error;
pub mod ir;
mod options;

pub use emitter::{generate_from_str, generate_from_value};
pub use error::CodegenError;
pub use options::GenerateOptions;
