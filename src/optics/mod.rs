//! Optics used to scope middleware into a larger state/action universe.
//!
//! - [`KeyPath`]: read-only projection from a root value to one of its parts
//! - [`Prism`]: partial, reversible mapping between a sum type and one case
//!
//! # Prism law
//!
//! Every prism must satisfy `prism.extract(&prism.embed(x)) == Some(x)`.
//! The law is not enforced by the type system; tests check it for each
//! prism they build.

mod key_path;
mod prism;

pub use key_path::KeyPath;
pub use prism::Prism;
