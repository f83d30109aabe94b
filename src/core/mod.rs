//! Electronic document model, IVA arithmetic, and validation.
//!
//! This module provides the document types FacturaSend expects on the wire,
//! builders for assembling them, and the tax-inclusive IVA split the
//! provider's validator mandates.

mod builder;
mod error;
pub mod iva;
mod numbering;
pub mod ruc;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use numbering::*;
pub use ruc::validar_ruc;
pub use types::*;
pub use validation::*;
