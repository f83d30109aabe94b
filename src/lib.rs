//! # facturasend
//!
//! Client library for FacturaSend, the e-invoicing provider for Paraguay's
//! SIFEN system: document construction, tax-inclusive IVA arithmetic, batch
//! submission, and response interpretation.
//!
//! Guaraní amounts are whole integers (PYG has no subunits). Fractional
//! inputs such as exchange rates and quantities use
//! [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use facturasend::core::*;
//! use rust_decimal_macros::dec;
//!
//! let fecha = NaiveDate::from_ymd_opt(2025, 3, 14)
//!     .unwrap()
//!     .and_hms_opt(10, 30, 0)
//!     .unwrap();
//!
//! let factura = Documento::factura_simple(
//!     Usuario::new("4220058", "COMERCIAL GUARANÍ S.A.", "Contador"),
//!     ClienteBuilder::new("Cliente S.R.L.").ruc("1234567-9").build(),
//!     "Desarrollo de software - Etapa 1",
//!     dec!(100000.00),
//!     dec!(1),
//!     123,
//!     fecha,
//! )
//! .unwrap();
//!
//! assert_eq!(factura.items[0].precio_unitario, 100_000);
//! assert_eq!(factura.items[0].iva, Some(dec!(9091)));
//! assert_eq!(factura.condicion.entregas[0].monto, 100_000);
//! ```
//!
//! Submission needs the `client` feature and an async runtime; see
//! [`client`].
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, builders, IVA math, RUC validation, numbering |
//! | `client` | HTTP submission to `/lote/create` and response interpretation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
