//! HTTP client for the FacturaSend batch API.
//!
//! Projects documents onto the provider's JSON schema, submits them to
//! `/lote/create`, and interprets the response into an accepted/rejected
//! outcome.
//!
//! # Example
//!
//! ```ignore
//! use facturasend::client::*;
//!
//! let config = FacturaSendConfig::from_env()?;
//! let cliente = ClienteFacturaSend::new(config)?;
//!
//! let respuesta = cliente.enviar_documento(&documento).await?;
//! let resultado = interpretar_respuesta(&respuesta);
//! if resultado.aceptado() {
//!     println!("CDC: {}", resultado.cdc.unwrap());
//! }
//! ```

mod config;
mod envio;
mod payload;
mod respuesta;

pub use config::{ENV_API_KEY, ENV_BASE_URL, FacturaSendConfig};
pub use envio::{ClienteFacturaSend, EnvioError};
pub use payload::{DocumentoPayload, ItemPayload};
pub use respuesta::{
    De, ESTADO_GENERADO, Estado, LoteResponse, LoteResult, ResultadoEnvio, interpretar_respuesta,
};
