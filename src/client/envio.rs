//! Batch submission to the FacturaSend API.

use std::fmt;

use crate::core::Documento;

use super::config::FacturaSendConfig;
use super::payload::DocumentoPayload;
use super::respuesta::LoteResponse;

/// Error from a batch submission.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum EnvioError {
    /// No API key configured.
    ApiKeyFaltante,
    /// Incomplete or invalid configuration.
    Configuracion(String),
    /// A document could not be shaped for the wire.
    Documento(String),
    /// The batch could not be serialized.
    Serializacion(String),
    /// Network or HTTP transport error.
    Red(String),
    /// The API answered a non-success status with an uninterpretable body.
    Api(String),
    /// The response body was not valid JSON.
    Parseo(String),
}

impl fmt::Display for EnvioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKeyFaltante => write!(f, "API Key no configurada"),
            Self::Configuracion(e) => write!(f, "configuración inválida: {e}"),
            Self::Documento(e) => write!(f, "documento inválido: {e}"),
            Self::Serializacion(e) => write!(f, "error al serializar el lote: {e}"),
            Self::Red(e) => write!(f, "error de red: {e}"),
            Self::Api(e) => write!(f, "error del API: {e}"),
            Self::Parseo(e) => write!(f, "respuesta ininterpretable: {e}"),
        }
    }
}

impl std::error::Error for EnvioError {}

/// FacturaSend API client.
///
/// Holds one reqwest client; cloning is cheap and concurrent submissions
/// are independent — there is no shared mutable state.
#[derive(Debug, Clone)]
pub struct ClienteFacturaSend {
    http: reqwest::Client,
    config: FacturaSendConfig,
}

impl ClienteFacturaSend {
    pub fn new(config: FacturaSendConfig) -> Result<Self, EnvioError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EnvioError::Configuracion(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Client configured from the process environment.
    pub fn from_env() -> Result<Self, EnvioError> {
        Self::new(FacturaSendConfig::from_env()?)
    }

    /// Submits one document as a single-element batch.
    pub async fn enviar_documento(
        &self,
        documento: &Documento,
    ) -> Result<LoteResponse, EnvioError> {
        self.enviar_lote(std::slice::from_ref(documento)).await
    }

    /// Submits a batch to `/lote/create`, requesting XML and QR generation.
    ///
    /// The API key is checked before anything touches the network. A
    /// provider-level `success: false` is not an error of this function:
    /// the response is returned verbatim for [`super::interpretar_respuesta`]
    /// to map. One atomic best-effort call — no retry.
    pub async fn enviar_lote(
        &self,
        documentos: &[Documento],
    ) -> Result<LoteResponse, EnvioError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(EnvioError::ApiKeyFaltante);
        };

        let lote = documentos
            .iter()
            .map(DocumentoPayload::desde_documento)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| EnvioError::Documento(e.to_string()))?;

        // The remote validator is sensitive to payload formatting: compact
        // body, no incidental whitespace.
        let body =
            serde_json::to_string(&lote).map_err(|e| EnvioError::Serializacion(e.to_string()))?;

        tracing::debug!(
            documentos = documentos.len(),
            payload = %body,
            "enviando lote a FacturaSend"
        );

        let url = format!("{}/lote/create?xml=true&qr=true", self.config.base_url);
        let respuesta = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json; charset=utf-8")
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer api_key_{api_key}"),
            )
            .body(body)
            .send()
            .await
            .map_err(|e| EnvioError::Red(e.to_string()))?;

        let status = respuesta.status();
        let cuerpo = respuesta
            .text()
            .await
            .map_err(|e| EnvioError::Red(e.to_string()))?;

        // The provider encodes failures as `success: false` bodies, also on
        // non-2xx statuses; those parse and are returned as-is.
        match serde_json::from_str::<LoteResponse>(&cuerpo) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => {
                Err(EnvioError::Api(format!("HTTP {status}: {cuerpo}")))
            }
            Err(e) => Err(EnvioError::Parseo(e.to_string())),
        }
    }

    pub fn config(&self) -> &FacturaSendConfig {
        &self.config
    }
}
