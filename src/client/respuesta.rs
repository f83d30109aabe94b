//! Batch response model and its interpretation.

use serde::{Deserialize, Serialize};

/// Status string the provider reports for a generated document.
pub const ESTADO_GENERADO: &str = "0-Generado";

/// Raw response of `/lote/create`, returned verbatim by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<LoteResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
}

/// Successful batch payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoteResult {
    #[serde(rename = "deList", default)]
    pub de_list: Vec<De>,
    #[serde(rename = "loteId", skip_serializing_if = "Option::is_none")]
    pub lote_id: Option<i64>,
}

/// One generated electronic document within the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct De {
    /// Control code assigned by the tax authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdc: Option<String>,
    /// QR payload for the printed representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr: Option<String>,
    /// Provider status string (e.g. "0-Generado").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respuesta_mensaje: Option<String>,
}

/// Two-value outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estado {
    Aceptado,
    Rechazado,
}

/// Interpreted submission outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultadoEnvio {
    pub estado: Estado,
    pub cdc: Option<String>,
    pub qr: Option<String>,
    pub mensaje: String,
}

impl ResultadoEnvio {
    pub fn aceptado(&self) -> bool {
        self.estado == Estado::Aceptado
    }
}

/// Maps a raw batch response to an accepted/rejected outcome.
///
/// A response without `success` or without a generated document is rejected
/// with the provider's explanation (`error`, then `mensaje`, then "Error").
/// Otherwise the first entry decides: "0-Generado" or a present CDC means
/// accepted; the message falls back to "Procesado".
pub fn interpretar_respuesta(respuesta: &LoteResponse) -> ResultadoEnvio {
    let de = if respuesta.success {
        respuesta.result.as_ref().and_then(|r| r.de_list.first())
    } else {
        None
    };

    let Some(de) = de else {
        return ResultadoEnvio {
            estado: Estado::Rechazado,
            cdc: None,
            qr: None,
            mensaje: respuesta
                .error
                .clone()
                .or_else(|| respuesta.mensaje.clone())
                .unwrap_or_else(|| "Error".into()),
        };
    };

    let generado = de.estado.as_deref() == Some(ESTADO_GENERADO) || de.cdc.is_some();
    ResultadoEnvio {
        estado: if generado {
            Estado::Aceptado
        } else {
            Estado::Rechazado
        },
        cdc: de.cdc.clone(),
        qr: de.qr.clone(),
        mensaje: de
            .respuesta_mensaje
            .clone()
            .unwrap_or_else(|| "Procesado".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn de(cdc: Option<&str>, estado: Option<&str>) -> LoteResponse {
        LoteResponse {
            success: true,
            result: Some(LoteResult {
                de_list: vec![De {
                    cdc: cdc.map(Into::into),
                    qr: None,
                    estado: estado.map(Into::into),
                    respuesta_mensaje: None,
                }],
                lote_id: Some(1),
            }),
            error: None,
            mensaje: None,
        }
    }

    #[test]
    fn fallo_del_proveedor() {
        let resultado = interpretar_respuesta(&LoteResponse {
            success: false,
            result: None,
            error: Some("RUC inexistente".into()),
            mensaje: None,
        });
        assert_eq!(resultado.estado, Estado::Rechazado);
        assert_eq!(resultado.mensaje, "RUC inexistente");
    }

    #[test]
    fn estado_generado_acepta() {
        let resultado = interpretar_respuesta(&de(Some("123"), Some(ESTADO_GENERADO)));
        assert!(resultado.aceptado());
        assert_eq!(resultado.cdc.as_deref(), Some("123"));
        assert_eq!(resultado.mensaje, "Procesado");
    }

    #[test]
    fn cdc_sin_estado_acepta() {
        let resultado = interpretar_respuesta(&de(Some("123"), None));
        assert!(resultado.aceptado());
    }

    #[test]
    fn rechazado_sin_cdc() {
        let resultado = interpretar_respuesta(&de(None, Some("1-Rechazado")));
        assert_eq!(resultado.estado, Estado::Rechazado);
    }

    #[test]
    fn de_list_vacia_rechaza() {
        let respuesta = LoteResponse {
            success: true,
            result: Some(LoteResult {
                de_list: vec![],
                lote_id: None,
            }),
            error: None,
            mensaje: Some("lote vacío".into()),
        };
        let resultado = interpretar_respuesta(&respuesta);
        assert_eq!(resultado.estado, Estado::Rechazado);
        assert_eq!(resultado.mensaje, "lote vacío");
    }

    #[test]
    fn mensaje_por_defecto() {
        let resultado = interpretar_respuesta(&LoteResponse {
            success: false,
            result: None,
            error: None,
            mensaje: None,
        });
        assert_eq!(resultado.mensaje, "Error");
    }

    #[test]
    fn respuesta_deserializa() {
        let json = r#"{"success":true,"result":{"deList":[{"cdc":"0144...","qr":"https://ekuatia.set.gov.py/consultas/qr?nVersion=150","estado":"0-Generado","respuesta_mensaje":"Aprobado"}],"loteId":42}}"#;
        let respuesta: LoteResponse = serde_json::from_str(json).unwrap();
        let resultado = interpretar_respuesta(&respuesta);
        assert!(resultado.aceptado());
        assert_eq!(resultado.mensaje, "Aprobado");
    }
}
