//! Projection of a [`Documento`] onto the provider's JSON schema.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{
    Cliente, Condicion, Documento, Factura, FacturaError, Item, IvaTipo, TipoDocumento,
    TipoEmision, TipoImpuesto, TipoTransaccion, Usuario, fecha_sifen, iva,
};

/// dPropIVA: every item is declared fully taxed.
const IVA_PROPORCION: u8 = 100;

/// One document as it goes over the wire, with every item's IVA split
/// resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentoPayload {
    pub tipo_documento: TipoDocumento,
    pub establecimiento: u16,
    pub punto: u16,
    pub numero: u32,
    #[serde(with = "fecha_sifen")]
    pub fecha: NaiveDateTime,
    pub tipo_emision: TipoEmision,
    pub tipo_transaccion: TipoTransaccion,
    pub tipo_impuesto: TipoImpuesto,
    pub moneda: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion: Option<String>,
    pub cliente: Cliente,
    pub usuario: Usuario,
    pub factura: Factura,
    pub condicion: Condicion,
    pub items: Vec<ItemPayload>,
}

/// One line item on the wire, IVA base/amount resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub descripcion: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub cantidad: Decimal,
    pub unidad_medida: u16,
    pub precio_unitario: i64,
    pub iva_tipo: IvaTipo,
    pub iva_base: i64,
    pub iva: i64,
    pub iva_proporcion: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
}

impl DocumentoPayload {
    /// Shapes a document for submission, re-resolving every item's IVA
    /// split through [`iva::desglosar_item`].
    pub fn desde_documento(doc: &Documento) -> Result<Self, FacturaError> {
        let items = doc
            .items
            .iter()
            .map(item_payload)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            tipo_documento: doc.tipo_documento,
            establecimiento: doc.establecimiento,
            punto: doc.punto,
            numero: doc.numero,
            fecha: doc.fecha,
            tipo_emision: doc.tipo_emision,
            tipo_transaccion: doc.tipo_transaccion,
            tipo_impuesto: doc.tipo_impuesto,
            moneda: doc.moneda.clone(),
            observacion: doc.observacion.clone(),
            cliente: doc.cliente.clone(),
            usuario: doc.usuario.clone(),
            factura: doc.factura.clone(),
            condicion: doc.condicion.clone(),
            items,
        })
    }
}

fn item_payload(item: &Item) -> Result<ItemPayload, FacturaError> {
    let desglose =
        iva::desglosar_item(item.precio_unitario, item.cantidad, item.iva_tipo, item.iva)?;
    Ok(ItemPayload {
        descripcion: item.descripcion.clone(),
        cantidad: item.cantidad,
        unidad_medida: item.unidad_medida,
        precio_unitario: item.precio_unitario,
        iva_tipo: item.iva_tipo,
        iva_base: desglose.base,
        iva: desglose.iva,
        iva_proporcion: IVA_PROPORCION,
        codigo: item.codigo.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClienteBuilder, Condicion, DocumentoBuilder, ItemBuilder, MedioPago};
    use rust_decimal_macros::dec;

    fn documento() -> Documento {
        let fecha = chrono::NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        DocumentoBuilder::new(7, fecha)
            .cliente(ClienteBuilder::new("Cliente").ruc("1234567-9").build())
            .usuario(Usuario::new("1234567", "Juan", "Contador"))
            .condicion(Condicion::contado(MedioPago::Efectivo, 110_000))
            .add_item(ItemBuilder::new("Servicios", dec!(1), 110_000).build())
            .build()
            .unwrap()
    }

    #[test]
    fn resuelve_iva_por_item() {
        let payload = DocumentoPayload::desde_documento(&documento()).unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].iva, 10_000);
        assert_eq!(payload.items[0].iva_base, 100_000);
        assert_eq!(payload.items[0].iva_proporcion, 100);
    }

    #[test]
    fn codigo_ausente_no_se_serializa() {
        let payload = DocumentoPayload::desde_documento(&documento()).unwrap();
        let json = serde_json::to_string(&payload.items[0]).unwrap();
        assert!(!json.contains("codigo"));
    }

    #[test]
    fn campos_en_camel_case() {
        let payload = DocumentoPayload::desde_documento(&documento()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["tipoDocumento"], 1);
        assert_eq!(value["fecha"], "2025-03-14T10:30:00");
        assert_eq!(value["cliente"]["razonSocial"], "Cliente");
        assert_eq!(value["cliente"]["paisDescripcion"], "Paraguay");
        assert_eq!(value["items"][0]["ivaBase"], 100_000);
        assert_eq!(value["items"][0]["unidadMedida"], 77);
        assert_eq!(value["condicion"]["entregas"][0]["tipo"], 1);
    }
}
