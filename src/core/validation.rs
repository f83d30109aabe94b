use super::error::ValidationError;
use super::iva;
use super::numbering::NUMERO_MAX;
use super::ruc::validar_ruc;
use super::types::*;

/// Validates a document against the structural rules the provider's
/// validator enforces. Returns all errors found (not just the first).
pub fn validar_documento(doc: &Documento) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if doc.numero == 0 || doc.numero > NUMERO_MAX {
        errors.push(ValidationError::new(
            "numero",
            format!("debe estar entre 1 y {NUMERO_MAX}"),
        ));
    }
    if doc.establecimiento == 0 || doc.establecimiento > 999 {
        errors.push(ValidationError::new(
            "establecimiento",
            "debe estar entre 1 y 999",
        ));
    }
    if doc.punto == 0 || doc.punto > 999 {
        errors.push(ValidationError::new("punto", "debe estar entre 1 y 999"));
    }
    if doc.moneda.len() != 3 {
        errors.push(ValidationError::new(
            "moneda",
            "debe ser un código ISO 4217 de 3 letras",
        ));
    }

    validar_cliente(&doc.cliente, &mut errors);

    if doc.usuario.nombre.trim().is_empty() {
        errors.push(ValidationError::new("usuario.nombre", "no puede estar vacío"));
    }
    if doc.usuario.documento_numero.trim().is_empty() {
        errors.push(ValidationError::new(
            "usuario.documentoNumero",
            "no puede estar vacío",
        ));
    }

    if doc.items.is_empty() {
        errors.push(ValidationError::new("items", "debe haber al menos un ítem"));
    }

    let mut total_items: i64 = 0;
    for (i, item) in doc.items.iter().enumerate() {
        validar_item(item, i, &mut errors);
        match iva::desglosar_item(item.precio_unitario, item.cantidad, item.iva_tipo, item.iva) {
            Ok(desglose) => total_items += desglose.total,
            Err(e) => errors.push(ValidationError::new(format!("items[{i}]"), e.to_string())),
        }
    }

    // Contado operations must declare payments covering the item total.
    if doc.condicion.tipo == CondicionTipo::Contado {
        if doc.condicion.entregas.is_empty() {
            errors.push(ValidationError::new(
                "condicion.entregas",
                "una operación al contado necesita al menos una entrega",
            ));
        } else {
            let entregado: i64 = doc.condicion.entregas.iter().map(|e| e.monto).sum();
            if entregado != total_items {
                errors.push(ValidationError::new(
                    "condicion.entregas",
                    format!("las entregas ({entregado}) no cubren el total de los ítems ({total_items})"),
                ));
            }
        }
    }

    errors
}

fn validar_cliente(cliente: &Cliente, errors: &mut Vec<ValidationError>) {
    if cliente.razon_social.trim().is_empty() {
        errors.push(ValidationError::new(
            "cliente.razonSocial",
            "no puede estar vacía",
        ));
    }

    if cliente.contribuyente {
        match &cliente.ruc {
            None => errors.push(ValidationError::new(
                "cliente.ruc",
                "un contribuyente necesita RUC",
            )),
            Some(ruc) => {
                if let Err(e) = validar_ruc(ruc) {
                    errors.push(ValidationError::new("cliente.ruc", e.reason));
                }
            }
        }
    }
}

fn validar_item(item: &Item, i: usize, errors: &mut Vec<ValidationError>) {
    if item.descripcion.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("items[{i}].descripcion"),
            "no puede estar vacía",
        ));
    }
    if item.cantidad <= rust_decimal::Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("items[{i}].cantidad"),
            "debe ser mayor que cero",
        ));
    }
    if item.precio_unitario < 0 {
        errors.push(ValidationError::new(
            format!("items[{i}].precioUnitario"),
            "no puede ser negativo",
        ));
    }
}
