//! IVA arithmetic for tax-inclusive prices at the general 10% rate.
//!
//! All wire amounts are whole guaraníes. The split of a tax-inclusive total
//! is `iva = round(total / 11)`, the form FacturaSend's validator accepts;
//! it equals `round(total × 0.10 / 1.10)` under exact arithmetic. Both the
//! document builder and the payload projection call these functions, so the
//! two can never disagree.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::FacturaError;
use super::types::IvaTipo;

/// General IVA rate (Ley 6380/19), percent.
pub const TASA_GENERAL: u8 = 10;

/// IVA base/amount pair; `base + iva` is the tax-inclusive total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesgloseIva {
    pub base: i64,
    pub iva: i64,
}

impl DesgloseIva {
    pub fn total(&self) -> i64 {
        self.base + self.iva
    }
}

/// Resolved amounts for one line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesgloseItem {
    /// `trunc(precio_unitario × cantidad)`.
    pub total: i64,
    pub base: i64,
    pub iva: i64,
}

/// Converts an amount in a foreign (or local) currency to whole guaraníes:
/// `round(monto × tipo_cambio)`, half away from zero.
pub fn monto_guaranies(monto: Decimal, tipo_cambio: Decimal) -> Result<i64, FacturaError> {
    let bruto = monto.checked_mul(tipo_cambio).ok_or_else(|| {
        FacturaError::Aritmetica(format!("desborde al convertir {monto} con TC {tipo_cambio}"))
    })?;
    if bruto.is_sign_negative() && !bruto.is_zero() {
        return Err(FacturaError::Aritmetica(format!(
            "monto negativo: {bruto}"
        )));
    }
    bruto
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| FacturaError::Aritmetica(format!("monto fuera de rango: {bruto}")))
}

/// IVA component of a tax-inclusive total at 10%: `round(total / 11)`.
///
/// For whole-guaraní totals the quotient can never land exactly on .5
/// (the fractional part is always k/11), so no rounding-mode ambiguity
/// exists.
pub fn iva_incluido_10(total: i64) -> i64 {
    let t = i128::from(total);
    ((2 * t + 11).div_euclid(22)) as i64
}

/// Splits a tax-inclusive total into base and IVA at the general rate.
pub fn desglosar_gravado_10(total: i64) -> DesgloseIva {
    let iva = iva_incluido_10(total);
    DesgloseIva {
        base: total - iva,
        iva,
    }
}

/// Resolves the amounts of one line item.
///
/// `total = trunc(precio_unitario × cantidad)`. An explicit IVA amount is
/// truncated to whole guaraníes and wins over `iva_tipo`; otherwise
/// Gravado10 items derive `round(total / 11)` and every other affectation
/// carries zero IVA. `base = total - iva` in all cases.
pub fn desglosar_item(
    precio_unitario: i64,
    cantidad: Decimal,
    iva_tipo: IvaTipo,
    iva_explicito: Option<Decimal>,
) -> Result<DesgloseItem, FacturaError> {
    let total = Decimal::from(precio_unitario)
        .checked_mul(cantidad)
        .ok_or_else(|| {
            FacturaError::Aritmetica(format!(
                "desborde en {precio_unitario} × {cantidad}"
            ))
        })?
        .trunc()
        .to_i64()
        .ok_or_else(|| {
            FacturaError::Aritmetica(format!(
                "total de ítem fuera de rango: {precio_unitario} × {cantidad}"
            ))
        })?;

    let iva = match iva_explicito {
        Some(monto) => monto.trunc().to_i64().ok_or_else(|| {
            FacturaError::Aritmetica(format!("IVA explícito fuera de rango: {monto}"))
        })?,
        None if iva_tipo == IvaTipo::Gravado10 => iva_incluido_10(total),
        None => 0,
    };

    Ok(DesgloseItem {
        total,
        base: total - iva,
        iva,
    })
}
