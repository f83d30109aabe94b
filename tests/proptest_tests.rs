//! Property-based tests for the IVA arithmetic and RUC check digit.

use facturasend::core::{IvaTipo, iva, ruc};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// base + iva recompone el total exactamente, para cualquier total.
    #[test]
    fn desglose_cierra(total in 0i64..1_000_000_000_000i64) {
        let d = iva::desglosar_gravado_10(total);
        prop_assert_eq!(d.base + d.iva, total);
        prop_assert!(d.iva >= 0);
        prop_assert!(d.iva <= total);
    }

    /// El IVA es la undécima parte redondeada: |11·iva − total| ≤ 5.
    #[test]
    fn iva_es_la_undecima_parte(total in 0i64..1_000_000_000_000i64) {
        let iva = iva::iva_incluido_10(total);
        prop_assert!((iva * 11 - total).abs() <= 5);
    }

    /// Conversión a guaraníes seguida del desglose siempre cierra.
    #[test]
    fn conversion_y_desglose_cierran(
        centavos in 0i64..10_000_000_000i64,
        tc in 1u32..20_000u32,
    ) {
        let monto = Decimal::new(centavos, 2);
        let total = iva::monto_guaranies(monto, Decimal::from(tc)).unwrap();
        let d = iva::desglosar_gravado_10(total);
        prop_assert_eq!(d.base + d.iva, total);
    }

    /// Un IVA explícito se trunca a guaraníes enteros, sin importar el tipo.
    #[test]
    fn iva_explicito_se_trunca(
        precio in 0i64..1_000_000_000i64,
        iva_centavos in 0i64..100_000_000i64,
    ) {
        let explicito = Decimal::new(iva_centavos, 2);
        for tipo in [IvaTipo::Gravado10, IvaTipo::Exento] {
            let d = iva::desglosar_item(precio, Decimal::ONE, tipo, Some(explicito)).unwrap();
            prop_assert_eq!(d.iva, iva_centavos / 100);
            prop_assert_eq!(d.base + d.iva, d.total);
        }
    }

    /// Sin monto explícito, solo Gravado10 deriva IVA.
    #[test]
    fn solo_gravado_deriva_iva(
        precio in 0i64..1_000_000_000i64,
        cantidad in 1u32..1_000u32,
    ) {
        let cantidad = Decimal::from(cantidad);
        for tipo in [IvaTipo::Exonerado, IvaTipo::Exento, IvaTipo::GravadoParcial] {
            let d = iva::desglosar_item(precio, cantidad, tipo, None).unwrap();
            prop_assert_eq!(d.iva, 0);
            prop_assert_eq!(d.base, d.total);
        }

        let d = iva::desglosar_item(precio, cantidad, IvaTipo::Gravado10, None).unwrap();
        prop_assert_eq!(d.iva, iva::iva_incluido_10(d.total));
    }

    /// El dígito verificador calculado valida su propio RUC.
    #[test]
    fn dv_valida_su_ruc(base in 1u64..100_000_000u64) {
        let base = base.to_string();
        let dv = ruc::digito_verificador(&base).unwrap();
        prop_assert!(dv <= 9);
        let completo = format!("{base}-{dv}");
        prop_assert!(ruc::validar_ruc(&completo).is_ok());
    }
}
