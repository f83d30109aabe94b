use facturasend::core::IvaTipo;
use facturasend::core::iva::*;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Conversión a guaraníes
// ---------------------------------------------------------------------------

#[test]
fn redondea_al_guarani_mas_cercano() {
    assert_eq!(monto_guaranies(dec!(100.4), dec!(1)).unwrap(), 100);
    assert_eq!(monto_guaranies(dec!(100.6), dec!(1)).unwrap(), 101);
}

#[test]
fn medio_guarani_sube() {
    assert_eq!(monto_guaranies(dec!(0.5), dec!(1)).unwrap(), 1);
    assert_eq!(monto_guaranies(dec!(100.5), dec!(1)).unwrap(), 101);
}

#[test]
fn aplica_tipo_de_cambio() {
    assert_eq!(monto_guaranies(dec!(100.00), dec!(7300)).unwrap(), 730_000);
    assert_eq!(monto_guaranies(dec!(137.50), dec!(7300)).unwrap(), 1_003_750);
}

#[test]
fn cero_es_cero() {
    assert_eq!(monto_guaranies(dec!(0), dec!(7300)).unwrap(), 0);
}

#[test]
fn rechaza_negativos() {
    assert!(monto_guaranies(dec!(-0.01), dec!(1)).is_err());
    assert!(monto_guaranies(dec!(1), dec!(-7300)).is_err());
}

// ---------------------------------------------------------------------------
// IVA incluido al 10%
// ---------------------------------------------------------------------------

#[test]
fn caso_de_referencia() {
    // 100000 × 0.10 / 1.10 = 100000 / 11 = 9090.90… → 9091
    assert_eq!(iva_incluido_10(100_000), 9_091);
    let d = desglosar_gravado_10(100_000);
    assert_eq!(d.iva, 9_091);
    assert_eq!(d.base, 90_909);
    assert_eq!(d.total(), 100_000);
}

#[test]
fn division_exacta() {
    assert_eq!(iva_incluido_10(1_003_750), 91_250);
    assert_eq!(iva_incluido_10(11), 1);
    assert_eq!(iva_incluido_10(110_000), 10_000);
}

#[test]
fn totales_minimos() {
    assert_eq!(iva_incluido_10(0), 0);
    assert_eq!(iva_incluido_10(1), 0);
    assert_eq!(iva_incluido_10(5), 0);
    assert_eq!(iva_incluido_10(6), 1);
}

#[test]
fn desglose_siempre_cierra() {
    for total in [0, 1, 7, 11, 12, 999, 54_321, 100_000, 9_876_543_210] {
        let d = desglosar_gravado_10(total);
        assert_eq!(d.base + d.iva, total, "total {total}");
    }
}

// ---------------------------------------------------------------------------
// Desglose por ítem
// ---------------------------------------------------------------------------

#[test]
fn item_gravado_deriva_del_total() {
    let d = desglosar_item(110_000, dec!(1), IvaTipo::Gravado10, None).unwrap();
    assert_eq!(d.total, 110_000);
    assert_eq!(d.iva, 10_000);
    assert_eq!(d.base, 100_000);
}

#[test]
fn item_trunca_el_producto() {
    // 333 × 1.5 = 499.5 → 499
    let d = desglosar_item(333, dec!(1.5), IvaTipo::Gravado10, None).unwrap();
    assert_eq!(d.total, 499);
    assert_eq!(d.iva, 45);
    assert_eq!(d.base, 454);
}

#[test]
fn iva_explicito_se_trunca_y_gana() {
    // El monto explícito manda aunque el tipo no sea gravado
    let d = desglosar_item(1_000, dec!(1), IvaTipo::Exento, Some(dec!(90.9))).unwrap();
    assert_eq!(d.iva, 90);
    assert_eq!(d.base, 910);

    let d = desglosar_item(1_000, dec!(1), IvaTipo::Gravado10, Some(dec!(0))).unwrap();
    assert_eq!(d.iva, 0);
    assert_eq!(d.base, 1_000);
}

#[test]
fn sin_explicito_y_no_gravado_es_cero() {
    for tipo in [IvaTipo::Exonerado, IvaTipo::Exento, IvaTipo::GravadoParcial] {
        let d = desglosar_item(47_500, dec!(3), tipo, None).unwrap();
        assert_eq!(d.iva, 0, "{tipo:?}");
        assert_eq!(d.base, 142_500);
    }
}

#[test]
fn cantidades_fraccionarias() {
    // 12345 × 2.25 = 27776.25 → 27776
    let d = desglosar_item(12_345, dec!(2.25), IvaTipo::Gravado10, None).unwrap();
    assert_eq!(d.total, 27_776);
    assert_eq!(d.base + d.iva, 27_776);
}

// ---------------------------------------------------------------------------
// Extremo a extremo: monto en divisa → desglose
// ---------------------------------------------------------------------------

#[test]
fn conversion_y_desglose_coinciden() {
    let casos = [
        (dec!(100000.00), dec!(1)),
        (dec!(137.50), dec!(7300)),
        (dec!(0.01), dec!(7421)),
        (dec!(99999.99), dec!(7350.5)),
    ];
    for (monto, tc) in casos {
        let total = monto_guaranies(monto, tc).unwrap();
        let d = desglosar_gravado_10(total);
        assert_eq!(d.base + d.iva, total, "monto {monto} tc {tc}");
    }
}
