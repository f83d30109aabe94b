//! RUC format validation and check digit (módulo 11, SET).

use std::fmt;

/// Error returned when a RUC fails format or check-digit validation.
#[derive(Debug, Clone)]
pub struct RucFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for RucFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RUC inválido '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for RucFormatError {}

fn error(value: &str, reason: impl Into<String>) -> RucFormatError {
    RucFormatError {
        value: value.into(),
        reason: reason.into(),
    }
}

/// Check digit of a RUC base number (módulo 11, weights 2.. from the
/// rightmost digit, restarting after 11).
///
/// Verified against issued RUCs: base `4220058` ⇒ `0`.
pub fn digito_verificador(base: &str) -> Result<u8, RucFormatError> {
    if base.is_empty() || base.len() > 8 {
        return Err(error(base, "la base debe tener entre 1 y 8 dígitos"));
    }
    if !base.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error(base, "la base solo puede contener dígitos"));
    }

    let mut factor: u32 = 2;
    let mut suma: u32 = 0;
    for b in base.bytes().rev() {
        suma += u32::from(b - b'0') * factor;
        factor += 1;
        if factor > 11 {
            factor = 2;
        }
    }

    let resto = suma % 11;
    Ok(if resto > 1 { (11 - resto) as u8 } else { 0 })
}

/// Validates a RUC with its check digit (e.g. "80012345-0").
///
/// Returns the (base, check digit) split on success.
pub fn validar_ruc(ruc: &str) -> Result<(&str, u8), RucFormatError> {
    let ruc = ruc.trim();
    let Some((base, dv)) = ruc.split_once('-') else {
        return Err(error(ruc, "falta el dígito verificador (formato NNNNNNNN-D)"));
    };

    if dv.len() != 1 || !dv.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error(ruc, "el dígito verificador debe ser un único dígito"));
    }
    let dv: u8 = dv.as_bytes()[0] - b'0';

    let esperado =
        digito_verificador(base).map_err(|e| error(ruc, e.reason))?;
    if dv != esperado {
        return Err(error(
            ruc,
            format!("dígito verificador {dv} no coincide (se esperaba {esperado})"),
        ));
    }

    Ok((base, dv))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dv_conocidos() {
        assert_eq!(digito_verificador("4220058").unwrap(), 0);
        assert_eq!(digito_verificador("80012345").unwrap(), 0);
        assert_eq!(digito_verificador("1234567").unwrap(), 9);
    }

    #[test]
    fn dv_base_invalida() {
        assert!(digito_verificador("").is_err());
        assert!(digito_verificador("123456789").is_err());
        assert!(digito_verificador("12A4567").is_err());
    }

    #[test]
    fn ruc_valido() {
        let (base, dv) = validar_ruc("4220058-0").unwrap();
        assert_eq!(base, "4220058");
        assert_eq!(dv, 0);
    }

    #[test]
    fn ruc_con_espacios() {
        assert!(validar_ruc("  1234567-9  ").is_ok());
    }

    #[test]
    fn ruc_sin_guion() {
        let err = validar_ruc("4220058").unwrap_err();
        assert!(err.reason.contains("dígito verificador"));
    }

    #[test]
    fn ruc_dv_incorrecto() {
        let err = validar_ruc("4220058-5").unwrap_err();
        assert!(err.reason.contains("se esperaba 0"));
    }

    #[test]
    fn error_display() {
        let err = validar_ruc("xx").unwrap_err();
        assert!(err.to_string().contains("xx"));
        assert!(err.to_string().contains("inválido"));
    }
}
