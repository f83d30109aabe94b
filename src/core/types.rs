use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// cUniMed 77 — "UNI", the generic unit of measure.
pub const UNIDAD: u16 = 77;

/// A SIFEN electronic document as FacturaSend expects it.
///
/// Field names follow the provider's JSON schema (Spanish camelCase on the
/// wire). Per-item IVA base/amount are not stored here; they are derived at
/// submission time from [`Item::iva`] and [`Item::iva_tipo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documento {
    /// iTiDE: document type code.
    pub tipo_documento: TipoDocumento,
    /// dEst: establishment (branch) number, 1..=999.
    pub establecimiento: u16,
    /// dPunExp: expedition point, 1..=999.
    pub punto: u16,
    /// dNumDoc: sequential document number, 1..=9999999.
    pub numero: u32,
    /// dFeEmiDE: emission date, second precision, no timezone.
    #[serde(with = "fecha_sifen")]
    pub fecha: NaiveDateTime,
    /// iTipEmi: emission type.
    pub tipo_emision: TipoEmision,
    /// iTipTra: transaction type.
    pub tipo_transaccion: TipoTransaccion,
    /// iTImp: tax type affected by the operation.
    pub tipo_impuesto: TipoImpuesto,
    /// cMoneOpe: ISO 4217 operation currency (e.g. "PYG").
    pub moneda: String,
    /// Free-text note (e.g. the exchange rate used).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion: Option<String>,
    /// Receiver of the document.
    pub cliente: Cliente,
    /// Person responsible for the emission.
    pub usuario: Usuario,
    /// Invoice-specific fields.
    pub factura: Factura,
    /// Payment condition.
    pub condicion: Condicion,
    /// Ordered line items.
    pub items: Vec<Item>,
}

/// Receiver (buyer) of the electronic document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    /// iNatRec: true if the receiver is a registered taxpayer.
    pub contribuyente: bool,
    /// dNomRec: legal name.
    pub razon_social: String,
    /// iTiOpe: operation type (B2B, B2C, ...).
    pub tipo_operacion: TipoOperacion,
    /// dDirRec: street address.
    pub direccion: String,
    /// dNumCas: house number ("0" when unknown).
    pub numero_casa: String,
    /// Department / district / city codes and descriptions.
    #[serde(flatten)]
    pub localidad: Localidad,
    /// iTiContRec: taxpayer kind.
    pub tipo_contribuyente: TipoContribuyente,
    /// dRucRec: RUC with check digit ("80012345-0"). Required for
    /// contribuyentes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<String>,
}

/// Geographic codes of the receiver, per the SET reference tables.
///
/// Injected rather than hardcoded so taxpayers outside the capital can be
/// invoiced; [`Localidad::asuncion`] covers the common case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localidad {
    /// cDepRec: department code.
    pub departamento: u16,
    /// dDesDepRec.
    pub departamento_descripcion: String,
    /// cDisRec: district code.
    pub distrito: u16,
    /// dDesDisRec.
    pub distrito_descripcion: String,
    /// cCiuRec: city code.
    pub ciudad: u16,
    /// dDesCiuRec.
    pub ciudad_descripcion: String,
    /// cPaisRec: ISO 3166-1 alpha-3 country code.
    pub pais: String,
    /// dDesPaisRe.
    pub pais_descripcion: String,
}

impl Localidad {
    /// Capital / Asunción, the defaults for domestic operations.
    pub fn asuncion() -> Self {
        Self {
            departamento: 1,
            departamento_descripcion: "CAPITAL".into(),
            distrito: 1,
            distrito_descripcion: "ASUNCION".into(),
            ciudad: 1,
            ciudad_descripcion: "ASUNCION".into(),
            pais: "PRY".into(),
            pais_descripcion: "Paraguay".into(),
        }
    }
}

/// Person responsible for the document emission (the issuing user).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    /// iTipIDRespDE: identity document type.
    pub documento_tipo: DocumentoIdentidad,
    /// dNumIDRespDE: identity document number.
    pub documento_numero: String,
    /// dNomRespDE: full name.
    pub nombre: String,
    /// dCarRespDE: role within the company.
    pub cargo: String,
}

impl Usuario {
    /// Issuer identified by a Paraguayan cédula.
    pub fn new(
        documento_numero: impl Into<String>,
        nombre: impl Into<String>,
        cargo: impl Into<String>,
    ) -> Self {
        Self {
            documento_tipo: DocumentoIdentidad::Cedula,
            documento_numero: documento_numero.into(),
            nombre: nombre.into(),
            cargo: cargo.into(),
        }
    }
}

/// Invoice-only fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factura {
    /// iIndPres: how the buyer was present during the operation.
    pub presencia: TipoPresencia,
}

/// iCondOpe: payment condition of the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condicion {
    pub tipo: CondicionTipo,
    /// Payments covering the operation total (required for contado).
    pub entregas: Vec<Entrega>,
}

impl Condicion {
    /// Cash condition with a single payment covering `monto` guaraníes.
    pub fn contado(medio: MedioPago, monto: i64) -> Self {
        Self {
            tipo: CondicionTipo::Contado,
            entregas: vec![Entrega {
                tipo: medio,
                monto,
                moneda: "PYG".into(),
            }],
        }
    }
}

/// One payment within the condition block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entrega {
    /// iTiPago: payment means code.
    pub tipo: MedioPago,
    /// dMonTiPag: amount in whole currency units.
    pub monto: i64,
    /// cMoneTiPag: ISO 4217 currency of this payment.
    pub moneda: String,
}

/// A line item as provided by the caller.
///
/// The IVA base/amount pair is derived at submission time; `iva` here is an
/// optional explicit override of the derived amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// dDesProSer: description of the good or service.
    pub descripcion: String,
    /// dCantProSer: invoiced quantity.
    pub cantidad: Decimal,
    /// cUniMed: unit of measure code (77 = UNI).
    pub unidad_medida: u16,
    /// dPUniProSer: unit price in whole guaraníes, IVA included.
    pub precio_unitario: i64,
    /// iAfecIVA: IVA affectation of this item.
    pub iva_tipo: IvaTipo,
    /// Explicit IVA amount; truncated to whole guaraníes when present,
    /// otherwise derived from `iva_tipo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iva: Option<Decimal>,
    /// dCodInt: internal item code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
}

// ---------------------------------------------------------------------------
// Code-list enums (SET reference tables). Serialized as their numeric codes.
// ---------------------------------------------------------------------------

/// iTiDE — electronic document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TipoDocumento {
    /// 1 — Factura electrónica.
    FacturaElectronica,
    /// 4 — Autofactura electrónica.
    AutofacturaElectronica,
    /// 5 — Nota de crédito electrónica.
    NotaCreditoElectronica,
    /// 6 — Nota de débito electrónica.
    NotaDebitoElectronica,
    /// 7 — Nota de remisión electrónica.
    NotaRemisionElectronica,
}

impl TipoDocumento {
    pub fn code(&self) -> u8 {
        match self {
            Self::FacturaElectronica => 1,
            Self::AutofacturaElectronica => 4,
            Self::NotaCreditoElectronica => 5,
            Self::NotaDebitoElectronica => 6,
            Self::NotaRemisionElectronica => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::FacturaElectronica),
            4 => Some(Self::AutofacturaElectronica),
            5 => Some(Self::NotaCreditoElectronica),
            6 => Some(Self::NotaDebitoElectronica),
            7 => Some(Self::NotaRemisionElectronica),
            _ => None,
        }
    }
}

impl From<TipoDocumento> for u8 {
    fn from(t: TipoDocumento) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for TipoDocumento {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("tipo de documento desconocido: {code}"))
    }
}

/// iTipEmi — emission type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TipoEmision {
    /// 1 — Normal.
    Normal,
    /// 2 — Contingencia.
    Contingencia,
}

impl TipoEmision {
    pub fn code(&self) -> u8 {
        match self {
            Self::Normal => 1,
            Self::Contingencia => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Normal),
            2 => Some(Self::Contingencia),
            _ => None,
        }
    }
}

impl From<TipoEmision> for u8 {
    fn from(t: TipoEmision) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for TipoEmision {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("tipo de emisión desconocido: {code}"))
    }
}

/// iTipTra — transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum TipoTransaccion {
    /// 1 — Venta de mercadería.
    VentaMercaderia,
    /// 2 — Prestación de servicios.
    PrestacionServicios,
    /// 3 — Mixto.
    Mixto,
    /// 4 — Venta de activo fijo.
    VentaActivoFijo,
    /// Any other code from the reference table.
    Otro(u8),
}

impl TipoTransaccion {
    pub fn code(&self) -> u8 {
        match self {
            Self::VentaMercaderia => 1,
            Self::PrestacionServicios => 2,
            Self::Mixto => 3,
            Self::VentaActivoFijo => 4,
            Self::Otro(c) => *c,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::VentaMercaderia,
            2 => Self::PrestacionServicios,
            3 => Self::Mixto,
            4 => Self::VentaActivoFijo,
            c => Self::Otro(c),
        }
    }
}

impl From<TipoTransaccion> for u8 {
    fn from(t: TipoTransaccion) -> u8 {
        t.code()
    }
}

impl From<u8> for TipoTransaccion {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

/// iTImp — tax type affected by the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TipoImpuesto {
    /// 1 — IVA.
    Iva,
    /// 2 — ISC.
    Isc,
    /// 3 — Renta.
    Renta,
    /// 4 — Ninguno.
    Ninguno,
    /// 5 — IVA-Renta.
    IvaRenta,
}

impl TipoImpuesto {
    pub fn code(&self) -> u8 {
        match self {
            Self::Iva => 1,
            Self::Isc => 2,
            Self::Renta => 3,
            Self::Ninguno => 4,
            Self::IvaRenta => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Iva),
            2 => Some(Self::Isc),
            3 => Some(Self::Renta),
            4 => Some(Self::Ninguno),
            5 => Some(Self::IvaRenta),
            _ => None,
        }
    }
}

impl From<TipoImpuesto> for u8 {
    fn from(t: TipoImpuesto) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for TipoImpuesto {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("tipo de impuesto desconocido: {code}"))
    }
}

/// iTiOpe — nature of the operation with respect to the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TipoOperacion {
    /// 1 — B2B.
    B2B,
    /// 2 — B2C.
    B2C,
    /// 3 — B2G.
    B2G,
    /// 4 — B2F.
    B2F,
}

impl TipoOperacion {
    pub fn code(&self) -> u8 {
        match self {
            Self::B2B => 1,
            Self::B2C => 2,
            Self::B2G => 3,
            Self::B2F => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::B2B),
            2 => Some(Self::B2C),
            3 => Some(Self::B2G),
            4 => Some(Self::B2F),
            _ => None,
        }
    }
}

impl From<TipoOperacion> for u8 {
    fn from(t: TipoOperacion) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for TipoOperacion {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("tipo de operación desconocido: {code}"))
    }
}

/// iTiContRec — taxpayer kind of the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TipoContribuyente {
    /// 1 — Persona física.
    PersonaFisica,
    /// 2 — Persona jurídica.
    PersonaJuridica,
}

impl TipoContribuyente {
    pub fn code(&self) -> u8 {
        match self {
            Self::PersonaFisica => 1,
            Self::PersonaJuridica => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::PersonaFisica),
            2 => Some(Self::PersonaJuridica),
            _ => None,
        }
    }
}

impl From<TipoContribuyente> for u8 {
    fn from(t: TipoContribuyente) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for TipoContribuyente {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("tipo de contribuyente desconocido: {code}"))
    }
}

/// iTipIDRespDE — identity document of the responsible user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DocumentoIdentidad {
    /// 1 — Cédula paraguaya.
    Cedula,
    /// 2 — Pasaporte.
    Pasaporte,
    /// 3 — Cédula extranjera.
    CedulaExtranjera,
    /// 4 — Carnet de residencia.
    CarnetResidencia,
}

impl DocumentoIdentidad {
    pub fn code(&self) -> u8 {
        match self {
            Self::Cedula => 1,
            Self::Pasaporte => 2,
            Self::CedulaExtranjera => 3,
            Self::CarnetResidencia => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Cedula),
            2 => Some(Self::Pasaporte),
            3 => Some(Self::CedulaExtranjera),
            4 => Some(Self::CarnetResidencia),
            _ => None,
        }
    }
}

impl From<DocumentoIdentidad> for u8 {
    fn from(t: DocumentoIdentidad) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for DocumentoIdentidad {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("documento de identidad desconocido: {code}"))
    }
}

/// iIndPres — presence indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TipoPresencia {
    /// 1 — Operación presencial.
    Presencial,
    /// 2 — Operación electrónica.
    Electronica,
    /// 3 — Operación telemarketing.
    Telemarketing,
    /// 4 — Venta a domicilio.
    VentaADomicilio,
    /// 5 — Operación bancaria.
    Bancaria,
    /// 6 — Operación cíclica.
    Ciclica,
    /// 9 — Otro.
    Otro,
}

impl TipoPresencia {
    pub fn code(&self) -> u8 {
        match self {
            Self::Presencial => 1,
            Self::Electronica => 2,
            Self::Telemarketing => 3,
            Self::VentaADomicilio => 4,
            Self::Bancaria => 5,
            Self::Ciclica => 6,
            Self::Otro => 9,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Presencial),
            2 => Some(Self::Electronica),
            3 => Some(Self::Telemarketing),
            4 => Some(Self::VentaADomicilio),
            5 => Some(Self::Bancaria),
            6 => Some(Self::Ciclica),
            9 => Some(Self::Otro),
            _ => None,
        }
    }
}

impl From<TipoPresencia> for u8 {
    fn from(t: TipoPresencia) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for TipoPresencia {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("indicador de presencia desconocido: {code}"))
    }
}

/// iCondOpe — payment condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CondicionTipo {
    /// 1 — Contado.
    Contado,
    /// 2 — Crédito.
    Credito,
}

impl CondicionTipo {
    pub fn code(&self) -> u8 {
        match self {
            Self::Contado => 1,
            Self::Credito => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Contado),
            2 => Some(Self::Credito),
            _ => None,
        }
    }
}

impl From<CondicionTipo> for u8 {
    fn from(t: CondicionTipo) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for CondicionTipo {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("condición de operación desconocida: {code}"))
    }
}

/// iTiPago — payment means codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum MedioPago {
    /// 1 — Efectivo.
    Efectivo,
    /// 2 — Cheque.
    Cheque,
    /// 3 — Tarjeta de crédito.
    TarjetaCredito,
    /// 4 — Tarjeta de débito.
    TarjetaDebito,
    /// 5 — Transferencia.
    Transferencia,
    /// 6 — Giro.
    Giro,
    /// 7 — Billetera electrónica.
    BilleteraElectronica,
    /// 8 — Tarjeta empresarial.
    TarjetaEmpresarial,
    /// 9 — Vale.
    Vale,
    /// Other code value.
    Otro(u8),
}

impl MedioPago {
    pub fn code(&self) -> u8 {
        match self {
            Self::Efectivo => 1,
            Self::Cheque => 2,
            Self::TarjetaCredito => 3,
            Self::TarjetaDebito => 4,
            Self::Transferencia => 5,
            Self::Giro => 6,
            Self::BilleteraElectronica => 7,
            Self::TarjetaEmpresarial => 8,
            Self::Vale => 9,
            Self::Otro(c) => *c,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Efectivo,
            2 => Self::Cheque,
            3 => Self::TarjetaCredito,
            4 => Self::TarjetaDebito,
            5 => Self::Transferencia,
            6 => Self::Giro,
            7 => Self::BilleteraElectronica,
            8 => Self::TarjetaEmpresarial,
            9 => Self::Vale,
            c => Self::Otro(c),
        }
    }
}

impl From<MedioPago> for u8 {
    fn from(m: MedioPago) -> u8 {
        m.code()
    }
}

impl From<u8> for MedioPago {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

/// iAfecIVA — IVA affectation of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum IvaTipo {
    /// 1 — Gravado at the general 10% rate, IVA included in the price.
    Gravado10,
    /// 2 — Exonerado (Art. 100 Ley 6380/19).
    Exonerado,
    /// 3 — Exento.
    Exento,
    /// 4 — Gravado parcial.
    GravadoParcial,
}

impl IvaTipo {
    pub fn code(&self) -> u8 {
        match self {
            Self::Gravado10 => 1,
            Self::Exonerado => 2,
            Self::Exento => 3,
            Self::GravadoParcial => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Gravado10),
            2 => Some(Self::Exonerado),
            3 => Some(Self::Exento),
            4 => Some(Self::GravadoParcial),
            _ => None,
        }
    }
}

impl From<IvaTipo> for u8 {
    fn from(t: IvaTipo) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for IvaTipo {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("afectación de IVA desconocida: {code}"))
    }
}

/// Serde adapter for dFeEmiDE: second precision, no timezone, no millis.
pub mod fecha_sifen {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMATO: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(fecha: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&fecha.format(FORMATO).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMATO).map_err(de::Error::custom)
    }
}
