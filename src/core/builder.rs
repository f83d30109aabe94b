use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::error::FacturaError;
use super::iva;
use super::types::*;
use super::validation;

/// Builder for electronic documents.
///
/// ```
/// use chrono::NaiveDate;
/// use facturasend::core::*;
/// use rust_decimal_macros::dec;
///
/// let fecha = NaiveDate::from_ymd_opt(2025, 3, 14)
///     .unwrap()
///     .and_hms_opt(10, 30, 0)
///     .unwrap();
///
/// let doc = DocumentoBuilder::new(123, fecha)
///     .cliente(
///         ClienteBuilder::new("Cliente S.R.L.")
///             .ruc("1234567-9")
///             .direccion("Avda. España 1234")
///             .build(),
///     )
///     .usuario(Usuario::new("1234567", "Juan Pérez", "Contador"))
///     .condicion(Condicion::contado(MedioPago::Transferencia, 550_000))
///     .add_item(ItemBuilder::new("Servicios de consultoría", dec!(1), 550_000).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.numero, 123);
/// assert_eq!(doc.moneda, "PYG");
/// ```
pub struct DocumentoBuilder {
    tipo_documento: TipoDocumento,
    establecimiento: u16,
    punto: u16,
    numero: u32,
    fecha: NaiveDateTime,
    tipo_emision: TipoEmision,
    tipo_transaccion: TipoTransaccion,
    tipo_impuesto: TipoImpuesto,
    moneda: String,
    observacion: Option<String>,
    cliente: Option<Cliente>,
    usuario: Option<Usuario>,
    presencia: TipoPresencia,
    condicion: Option<Condicion>,
    items: Vec<Item>,
}

impl DocumentoBuilder {
    pub fn new(numero: u32, fecha: NaiveDateTime) -> Self {
        Self {
            tipo_documento: TipoDocumento::FacturaElectronica,
            establecimiento: 1,
            punto: 1,
            numero,
            fecha,
            tipo_emision: TipoEmision::Normal,
            tipo_transaccion: TipoTransaccion::PrestacionServicios,
            tipo_impuesto: TipoImpuesto::Iva,
            moneda: "PYG".to_string(),
            observacion: None,
            cliente: None,
            usuario: None,
            presencia: TipoPresencia::Electronica,
            condicion: None,
            items: Vec::new(),
        }
    }

    pub fn tipo_documento(mut self, tipo: TipoDocumento) -> Self {
        self.tipo_documento = tipo;
        self
    }

    pub fn establecimiento(mut self, establecimiento: u16) -> Self {
        self.establecimiento = establecimiento;
        self
    }

    pub fn punto(mut self, punto: u16) -> Self {
        self.punto = punto;
        self
    }

    pub fn tipo_emision(mut self, tipo: TipoEmision) -> Self {
        self.tipo_emision = tipo;
        self
    }

    pub fn tipo_transaccion(mut self, tipo: TipoTransaccion) -> Self {
        self.tipo_transaccion = tipo;
        self
    }

    pub fn tipo_impuesto(mut self, tipo: TipoImpuesto) -> Self {
        self.tipo_impuesto = tipo;
        self
    }

    pub fn moneda(mut self, moneda: impl Into<String>) -> Self {
        self.moneda = moneda.into();
        self
    }

    pub fn observacion(mut self, observacion: impl Into<String>) -> Self {
        self.observacion = Some(observacion.into());
        self
    }

    pub fn cliente(mut self, cliente: Cliente) -> Self {
        self.cliente = Some(cliente);
        self
    }

    pub fn usuario(mut self, usuario: Usuario) -> Self {
        self.usuario = Some(usuario);
        self
    }

    pub fn presencia(mut self, presencia: TipoPresencia) -> Self {
        self.presencia = presencia;
        self
    }

    pub fn condicion(mut self, condicion: Condicion) -> Self {
        self.condicion = Some(condicion);
        self
    }

    pub fn add_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Build the document, running structural validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Documento, FacturaError> {
        let doc = self.ensamblar()?;
        let errors = validation::validar_documento(&doc);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FacturaError::Validacion(msg));
        }
        Ok(doc)
    }

    /// Build without validation — useful for testing or partially known data.
    pub fn build_unchecked(self) -> Result<Documento, FacturaError> {
        self.ensamblar()
    }

    fn ensamblar(self) -> Result<Documento, FacturaError> {
        let cliente = self
            .cliente
            .ok_or_else(|| FacturaError::Builder("cliente es requerido".into()))?;
        let usuario = self
            .usuario
            .ok_or_else(|| FacturaError::Builder("usuario es requerido".into()))?;
        let condicion = self
            .condicion
            .ok_or_else(|| FacturaError::Builder("condición de pago es requerida".into()))?;

        Ok(Documento {
            tipo_documento: self.tipo_documento,
            establecimiento: self.establecimiento,
            punto: self.punto,
            numero: self.numero,
            fecha: self.fecha,
            tipo_emision: self.tipo_emision,
            tipo_transaccion: self.tipo_transaccion,
            tipo_impuesto: self.tipo_impuesto,
            moneda: self.moneda,
            observacion: self.observacion,
            cliente,
            usuario,
            factura: Factura {
                presencia: self.presencia,
            },
            condicion,
            items: self.items,
        })
    }
}

impl Documento {
    /// Single-item factura for a service amount quoted in another currency.
    ///
    /// The amount is converted at `tipo_cambio` and rounded to whole
    /// guaraníes; the one Gravado10 line carries the whole total with its
    /// IVA split, the condición is contado for the same total, and the
    /// exchange rate is recorded in the observación (`TC: {tipo_cambio}`).
    pub fn factura_simple(
        usuario: Usuario,
        cliente: Cliente,
        descripcion: impl Into<String>,
        monto: Decimal,
        tipo_cambio: Decimal,
        numero: u32,
        fecha: NaiveDateTime,
    ) -> Result<Self, FacturaError> {
        let total = iva::monto_guaranies(monto, tipo_cambio)?;
        let desglose = iva::desglosar_gravado_10(total);

        DocumentoBuilder::new(numero, fecha)
            .observacion(format!("TC: {tipo_cambio}"))
            .cliente(cliente)
            .usuario(usuario)
            .condicion(Condicion::contado(MedioPago::Vale, total))
            .add_item(
                ItemBuilder::new(descripcion, Decimal::ONE, total)
                    .iva(Decimal::from(desglose.iva))
                    .build(),
            )
            .build()
    }
}

/// Builder for the document receiver.
pub struct ClienteBuilder {
    contribuyente: bool,
    razon_social: String,
    tipo_operacion: TipoOperacion,
    direccion: String,
    numero_casa: String,
    localidad: Localidad,
    tipo_contribuyente: TipoContribuyente,
    ruc: Option<String>,
}

impl ClienteBuilder {
    pub fn new(razon_social: impl Into<String>) -> Self {
        Self {
            contribuyente: true,
            razon_social: razon_social.into(),
            tipo_operacion: TipoOperacion::B2B,
            direccion: "Asuncion".to_string(),
            numero_casa: "0".to_string(),
            localidad: Localidad::asuncion(),
            tipo_contribuyente: TipoContribuyente::PersonaJuridica,
            ruc: None,
        }
    }

    pub fn contribuyente(mut self, contribuyente: bool) -> Self {
        self.contribuyente = contribuyente;
        self
    }

    pub fn tipo_operacion(mut self, tipo: TipoOperacion) -> Self {
        self.tipo_operacion = tipo;
        self
    }

    pub fn direccion(mut self, direccion: impl Into<String>) -> Self {
        self.direccion = direccion.into();
        self
    }

    pub fn numero_casa(mut self, numero_casa: impl Into<String>) -> Self {
        self.numero_casa = numero_casa.into();
        self
    }

    pub fn localidad(mut self, localidad: Localidad) -> Self {
        self.localidad = localidad;
        self
    }

    pub fn tipo_contribuyente(mut self, tipo: TipoContribuyente) -> Self {
        self.tipo_contribuyente = tipo;
        self
    }

    pub fn ruc(mut self, ruc: impl Into<String>) -> Self {
        self.ruc = Some(ruc.into());
        self
    }

    pub fn build(self) -> Cliente {
        Cliente {
            contribuyente: self.contribuyente,
            razon_social: self.razon_social,
            tipo_operacion: self.tipo_operacion,
            direccion: self.direccion,
            numero_casa: self.numero_casa,
            localidad: self.localidad,
            tipo_contribuyente: self.tipo_contribuyente,
            ruc: self.ruc,
        }
    }
}

/// Builder for line items. Unit of measure defaults to UNI (77).
pub struct ItemBuilder {
    descripcion: String,
    cantidad: Decimal,
    unidad_medida: u16,
    precio_unitario: i64,
    iva_tipo: IvaTipo,
    iva: Option<Decimal>,
    codigo: Option<String>,
}

impl ItemBuilder {
    pub fn new(descripcion: impl Into<String>, cantidad: Decimal, precio_unitario: i64) -> Self {
        Self {
            descripcion: descripcion.into(),
            cantidad,
            unidad_medida: UNIDAD,
            precio_unitario,
            iva_tipo: IvaTipo::Gravado10,
            iva: None,
            codigo: None,
        }
    }

    pub fn unidad_medida(mut self, unidad: u16) -> Self {
        self.unidad_medida = unidad;
        self
    }

    pub fn iva_tipo(mut self, tipo: IvaTipo) -> Self {
        self.iva_tipo = tipo;
        self
    }

    /// Explicit IVA amount; truncated to whole guaraníes at submission.
    pub fn iva(mut self, monto: Decimal) -> Self {
        self.iva = Some(monto);
        self
    }

    pub fn codigo(mut self, codigo: impl Into<String>) -> Self {
        self.codigo = Some(codigo.into());
        self
    }

    pub fn build(self) -> Item {
        Item {
            descripcion: self.descripcion,
            cantidad: self.cantidad,
            unidad_medida: self.unidad_medida,
            precio_unitario: self.precio_unitario,
            iva_tipo: self.iva_tipo,
            iva: self.iva,
            codigo: self.codigo,
        }
    }
}
