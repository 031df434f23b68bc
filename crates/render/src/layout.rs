//! Fixed region layout of the remito form.
//!
//! The page is a strict vertical stack of constant-height boxes drawn top
//! to bottom; within a box, label/value pairs sit at fixed offsets. An
//! absent optional field prints the underscore placeholder, so geometry
//! never shifts with field presence. Only the first line item is printed;
//! the form has a single product panel.

use crate::page::{Align, Page, PAGE_HEIGHT, PAGE_WIDTH};
use chrono::{DateTime, Local};
use remito_format::{campo, format_cuit, format_fecha, format_medida, format_numero, CAMPO_VACIO};
use remito_fonts::{HELVETICA, HELVETICA_BOLD};
use remito_types::{Empresa, Remito, RemitoItem};

const MARGIN_LEFT: f32 = 50.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 100.0;
const HEADER_TOP: f32 = 30.0;
const HEADER_HEIGHT: f32 = 95.0;
const RECEPTOR_HEIGHT: f32 = 80.0;
const PRODUCTO_HEIGHT: f32 = 100.0;
const TRANSPORTE_HEIGHT: f32 = 70.0;
const FIRMAS_HEIGHT: f32 = 60.0;
const OBSERVACIONES_HEIGHT: f32 = 40.0;
const BOX_GAP: f32 = 5.0;

/// Draws the whole form for one remito at the given generation time.
pub fn draw(page: &mut Page, remito: &Remito, empresa: &Empresa, generado: &DateTime<Local>) {
    let mut y = HEADER_TOP;
    y = draw_header(page, remito, empresa, generado, y);
    y = draw_receptor(page, remito, y);
    y = draw_producto(page, remito.items.first(), y);
    y = draw_transporte(page, remito, y);
    y = draw_firmas(page, y);
    let obs_bottom = draw_observaciones(page, remito, y);
    draw_cae(page, remito, obs_bottom);
    draw_footer(page, generado);
}

fn draw_header(
    page: &mut Page,
    remito: &Remito,
    empresa: &Empresa,
    generado: &DateTime<Local>,
    y: f32,
) -> f32 {
    // Logo block, centered on the page.
    page.text_aligned("R", 0.0, y, 24.0, HELVETICA_BOLD, PAGE_WIDTH, Align::Center);
    let codigo = format!("CODIGO N° {}", empresa.codigo);
    page.text_aligned(&codigo, 0.0, y + 20.0, 8.0, HELVETICA, PAGE_WIDTH, Align::Center);

    // Issuer identity, left column.
    page.text_face(&empresa.nombre, MARGIN_LEFT, y, 12.0, HELVETICA_BOLD);
    page.text(&empresa.direccion, MARGIN_LEFT, y + 15.0, 9.0);
    page.text(&empresa.localidad, MARGIN_LEFT, y + 28.0, 9.0);
    page.text(&empresa.condicion_iva, MARGIN_LEFT, y + 41.0, 9.0);

    // Document title block, right column.
    page.text_aligned(
        "COMPROBANTE NO VALIDO COMO FACTURA",
        400.0,
        y,
        8.0,
        HELVETICA,
        145.0,
        Align::Right,
    );
    page.text_aligned(
        "REMITO",
        400.0,
        y + 12.0,
        14.0,
        HELVETICA_BOLD,
        145.0,
        Align::Right,
    );
    let numero = format!(
        "Nº {}",
        format_numero(remito.punto_venta, remito.numero_remito)
    );
    page.text_aligned(&numero, 400.0, y + 30.0, 10.0, HELVETICA, 145.0, Align::Right);

    // Issue date and generation time.
    page.text("FECHA:", MARGIN_LEFT, y + 55.0, 9.0);
    page.text(&format_fecha(&remito.fecha_emision), 100.0, y + 55.0, 9.0);
    page.text("HORA:", 250.0, y + 55.0, 9.0);
    page.text(&generado.format("%H:%M").to_string(), 300.0, y + 55.0, 9.0);

    // Issuer tax line.
    page.text(&format!("C.U.I.T.: {}", empresa.cuit), MARGIN_LEFT, y + 70.0, 8.0);
    page.text(
        &format!("INGRESOS BRUTOS: {}", empresa.ingresos_brutos),
        250.0,
        y + 70.0,
        8.0,
    );
    page.text(
        &format!("FECHA DE INICIO: {}", empresa.fecha_inicio),
        400.0,
        y + 70.0,
        8.0,
    );

    y + HEADER_HEIGHT
}

fn draw_receptor(page: &mut Page, remito: &Remito, y: f32) -> f32 {
    page.rect(MARGIN_LEFT, y, CONTENT_WIDTH, RECEPTOR_HEIGHT);

    page.text("PREDIO:", 55.0, y + 5.0, 9.0);
    page.text(&campo(remito.predio.as_deref()), 55.0, y + 18.0, 9.0);
    page.text("RODAL:", 220.0, y + 5.0, 9.0);
    page.text(&campo(remito.rodal.as_deref()), 220.0, y + 18.0, 9.0);

    page.text("CLIENTE:", 55.0, y + 35.0, 9.0);
    page.text(&remito.nombre_receptor, 55.0, y + 48.0, 9.0);
    page.text("DOMICILIO FISCAL:", 280.0, y + 35.0, 9.0);
    let domicilio = remito
        .domicilio_fiscal
        .as_deref()
        .unwrap_or(&remito.domicilio_receptor);
    page.text(&campo(Some(domicilio)), 280.0, y + 48.0, 9.0);

    page.text("IVA:", 55.0, y + 65.0, 9.0);
    page.text("RESPONSABLE INSCRIPTO", 100.0, y + 65.0, 9.0);
    page.text("RESPONSABLE NO INSCRIPTO", 250.0, y + 65.0, 9.0);
    page.text("CUIT:", 400.0, y + 65.0, 9.0);
    page.text(&format_cuit(&remito.cuit_receptor), 440.0, y + 65.0, 9.0);

    y + RECEPTOR_HEIGHT + BOX_GAP
}

fn draw_producto(page: &mut Page, item: Option<&RemitoItem>, y: f32) -> f32 {
    page.rect(MARGIN_LEFT, y, CONTENT_WIDTH, PRODUCTO_HEIGHT);

    page.text("PRODUCTO:", 55.0, y + 5.0, 9.0);
    page.text(
        &campo(item.map(|i| i.descripcion.as_str())),
        55.0,
        y + 18.0,
        9.0,
    );
    page.text("ESPECIE:", 220.0, y + 5.0, 9.0);
    page.text(
        &campo(item.and_then(|i| i.especie.as_deref())),
        220.0,
        y + 18.0,
        9.0,
    );
    page.text("LARGO:", 380.0, y + 5.0, 9.0);
    page.text(
        &format_medida(item.and_then(|i| i.largo), ""),
        380.0,
        y + 18.0,
        9.0,
    );

    page.text("CATEGORIA:", 55.0, y + 35.0, 9.0);
    page.text(
        &campo(item.and_then(|i| i.categoria.as_deref())),
        55.0,
        y + 48.0,
        9.0,
    );
    page.text("PESO BRUTO:", 220.0, y + 35.0, 9.0);
    page.text(
        &format_medida(item.and_then(|i| i.peso_bruto), "kg"),
        220.0,
        y + 48.0,
        9.0,
    );
    page.text("M3 STEREO:", 330.0, y + 35.0, 9.0);
    page.text(
        &format_medida(item.and_then(|i| i.m3_stereo), ""),
        330.0,
        y + 48.0,
        9.0,
    );
    page.text("TARA:", 440.0, y + 35.0, 9.0);
    page.text(
        &format_medida(item.and_then(|i| i.tara), "kg"),
        440.0,
        y + 48.0,
        9.0,
    );

    page.text("PESO NETO:", 55.0, y + 65.0, 9.0);
    page.text(
        &format_medida(item.and_then(|i| i.peso_neto), "kg"),
        55.0,
        y + 78.0,
        9.0,
    );
    page.text("BALANZA:", 170.0, y + 65.0, 9.0);
    page.text(
        &campo(item.and_then(|i| i.balanza.as_deref())),
        170.0,
        y + 78.0,
        9.0,
    );

    y + PRODUCTO_HEIGHT + BOX_GAP
}

fn draw_transporte(page: &mut Page, remito: &Remito, y: f32) -> f32 {
    page.rect(MARGIN_LEFT, y, CONTENT_WIDTH, TRANSPORTE_HEIGHT);

    page.text("TRANSPORTE:", 55.0, y + 5.0, 9.0);
    page.text(
        &campo(remito.nombre_transportista.as_deref()),
        55.0,
        y + 18.0,
        9.0,
    );
    page.text("CAMION PATENTE N°:", 280.0, y + 5.0, 9.0);
    page.text(
        &campo(remito.dominio_vehiculo.as_deref()),
        280.0,
        y + 18.0,
        9.0,
    );

    page.text("CUIT:", 55.0, y + 35.0, 9.0);
    let cuit = match remito.cuit_transportista.as_deref() {
        Some(c) => format_cuit(c),
        None => CAMPO_VACIO.to_string(),
    };
    page.text(&cuit, 55.0, y + 48.0, 9.0);
    page.text("ACOPLADO PATENTE N°:", 220.0, y + 35.0, 9.0);
    page.text(
        &campo(remito.dominio_acoplado.as_deref()),
        220.0,
        y + 48.0,
        9.0,
    );
    page.text("CONDUCTOR:", 380.0, y + 35.0, 9.0);
    page.text(&campo(remito.conductor.as_deref()), 380.0, y + 48.0, 9.0);
    page.text("DNI:", 490.0, y + 35.0, 9.0);
    page.text(&campo(remito.dni_conductor.as_deref()), 490.0, y + 48.0, 9.0);

    page.text(
        "MERCADERIA PROPIEDAD DEL CLIENTE, TRANSPORTADA POR CUENTA Y ORDEN DEL MISMO",
        55.0,
        y + 60.0,
        8.0,
    );

    y + TRANSPORTE_HEIGHT + BOX_GAP
}

fn draw_firmas(page: &mut Page, y: f32) -> f32 {
    page.rect(MARGIN_LEFT, y, CONTENT_WIDTH, FIRMAS_HEIGHT);

    page.text_aligned("Firma y aclaración", 55.0, y + 5.0, 9.0, HELVETICA, 150.0, Align::Center);
    page.text_aligned("Despachante", 55.0, y + 18.0, 9.0, HELVETICA, 150.0, Align::Center);
    page.rect(55.0, y + 30.0, 150.0, 18.0);

    page.text_aligned("Firma y aclaración", 220.0, y + 5.0, 9.0, HELVETICA, 150.0, Align::Center);
    page.text_aligned("Conductor", 220.0, y + 18.0, 9.0, HELVETICA, 150.0, Align::Center);
    page.rect(220.0, y + 30.0, 150.0, 18.0);

    page.text_aligned("Firma y aclaración", 385.0, y + 5.0, 9.0, HELVETICA, 160.0, Align::Center);
    page.text_aligned("Recepción", 385.0, y + 18.0, 9.0, HELVETICA, 160.0, Align::Center);
    page.text("FECHA:", 385.0, y + 38.0, 9.0);
    page.text("HORA:", 450.0, y + 38.0, 9.0);
    page.rect(385.0, y + 35.0, 160.0, 20.0);

    y + FIRMAS_HEIGHT + BOX_GAP
}

/// Draws the remarks box; returns its bottom edge.
fn draw_observaciones(page: &mut Page, remito: &Remito, y: f32) -> f32 {
    page.rect(MARGIN_LEFT, y, CONTENT_WIDTH, OBSERVACIONES_HEIGHT);
    page.text("OBSERVACIONES:", 55.0, y + 5.0, 9.0);
    if let Some(observaciones) = remito.observaciones.as_deref() {
        page.text(observaciones, 55.0, y + 18.0, 9.0);
    }
    y + OBSERVACIONES_HEIGHT
}

/// Authorization code footer, present only once the remito is approved.
fn draw_cae(page: &mut Page, remito: &Remito, obs_bottom: f32) {
    let Some(cae) = remito.cae.as_deref() else {
        return;
    };
    let y = obs_bottom + 10.0;
    page.text(&format!("CAE: {cae}"), MARGIN_LEFT, y, 8.0);
    if let Some(vencimiento) = remito.vencimiento_cae.as_deref() {
        page.text(
            &format!("Vencimiento CAE: {}", format_fecha(vencimiento)),
            300.0,
            y,
            8.0,
        );
    }
}

fn draw_footer(page: &mut Page, generado: &DateTime<Local>) {
    let texto = format!(
        "Generado el {} a las {}",
        generado.format("%d/%m/%Y"),
        generado.format("%H:%M:%S")
    );
    page.text_aligned(
        &texto,
        MARGIN_LEFT,
        PAGE_HEIGHT - 30.0,
        7.0,
        HELVETICA,
        CONTENT_WIDTH,
        Align::Center,
    );
}
