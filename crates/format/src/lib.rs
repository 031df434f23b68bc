//! Display formatting for remito fields.
//!
//! Every function here is pure and fails closed: malformed input is
//! returned unchanged instead of erroring, so a bad business field can
//! never abort a render. Absent optional values print as [`CAMPO_VACIO`]
//! so the printed form keeps the same structure regardless of field
//! presence.

/// Placeholder run printed in place of any absent optional field.
pub const CAMPO_VACIO: &str = "_________________";

/// Formats an ISO date (`YYYY-MM-DD`, with or without a `T…` time suffix)
/// as `DD/MM/YYYY`. Anything that does not split into three date parts is
/// returned unchanged.
pub fn format_fecha(fecha: &str) -> String {
    let date_part = fecha.split('T').next().unwrap_or(fecha);
    let partes: Vec<&str> = date_part.split('-').collect();
    match partes.as_slice() {
        [anio, mes, dia] if !anio.is_empty() && !mes.is_empty() && !dia.is_empty() => {
            format!("{dia}/{mes}/{anio}")
        }
        _ => fecha.to_string(),
    }
}

/// Formats a CUIT tax ID as `XX-XXXXXXXX-X`.
///
/// Existing separators are stripped first; if the remainder is not exactly
/// eleven characters the input is returned unchanged.
pub fn format_cuit(cuit: &str) -> String {
    let limpio: String = cuit.chars().filter(|c| *c != '-').collect();
    if limpio.len() == 11 && limpio.is_ascii() {
        format!("{}-{}-{}", &limpio[..2], &limpio[2..10], &limpio[10..])
    } else {
        cuit.to_string()
    }
}

/// Formats the document number as `PPPP-NNNNNNNN` (point of sale zero
/// padded to four digits, sequence number to eight). A missing sequence
/// number prints as all zeros.
pub fn format_numero(punto_venta: u32, numero: Option<u32>) -> String {
    format!("{:04}-{:08}", punto_venta, numero.unwrap_or(0))
}

/// Formats an optional numeric measure with two decimals and a unit
/// suffix, or the placeholder when absent. An empty suffix yields just the
/// number.
pub fn format_medida(valor: Option<f64>, sufijo: &str) -> String {
    match valor {
        Some(v) if sufijo.is_empty() => format!("{v:.2}"),
        Some(v) => format!("{v:.2} {sufijo}"),
        None => CAMPO_VACIO.to_string(),
    }
}

/// Returns the value itself, or the placeholder when absent or blank.
pub fn campo(valor: Option<&str>) -> String {
    match valor {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => CAMPO_VACIO.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fecha_iso_becomes_day_month_year() {
        assert_eq!(format_fecha("2025-03-07"), "07/03/2025");
    }

    #[test]
    fn fecha_with_time_suffix_drops_the_time() {
        assert_eq!(format_fecha("2025-03-07T14:33:00Z"), "07/03/2025");
    }

    #[test]
    fn fecha_malformed_is_returned_unchanged() {
        assert_eq!(format_fecha("not-a-date"), "not-a-date");
        assert_eq!(format_fecha(""), "");
        assert_eq!(format_fecha("2025-03"), "2025-03");
        assert_eq!(format_fecha("2025--07"), "2025--07");
    }

    #[test]
    fn cuit_eleven_digits_gets_separators() {
        assert_eq!(format_cuit("30693787285"), "30-69378728-5");
    }

    #[test]
    fn cuit_preformatted_is_normalized() {
        assert_eq!(format_cuit("30-69378728-5"), "30-69378728-5");
    }

    #[test]
    fn cuit_shape_holds_for_any_eleven_digit_input() {
        for cuit in ["20123456783", "27000000000", "33712345679"] {
            let formatted = format_cuit(cuit);
            assert_eq!(formatted.len(), 13);
            let bytes = formatted.as_bytes();
            assert_eq!(bytes[2], b'-');
            assert_eq!(bytes[11], b'-');
        }
    }

    #[test]
    fn cuit_wrong_length_is_returned_unchanged() {
        assert_eq!(format_cuit("12345"), "12345");
        assert_eq!(format_cuit(""), "");
        assert_eq!(format_cuit("123456789012"), "123456789012");
    }

    #[test]
    fn cuit_non_ascii_is_returned_unchanged() {
        // Eleven bytes but not eleven ASCII characters.
        assert_eq!(format_cuit("069378728é"), "069378728é");
    }

    #[test]
    fn numero_is_zero_padded() {
        assert_eq!(format_numero(13, Some(452)), "0013-00000452");
        assert_eq!(format_numero(1, None), "0001-00000000");
    }

    #[test]
    fn medida_prints_two_decimals_with_suffix() {
        assert_eq!(format_medida(Some(1234.5), "kg"), "1234.50 kg");
        assert_eq!(format_medida(Some(3.0), ""), "3.00");
        assert_eq!(format_medida(None, "kg"), CAMPO_VACIO);
    }

    #[test]
    fn campo_substitutes_placeholder_for_absent_or_blank() {
        assert_eq!(campo(Some("AB 123 CD")), "AB 123 CD");
        assert_eq!(campo(Some("   ")), CAMPO_VACIO);
        assert_eq!(campo(None), CAMPO_VACIO);
    }
}
