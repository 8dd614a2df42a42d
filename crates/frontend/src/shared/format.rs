//! Locale-aware display formatting for prices and dimensions.

/// Formats a price the French way: two decimals, comma separator, euro
/// suffix. `12.5` becomes `"12,50 €"`.
pub fn format_price_eur(price: f64) -> String {
    format!("{:.2} €", price).replace('.', ",")
}

/// Millimetre values print without a trailing `.0` when whole.
fn format_mm(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Human-readable dimensions line, or `None` when neither measure is known.
/// Available measures are joined with a bullet.
pub fn format_dimensions(width_mm: Option<f64>, thickness_mm: Option<f64>) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(width) = width_mm {
        parts.push(format!("{} mm de largeur", format_mm(width)));
    }
    if let Some(thickness) = thickness_mm {
        parts.push(format!("{} mm d’épaisseur", format_mm(thickness)));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_eur() {
        assert_eq!(format_price_eur(12.5), "12,50 €");
        assert_eq!(format_price_eur(0.0), "0,00 €");
        assert_eq!(format_price_eur(99.0), "99,00 €");
        assert_eq!(format_price_eur(34.999), "35,00 €");
    }

    #[test]
    fn test_format_dimensions() {
        assert_eq!(format_dimensions(None, None), None);
        assert_eq!(
            format_dimensions(Some(320.0), None),
            Some("320 mm de largeur".to_string())
        );
        assert_eq!(
            format_dimensions(None, Some(22.0)),
            Some("22 mm d’épaisseur".to_string())
        );
        assert_eq!(
            format_dimensions(Some(320.0), Some(22.5)),
            Some("320 mm de largeur • 22.5 mm d’épaisseur".to_string())
        );
    }
}
