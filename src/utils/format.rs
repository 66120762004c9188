//! Helpers de formato y conversión
//!
//! Funciones de presentación compartidas por las vistas: fechas, moneda,
//! números, unidades y agrupación.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::utils::validation::{validate_date, validate_datetime};

const MILES_TO_KM: f64 = 1.60934;
const GALLONS_TO_LITERS: f64 = 3.78541;

fn parse_any_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = validate_datetime(value) {
        return Some(dt);
    }
    validate_date(value)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Formatea una fecha (RFC3339 o YYYY-MM-DD) como "Jan 15, 2024, 8:00 AM".
/// Si no se puede parsear se devuelve el valor original.
pub fn format_date(value: &str) -> String {
    match parse_any_date(value) {
        Some(dt) => dt.format("%b %-d, %Y, %-I:%M %p").to_string(),
        None => value.to_string(),
    }
}

/// Formatea un día sin hora ("Jan 15, 2024")
pub fn format_day(value: &str) -> String {
    match parse_any_date(value) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// Formatea una cantidad en USD con separador de miles y dos decimales
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();
    let integer = abs.trunc();
    let cents = ((abs - integer) * Decimal::ONE_HUNDRED).trunc();
    let integer_str = group_thousands(&integer.to_string());
    format!(
        "{}${}.{:0>2}",
        if negative { "-" } else { "" },
        integer_str,
        cents.to_string()
    )
}

/// Formatea un número con separador de miles (1,234,567)
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_thousands(&digits);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Días entre dos fechas, redondeando hacia arriba y sin signo
pub fn days_between(start: &str, end: &str) -> Option<i64> {
    let start = parse_any_date(start)?;
    let end = parse_any_date(end)?;
    let millis = (end - start).num_milliseconds().abs();
    let day = 1000 * 60 * 60 * 24;
    Some((millis + day - 1) / day)
}

/// Días completos transcurridos desde `date` hasta `today`
pub fn days_since(date: &str, today: NaiveDate) -> Option<i64> {
    let date = parse_any_date(date)?;
    let today = today.and_hms_opt(0, 0, 0)?.and_utc();
    Some((today - date).num_days())
}

/// Trunca un texto largo y agrega "..."
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_length).collect();
    format!("{}...", truncated)
}

/// Color hexadecimal aleatorio para gráficos
pub fn random_color() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..0x0100_0000);
    format!("#{:06x}", value)
}

/// Agrupa elementos por una clave derivada
pub fn group_by<T, K, F>(items: &[T], key: F) -> BTreeMap<K, Vec<&T>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<&T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles * MILES_TO_KM
}

pub fn gallons_to_liters(gallons: f64) -> f64 {
    gallons * GALLONS_TO_LITERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15T08:00:00Z"), "Jan 15, 2024, 8:00 AM");
        assert_eq!(format_date("not a date"), "not a date");
        assert_eq!(format_day("2024-01-05"), "Jan 5, 2024");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::new(899, 2)), "$8.99");
        assert_eq!(format_currency(Decimal::new(1250000, 2)), "$12,500.00");
        assert_eq!(format_currency(Decimal::new(-455, 1)), "-$45.50");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-45000), "-45,000");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between("2024-01-01", "2024-01-31"), Some(30));
        assert_eq!(days_between("2024-01-31", "2024-01-01"), Some(30));
        assert_eq!(days_between("2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z"), Some(1));
        assert_eq!(days_between("bad", "2024-01-01"), None);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Engine overheating", 6), "Engine...");
        assert_eq!(truncate_text("Short", 10), "Short");
    }

    #[test]
    fn test_random_color_shape() {
        let color = random_color();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
    }

    #[test]
    fn test_group_by() {
        let words = vec!["apple", "avocado", "banana"];
        let groups = group_by(&words, |w| w.chars().next().unwrap());
        assert_eq!(groups[&'a'].len(), 2);
        assert_eq!(groups[&'b'].len(), 1);
    }

    #[test]
    fn test_unit_conversions() {
        assert!((miles_to_kilometers(100.0) - 160.934).abs() < 1e-9);
        assert!((gallons_to_liters(10.0) - 37.8541).abs() < 1e-9);
    }
}
