//! Nombres de tags conocidos y conversión entero ↔ texto.

pub const LOCATION: &str = "location";
pub const TITLE: &str = "title";
pub const TRACK_NUMBER: &str = "track-number";

/// Interpreta `value` como un entero al estilo de `atoi`: ignora espacios
/// iniciales, acepta un signo y lee dígitos hasta el primer carácter que no
/// lo sea. Si no hay dígitos devuelve 0. Los desbordamientos saturan a
/// `i32::MIN`/`i32::MAX`.
pub fn parse_int_lenient(value: &str) -> i32 {
    let s = value.trim_start();

    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        acc = acc * 10 + i64::from(b - b'0');
        // más allá de esto ya satura
        if acc > i64::from(i32::MAX) + 1 {
            break;
        }
    }

    let signed = if negative { -acc } else { acc };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
