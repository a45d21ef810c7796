/// Whole numbers without a trailing `.0`; gaps as `-`
pub fn format_number(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(273.0)), "273");
        assert_eq!(format_number(Some(46.5)), "46.5");
        assert_eq!(format_number(Some(-3.0)), "-3");
        assert_eq!(format_number(None), "-");
    }
}
