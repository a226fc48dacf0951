//! Numeric canonicalization helpers
//!
//! Two renderings of the same number: a CSS value (`7.5` / `8`) and a
//! class-name fragment (alphanumeric, bounded length, collision-free for
//! distinct inputs at the precision the API accepts).

/// Render a float as a CSS value: whole numbers drop the decimal point.
pub fn float_css(n: f32) -> String {
    if n.fract() == 0.0 && n.abs() < 1.0e9 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Render a float as a class-name fragment.
///
/// The value is scaled by 100 and rounded, so `7`, `7.4`, `7.5` and `8.04`
/// map to `700`, `740`, `750` and `804`. Negatives get a `neg` marker so
/// `-5` and `5` can never collide once joined with hyphens.
pub fn float_class(n: f32) -> String {
    let scaled = (n * 100.0).round() as i64;
    if scaled < 0 {
        format!("neg{}", -scaled)
    } else {
        format!("{scaled}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_css_whole_numbers() {
        assert_eq!(float_css(8.0), "8");
        assert_eq!(float_css(0.0), "0");
        assert_eq!(float_css(-3.0), "-3");
    }

    #[test]
    fn test_float_css_fractions() {
        assert_eq!(float_css(7.5), "7.5");
        assert_eq!(float_css(0.25), "0.25");
    }

    #[test]
    fn test_float_class_close_values_distinct() {
        let inputs = [
            0.0, 0.01, 0.5, 1.0, 6.99, 7.0, 7.04, 7.4, 7.5, 7.54, 8.0, 8.04, 8.5, 9.0, 10.0,
            10.01, 11.5, 12.0, 100.0, 100.5, 101.0,
        ];
        let fragments: Vec<String> = inputs.iter().map(|&n| float_class(n)).collect();
        for (i, a) in fragments.iter().enumerate() {
            for (j, b) in fragments.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "{} and {} collided", inputs[i], inputs[j]);
                }
            }
        }
    }

    #[test]
    fn test_float_class_deterministic() {
        assert_eq!(float_class(8.0), float_class(8.0));
        assert_eq!(float_class(8.0), "800");
    }

    #[test]
    fn test_negative_marker() {
        assert_eq!(float_class(-5.0), "neg500");
        assert_ne!(float_class(-5.0), float_class(5.0));
    }
}
