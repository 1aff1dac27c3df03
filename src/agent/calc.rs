use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// First `<number> <op> <number>` occurrence. Unicode operator glyphs are
/// accepted alongside their ASCII forms; digits are ASCII only.
static BINARY_EXPR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+\.?[0-9]*)\s*([+\-*/×÷−])\s*([0-9]+\.?[0-9]*)")
        .expect("arithmetic pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Subtract),
            "*" | "×" => Some(Operator::Multiply),
            "/" | "÷" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            // Division by zero is reported as NaN, not infinity.
            Operator::Divide if b == 0.0 => f64::NAN,
            Operator::Divide => a / b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
}

/// Whether `text` contains something [`evaluate`] would pick up.
pub fn contains_expression(text: &str) -> bool {
    BINARY_EXPR.is_match(text)
}

/// Evaluates the first binary arithmetic expression found in `text`.
pub fn evaluate(text: &str) -> Option<Calculation> {
    let caps = BINARY_EXPR.captures(text)?;
    let lhs = caps[1].parse::<f64>().ok()?;
    let operator = Operator::from_symbol(&caps[2])?;
    let rhs = caps[3].parse::<f64>().ok()?;

    Some(Calculation {
        lhs,
        operator,
        rhs,
        result: operator.apply(lhs, rhs),
    })
}

/// Renders a result the way a user expects to read it: `48`, `2.5`,
/// `NaN`, `Infinity`. Magnitudes from 1e21 up, or below 1e-6, switch to
/// exponent form (`1e+24`, `1.5e-7`).
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            f.write_str("NaN")
        } else if n.is_infinite() {
            f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
        } else if n == 0.0 {
            f.write_str("0")
        } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
            let exp = format!("{:e}", n);
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, power)
                }
                _ => f.write_str(&exp),
            }
        } else {
            write!(f, "{}", n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_of(text: &str) -> f64 {
        evaluate(text).expect("expression should be found").result
    }

    #[test]
    fn evaluates_the_four_operations() {
        assert_eq!(result_of("12 + 4"), 16.0);
        assert_eq!(result_of("12 - 4"), 8.0);
        assert_eq!(result_of("12 * 4"), 48.0);
        assert_eq!(result_of("12 / 4"), 3.0);
    }

    #[test]
    fn accepts_decimals_and_missing_whitespace() {
        assert_eq!(result_of("1.5*2"), 3.0);
        assert_eq!(result_of("price 7.25 +0.75 total"), 8.0);
    }

    #[test]
    fn accepts_unicode_operators() {
        assert_eq!(result_of("6 × 7"), 42.0);
        assert_eq!(result_of("9 ÷ 3"), 3.0);
        assert_eq!(result_of("9 − 3"), 6.0);
    }

    #[test]
    fn division_by_zero_is_nan() {
        let calc = evaluate("5 / 0").unwrap();
        assert!(calc.result.is_nan());
        assert_eq!(Number(calc.result).to_string(), "NaN");
    }

    #[test]
    fn only_the_first_expression_counts() {
        let calc = evaluate("3 + 4 and then 10 * 10").unwrap();
        assert_eq!(calc.operator, Operator::Add);
        assert_eq!(calc.result, 7.0);
    }

    #[test]
    fn no_expression_yields_none() {
        assert!(evaluate("calculate my taxes").is_none());
        assert!(!contains_expression("just words"));
        assert!(contains_expression("what is 12 * 4?"));
    }

    #[test]
    fn numbers_render_without_trailing_zeroes() {
        assert_eq!(Number(48.0).to_string(), "48");
        assert_eq!(Number(2.5).to_string(), "2.5");
        assert_eq!(Number(-8.0).to_string(), "-8");
        assert_eq!(Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Number(-0.0).to_string(), "0");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(Number(1e24).to_string(), "1e+24");
        assert_eq!(Number(-2.5e30).to_string(), "-2.5e+30");
        assert_eq!(Number(1e-7).to_string(), "1e-7");
        assert_eq!(Number(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(Number(0.000001).to_string(), "0.000001");
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        assert!(!contains_expression("what is ٣ + ٤"));
        let calc = evaluate("what is ٣ + 4 or 5 * 6").unwrap();
        assert_eq!(calc.result, 30.0);
    }
}
