//! Rendering of addition facts as user-facing text.

/// Render the message describing an addition fact.
///
/// The template is fixed: `Message: {lhs} + {rhs} equals {sum}.` with
/// each value in signed decimal. The sum is taken as given — no check
/// that `sum == lhs + rhs` is performed here.
pub fn render(lhs: i64, rhs: i64, sum: i64) -> String {
    format!("Message: {lhs} + {rhs} equals {sum}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_template() {
        assert_eq!(render(3, 4, 7), "Message: 3 + 4 equals 7.");
    }

    #[test]
    fn negative_operands() {
        assert_eq!(render(-1, 1, 0), "Message: -1 + 1 equals 0.");
        assert_eq!(render(-5, -6, -11), "Message: -5 + -6 equals -11.");
    }

    #[test]
    fn trusts_the_caller() {
        // The sum is rendered verbatim even when it is not lhs + rhs.
        assert_eq!(render(1, 1, 3), "Message: 1 + 1 equals 3.");
    }

    #[test]
    fn extreme_values() {
        let line = render(i64::MIN, i64::MAX, 0);
        assert_eq!(
            line,
            format!("Message: {} + {} equals 0.", i64::MIN, i64::MAX),
        );
    }
}
