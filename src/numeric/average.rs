/// Arithmetic mean of `values`, or `None` when there is nothing to average.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: f64 = values.iter().sum();
    Some(total / values.len() as f64)
}

/// Renders the outcome the way the `average` command prints it.
pub fn describe_average(values: &[f64]) -> String {
    match average(values) {
        Some(mean) => format!("Passed arguments average: {mean:.10}"),
        None => "Arguments missing".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_integers() {
        assert_eq!(average(&[10.0, 20.0, 30.0]), Some(20.0));
        assert_eq!(average(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    }

    #[test]
    fn averages_mixed_magnitudes() {
        let values = [
            5.5, 10.1, 7.3, 100.0, 200.0, 4_654_878.0, 4.0, 0.000_000_5, 0.000_003, 0.000_000_4,
            0.000_000_07,
        ];
        let mean = average(&values).unwrap();
        assert!((mean - 423_200.445_454_906_3).abs() < 1e-6, "mean was {mean}");
    }

    #[test]
    fn empty_input_has_no_average() {
        assert_eq!(average(&[]), None);
        assert_eq!(describe_average(&[]), "Arguments missing");
    }

    #[test]
    fn description_uses_ten_decimals() {
        assert_eq!(
            describe_average(&[10.0, 20.0, 30.0]),
            "Passed arguments average: 20.0000000000"
        );
        assert_eq!(describe_average(&[-1.0, 2.0]), "Passed arguments average: 0.5000000000");
    }
}
