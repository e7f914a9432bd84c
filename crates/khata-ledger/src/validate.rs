use khata_data::{Person, TxnKind};

/// Validation errors. Callers check inputs with these before
/// invoking a write; the store itself only coerces types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Amount is not a number: {0:?}")]
    AmountNotNumeric(String),
    #[error("Amount must be a finite, non-negative number: {0}")]
    AmountOutOfRange(f64),
    #[error("Unknown transaction type: {0:?} (expected credit or debit)")]
    UnknownKind(String),
}

/// Parse a user-entered amount. The sign of a transaction lives in
/// its kind, so the magnitude must be finite and non-negative.
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::AmountNotNumeric(input.to_string()))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::AmountOutOfRange(amount));
    }
    Ok(amount)
}

pub fn parse_kind(input: &str) -> Result<TxnKind, ValidationError> {
    TxnKind::parse(input).ok_or_else(|| ValidationError::UnknownKind(input.to_string()))
}

pub fn validate_person(person: &Person) -> Result<(), ValidationError> {
    if person.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), Ok(100.0));
        assert_eq!(parse_amount(" 42.50 "), Ok(42.5));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("ten rupees"),
            Err(ValidationError::AmountNotNumeric(_))
        ));
        assert!(matches!(
            parse_amount(""),
            Err(ValidationError::AmountNotNumeric(_))
        ));
        assert!(matches!(
            parse_amount("-5"),
            Err(ValidationError::AmountOutOfRange(_))
        ));
        assert!(matches!(
            parse_amount("NaN"),
            Err(ValidationError::AmountOutOfRange(_))
        ));
        assert!(matches!(
            parse_amount("inf"),
            Err(ValidationError::AmountOutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("credit"), Ok(TxnKind::Credit));
        assert_eq!(parse_kind("debit"), Ok(TxnKind::Debit));
        assert!(matches!(
            parse_kind("loan"),
            Err(ValidationError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_validate_person() {
        assert_eq!(validate_person(&Person::new("p1", "Alice")), Ok(()));
        assert!(matches!(
            validate_person(&Person::new("p1", "   ")),
            Err(ValidationError::EmptyName)
        ));
    }
}
