//! Result type alias for WhatsFlow

use super::errors::WhatsFlowError;

/// Result type alias for WhatsFlow operations
///
/// # Examples
///
/// ```
/// use whatsflow::domain::result::Result;
/// use whatsflow::domain::errors::WhatsFlowError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(WhatsFlowError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, WhatsFlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(WhatsFlowError::NotFound("plan 9".to_string()));
        assert!(result.is_err());
    }
}
