//! Input checks applied before a provider is called.

use crate::fetch::ProviderError;

/// Normalizes an exchange ticker: 1 to 10 characters, upper-cased.
pub fn validate_stock_symbol(symbol: &str) -> Result<String, ProviderError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ProviderError::Validation {
            field: "symbol",
            message: "Stock symbol is required".to_string(),
        });
    }
    if symbol.chars().count() > 10 {
        return Err(ProviderError::Validation {
            field: "symbol",
            message: "Stock symbol must be between 1 and 10 characters".to_string(),
        });
    }
    Ok(symbol.to_uppercase())
}

/// Mutual fund scheme codes are exactly six digits.
pub fn validate_fund_code(code: &str) -> Result<String, ProviderError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ProviderError::Validation {
            field: "code",
            message: "Mutual fund code is required".to_string(),
        });
    }
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProviderError::Validation {
            field: "code",
            message: "Mutual fund code must be 6 digits".to_string(),
        });
    }
    Ok(code.to_string())
}
