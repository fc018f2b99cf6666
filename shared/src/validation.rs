//! Validation utilities for LuneStock
//!
//! Field-level checks shared by the backend services and the WASM bindings.

use rust_decimal::Decimal;

// ============================================================================
// Inventory / Sales Validations
// ============================================================================

/// Validate a sale or adjustment quantity (must be strictly positive)
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a unit price (zero is allowed, negative is not)
pub fn validate_unit_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Unit price cannot be negative");
    }
    Ok(())
}

/// Validate an initial stock value for a new variant
pub fn validate_stock(stock: i32) -> Result<(), &'static str> {
    if stock < 0 {
        return Err("Stock cannot be negative");
    }
    Ok(())
}

/// Validate that a variant holds enough stock to fulfill a sale.
/// Selling the exact remaining stock is allowed; one unit more is not.
pub fn validate_sufficient_stock(stock: i32, quantity: i32) -> Result<(), &'static str> {
    if quantity > stock {
        return Err("Insufficient stock for the requested quantity");
    }
    Ok(())
}

/// Validate a product, size or color name (non-empty after trimming)
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty");
    }
    Ok(())
}

/// Validate a color hex code in `#RRGGBB` form
pub fn validate_hex_color(hex: &str) -> Result<(), &'static str> {
    let rest = match hex.strip_prefix('#') {
        Some(rest) => rest,
        None => return Err("Hex color must start with '#'"),
    };
    if rest.len() != 6 {
        return Err("Hex color must be in #RRGGBB format");
    }
    if !rest.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Hex color contains invalid characters");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Decimal::from_str("39.9").unwrap()).is_ok());
        assert!(validate_unit_price(Decimal::ZERO).is_ok());
        assert!(validate_unit_price(Decimal::from_str("-0.01").unwrap()).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(50).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_sufficient_stock() {
        assert!(validate_sufficient_stock(10, 2).is_ok());
        assert!(validate_sufficient_stock(10, 10).is_ok()); // exact remainder
        assert!(validate_sufficient_stock(10, 11).is_err());
        assert!(validate_sufficient_stock(0, 1).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Polo Basico").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_hex_color_valid() {
        assert!(validate_hex_color("#000000").is_ok());
        assert!(validate_hex_color("#FFFDD0").is_ok());
        assert!(validate_hex_color("#a52a2a").is_ok());
    }

    #[test]
    fn test_validate_hex_color_invalid() {
        assert!(validate_hex_color("000000").is_err()); // Missing '#'
        assert!(validate_hex_color("#FFF").is_err()); // Short form
        assert!(validate_hex_color("#GGGGGG").is_err()); // Not hex
        assert!(validate_hex_color("#0000000").is_err()); // Too long
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("admin@lunestock.com").is_ok());
        assert!(validate_email("user.name@domain.pe").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
    }
}
