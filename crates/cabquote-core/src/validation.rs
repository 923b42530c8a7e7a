//! # Validation Module
//!
//! Input validation for quote creation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Desk Command (Rust)                                          │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: business rule validation before save                 │
//! │                                                                         │
//! │  The pricing calculator and document renderer sit BELOW this boundary  │
//! │  and never validate: they are total over their input domain, so a bad  │
//! │  value that slipped past creation renders garbage rather than failing. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::Quote;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a client name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_client_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "clientName".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "clientName".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain a single `@` with text on both sides and a dot in the
///   domain part
///
/// This is a sanity check, not RFC 5321 conformance; the address is only
/// used to compose a `mailto:` link.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain.tld".to_string(),
        });
    }

    Ok(())
}

/// Validates a cabinet dimension (width, height, or depth) in inches.
///
/// ## Rules
/// - Must be finite and strictly positive
pub fn validate_dimension(field: &str, inches: f64) -> ValidationResult<()> {
    if !inches.is_finite() || inches <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a line-item price in dollars.
///
/// ## Rules
/// - Must be finite and non-negative
/// - Zero is allowed (complimentary items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate expressed as a percentage.
///
/// ## Rules
/// - Must be between 0 and 100 (0% to 100%)
pub fn validate_tax_rate_percent(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() || rate < 0.0 || rate > 100.0 {
        return Err(ValidationError::OutOfRange {
            field: "taxRate".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Quote Validator
// =============================================================================

/// Validates a complete quote before it is saved.
///
/// Checks the client fields plus every line item's dimensions and price.
/// Space and item ordering, catalog references, and the total snapshot are
/// not validated: references may legitimately dangle, and the snapshot is
/// recomputed by the store on save.
pub fn validate_quote(quote: &Quote) -> ValidationResult<()> {
    validate_client_name(&quote.client_name)?;
    validate_email(&quote.email)?;

    for space in &quote.spaces {
        for item in &space.items {
            validate_dimension("width", item.width)?;
            validate_dimension("height", item.height)?;
            validate_dimension("depth", item.depth)?;
            validate_price(item.price)?;
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
