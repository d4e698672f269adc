//! services/validation_service.rs
//! Validación del payload de registro. Funciones puras, sin efectos.
//! Se aplica como chequeo autoritativo en el endpoint; lo que haga el
//! cliente por su cuenta es sólo cortesía.

use crate::models::registration_model::{RegisterRequest, ValidationError};

/// Chequea los cuatro campos obligatorios y el formato del email.
pub fn validate_registration(req: &RegisterRequest) -> Result<(), ValidationError> {
    let filled = |field: &Option<String>| field.as_deref().map_or(false, |v| !v.is_empty());

    if !filled(&req.full_name)
        || !filled(&req.email)
        || !filled(&req.phone)
        || !filled(&req.opportunity_title)
    {
        return Err(ValidationError::MissingField);
    }

    let email = req.email.as_deref().unwrap_or_default();
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Equivalente a `^[^\s@]+@[^\s@]+\.[^\s@]+$`: local@dominio con al
/// menos un punto en el dominio, sin espacios ni '@' extra.
pub fn is_valid_email(email: &str) -> bool {
    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if !clean(local) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    clean(host) && clean(tld)
}
