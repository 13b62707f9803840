use crate::errors::DomainError;

const MIN_FQDN_LEN: usize = 2;
const MAX_FQDN_LEN: usize = 255;
const IDN_PREFIX: &str = "xn--";

/// Syntactic check of a hostname before it is accepted into the store.
///
/// Only lower-case names are accepted: keys are stored exactly as written and
/// looked up with the normalized (lower-cased) query name.
pub fn check_fqdn(fqdn: &str) -> Result<(), DomainError> {
    if fqdn.len() > MAX_FQDN_LEN {
        return Err(DomainError::InvalidDomain(
            "domain name cannot be larger than 255 characters".to_string(),
        ));
    }
    if fqdn.len() < MIN_FQDN_LEN {
        return Err(DomainError::InvalidDomain(
            "domain name cannot be less than 2 characters".to_string(),
        ));
    }
    if fqdn.starts_with('.') || fqdn.ends_with('.') {
        return Err(DomainError::InvalidDomain(
            "domain name cannot start or end with \".\"".to_string(),
        ));
    }

    for label in fqdn.split('.') {
        check_label(label.strip_prefix(IDN_PREFIX).unwrap_or(label))?;
    }

    Ok(())
}

fn check_label(label: &str) -> Result<(), DomainError> {
    if label.is_empty() {
        return Err(DomainError::InvalidDomain(
            "two consecutive \".\" cannot appear in the domain name".to_string(),
        ));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(DomainError::InvalidDomain(
            "subdomain names cannot start or end with \"-\"".to_string(),
        ));
    }
    if !label
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(DomainError::InvalidDomain(
            "domain name can only consist of a-z,0-9,\"-\",\".\"".to_string(),
        ));
    }
    Ok(())
}
