use regex::Regex;
use tracing::debug;

use shared_models::{NewDoctor, NewPatient, PortalError};

const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 100;
const MIN_PASSWORD_LEN: usize = 6;

/// Client-side checks run before a registration form is posted.
pub struct FormValidator {
    email: Regex,
    phone: Regex,
}

impl FormValidator {
    pub fn new() -> Result<Self, PortalError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| PortalError::Config(format!("bad validation pattern: {}", e)))
        };

        Ok(Self {
            email: compile(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?,
            phone: compile(r"^\d{10}$")?,
        })
    }

    pub fn validate_doctor(&self, doctor: &NewDoctor) -> Result<(), PortalError> {
        debug!("Validating doctor form for: {}", doctor.email);

        self.check_name(&doctor.name)?;
        self.check_email(&doctor.email)?;
        self.check_phone(&doctor.phone)?;
        self.check_password(&doctor.password)?;

        if doctor.specialty.trim().is_empty() {
            return Err(PortalError::Validation("Specialty is required".to_string()));
        }
        if doctor.available_times.is_empty() {
            return Err(PortalError::Validation("Select at least one available time".to_string()));
        }

        Ok(())
    }

    pub fn validate_patient(&self, patient: &NewPatient) -> Result<(), PortalError> {
        debug!("Validating patient form for: {}", patient.email);

        self.check_name(&patient.name)?;
        self.check_email(&patient.email)?;
        self.check_phone(&patient.phone)?;
        self.check_password(&patient.password)?;

        if patient.address.trim().is_empty() {
            return Err(PortalError::Validation("Address is required".to_string()));
        }

        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<(), PortalError> {
        let len = name.trim().chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
            return Err(PortalError::Validation(format!(
                "Name must be between {} and {} characters",
                MIN_NAME_LEN, MAX_NAME_LEN
            )));
        }
        Ok(())
    }

    fn check_email(&self, email: &str) -> Result<(), PortalError> {
        if !self.email.is_match(email.trim()) {
            return Err(PortalError::Validation(format!("Invalid email address: {}", email)));
        }
        Ok(())
    }

    fn check_phone(&self, phone: &str) -> Result<(), PortalError> {
        if !self.phone.is_match(phone.trim()) {
            return Err(PortalError::Validation("Phone number must be 10 digits".to_string()));
        }
        Ok(())
    }

    fn check_password(&self, password: &str) -> Result<(), PortalError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PortalError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn doctor() -> NewDoctor {
        NewDoctor {
            name: "Dr. Grace Hopper".to_string(),
            email: "grace@clinic.test".to_string(),
            phone: "5551234567".to_string(),
            password: "cobol1959".to_string(),
            specialty: "Neurology".to_string(),
            available_times: vec!["09:00-10:00".to_string()],
        }
    }

    #[test]
    fn accepts_complete_doctor_form() {
        let validator = FormValidator::new().unwrap();
        assert!(validator.validate_doctor(&doctor()).is_ok());
    }

    #[test]
    fn rejects_bad_phone() {
        let validator = FormValidator::new().unwrap();
        let form = NewDoctor { phone: "555-1234".to_string(), ..doctor() };
        assert_matches!(validator.validate_doctor(&form), Err(PortalError::Validation(msg)) if msg.contains("10 digits"));
    }

    #[test]
    fn rejects_bad_email() {
        let validator = FormValidator::new().unwrap();
        let form = NewDoctor { email: "grace.clinic.test".to_string(), ..doctor() };
        assert_matches!(validator.validate_doctor(&form), Err(PortalError::Validation(_)));
    }

    #[test]
    fn requires_an_available_time() {
        let validator = FormValidator::new().unwrap();
        let form = NewDoctor { available_times: Vec::new(), ..doctor() };
        assert_matches!(validator.validate_doctor(&form), Err(PortalError::Validation(msg)) if msg.contains("available time"));
    }

    #[test]
    fn rejects_short_password_and_name() {
        let validator = FormValidator::new().unwrap();
        let form = NewDoctor { password: "123".to_string(), ..doctor() };
        assert!(validator.validate_doctor(&form).is_err());
        let form = NewDoctor { name: "Al".to_string(), ..doctor() };
        assert!(validator.validate_doctor(&form).is_err());
    }

    #[test]
    fn patient_needs_address() {
        let validator = FormValidator::new().unwrap();
        let form = NewPatient {
            name: "Pat Smith".to_string(),
            email: "pat@example.com".to_string(),
            password: "secret1".to_string(),
            phone: "5559876543".to_string(),
            address: " ".to_string(),
        };
        assert_matches!(validator.validate_patient(&form), Err(PortalError::Validation(msg)) if msg.contains("Address"));
    }
}
