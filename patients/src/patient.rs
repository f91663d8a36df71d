use super::EmergencyCode;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub symptom: String,
    pub code: EmergencyCode,
}

impl Patient {
    pub fn new(name: impl Into<String>, symptom: impl Into<String>, code: EmergencyCode) -> Self {
        Self {
            name: name.into(),
            symptom: symptom.into(),
            code,
        }
    }
}

// patients compare by urgency only, name and symptom are ignored

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Patient {}

impl PartialOrd for Patient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Patient {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.symptom, self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 3 comma separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("missing emergency code")]
    MissingCode,
    #[error("unknown emergency code {0:?}")]
    UnknownCode(char),
}

/// Parses a `name, symptom, code` record. Only the first character of the
/// code field is significant.
impl FromStr for Patient {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [name, symptom, code] = fields[..] else {
            return Err(ParseError::FieldCount {
                found: fields.len(),
            });
        };
        let code = code.chars().next().ok_or(ParseError::MissingCode)?;
        let code = EmergencyCode::from_char(code).ok_or(ParseError::UnknownCode(code))?;
        Ok(Self::new(name, symptom, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record() {
        let patient: Patient = "Juan Perez, Fractura de pierna, c".parse().unwrap();
        assert_eq!(patient.name, "Juan Perez");
        assert_eq!(patient.symptom, "Fractura de pierna");
        assert_eq!(patient.code, EmergencyCode::C);
        assert_eq!(patient.to_string(), "Juan Perez, Fractura de pierna, C");
    }

    #[test]
    fn parse_uses_first_code_char() {
        let patient: Patient = "Ana, Fiebre, Bx".parse().unwrap();
        assert_eq!(patient.code, EmergencyCode::B);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "Ana, Fiebre".parse::<Patient>().unwrap_err(),
            ParseError::FieldCount { found: 2 }
        );
        assert_eq!(
            "Ana, Fiebre, A, extra".parse::<Patient>().unwrap_err(),
            ParseError::FieldCount { found: 4 }
        );
        assert_eq!(
            "Ana, Fiebre,  ".parse::<Patient>().unwrap_err(),
            ParseError::MissingCode
        );
        assert_eq!(
            "Ana, Fiebre, Z".parse::<Patient>().unwrap_err(),
            ParseError::UnknownCode('Z')
        );
    }

    #[test]
    fn order_ignores_name_and_symptom() {
        let a = Patient::new("Maria Ramirez", "Apendicitis", EmergencyCode::A);
        let other_a = Patient::new("Luis", "Infarto", EmergencyCode::A);
        let e = Patient::new("Lorenzo Toledo", "Chikunguya", EmergencyCode::E);
        assert!(a < e);
        assert_eq!(a, other_a);
    }

    #[test]
    fn serializes_code_as_letter() {
        let patient = Patient::new("Ana", "Fiebre", EmergencyCode::D);
        let json = serde_json::to_string(&patient).unwrap();
        assert_eq!(json, r#"{"name":"Ana","symptom":"Fiebre","code":"D"}"#);
    }
}
