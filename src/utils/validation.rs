//! Reglas de validación de los campos del vehículo
//!
//! Este módulo contiene las funciones de validación puras: cada campo
//! tiene su predicado independiente que recibe el texto crudo y devuelve
//! un veredicto con mensaje legible. Ninguna función lanza pánico ni
//! muta su argumento; la normalización de la placa a mayúsculas la hace
//! el llamador antes de mostrar, aquí solo se re-normaliza para evaluar.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::dto::vehicle_dto::VehicleInput;

lazy_static! {
    /// Patrón Mercosur (ABC1D23) y patrón antiguo (ABC1234) sobre la placa en mayúsculas
    static ref PLATE_REGEX: Regex = Regex::new(r"^[A-Z]{3}[0-9][A-Z0-9][0-9]{2}$").unwrap();
    /// 17 caracteres alfanuméricos, sin I, O ni Q
    static ref CHASSIS_REGEX: Regex = Regex::new(r"(?i)^[A-HJ-NPR-Z0-9]{17}$").unwrap();
    /// Renavam: exactamente 11 dígitos
    static ref REGISTRATION_REGEX: Regex = Regex::new(r"^[0-9]{11}$").unwrap();
    /// Modelo/marca: letras (incluye acentuadas Latin-1), dígitos, espacio, guion y punto
    static ref NAME_REGEX: Regex = Regex::new(r"^[A-Za-zÀ-ÿ0-9\s\-\.]{2,50}$").unwrap();
}

fn field_error(code: &'static str, message: String, value: &str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error.add_param("value".into(), &value.to_string());
    error
}

/// Validar placa (patrón Mercosur y patrón antiguo)
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    if PLATE_REGEX.is_match(&value.to_uppercase()) {
        return Ok(());
    }
    Err(field_error(
        "plate",
        "La placa debe seguir el patrón Mercosur (ABC1D23) o el patrón antiguo (ABC1234)".to_string(),
        value,
    ))
}

/// Validar número de chasis (17 caracteres alfanuméricos, excepto I, O y Q)
pub fn validate_chassis_number(value: &str) -> Result<(), ValidationError> {
    if CHASSIS_REGEX.is_match(value) {
        return Ok(());
    }
    Err(field_error(
        "chassisNumber",
        "El chasis debe contener 17 caracteres alfanuméricos (excepto I, O y Q)".to_string(),
        value,
    ))
}

/// Validar renavam (11 dígitos)
pub fn validate_registration_number(value: &str) -> Result<(), ValidationError> {
    if REGISTRATION_REGEX.is_match(value) {
        return Ok(());
    }
    Err(field_error(
        "registrationNumber",
        "El renavam debe contener exactamente 11 dígitos numéricos".to_string(),
        value,
    ))
}

/// Validar modelo (entre 2 y 50 caracteres)
pub fn validate_model(value: &str) -> Result<(), ValidationError> {
    if NAME_REGEX.is_match(value) {
        return Ok(());
    }
    Err(field_error(
        "model",
        "El modelo debe tener entre 2 y 50 caracteres".to_string(),
        value,
    ))
}

/// Validar marca (entre 2 y 50 caracteres)
pub fn validate_make(value: &str) -> Result<(), ValidationError> {
    if NAME_REGEX.is_match(value) {
        return Ok(());
    }
    Err(field_error(
        "make",
        "La marca debe tener entre 2 y 50 caracteres".to_string(),
        value,
    ))
}

/// Validar año: 4 dígitos exactos y valor entre 1900 y el año en curso + 1.
/// El largo se exige aparte del rango numérico: "99" y "020000" fallan
/// aunque su valor numérico fuera admisible.
pub fn validate_year(value: &str) -> Result<(), ValidationError> {
    let max_year = Utc::now().year() + 1;
    match value.parse::<i32>() {
        Ok(year) if value.len() == 4 && (1900..=max_year).contains(&year) => Ok(()),
        _ => Err(field_error(
            "year",
            format!("El año debe tener 4 dígitos y estar entre 1900 y {}", max_year),
            value,
        )),
    }
}

fn check_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    rule: fn(&str) -> Result<(), ValidationError>,
) {
    if value.trim().is_empty() {
        errors.add(
            field,
            field_error("required", format!("Complete el campo {}", field), value),
        );
    } else if let Err(error) = rule(value) {
        errors.add(field, error);
    }
}

/// Validar todos los campos de un alta/edición de vehículo.
///
/// Recorre el conjunto cerrado de campos y acumula TODAS las fallas en un
/// `ValidationErrors` por campo, de modo que el usuario vea los problemas
/// en conjunto y no solo el primero. Agregar un campo nuevo exige tocar
/// esta secuencia, verificada en compilación.
pub fn validate_vehicle(input: &VehicleInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_field(&mut errors, "plate", &input.plate, validate_plate);
    check_field(&mut errors, "chassisNumber", &input.chassis_number, validate_chassis_number);
    check_field(&mut errors, "registrationNumber", &input.registration_number, validate_registration_number);
    check_field(&mut errors, "model", &input.model, validate_model);
    check_field(&mut errors, "make", &input.make, validate_make);
    check_field(&mut errors, "year", &input.year, validate_year);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Orden estable de los campos para reportar mensajes
const FIELD_ORDER: [&str; 6] = [
    "plate",
    "chassisNumber",
    "registrationNumber",
    "model",
    "make",
    "year",
];

/// Aplanar los errores acumulados en mensajes para la capa de presentación
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut messages = Vec::new();

    for field in FIELD_ORDER {
        if let Some(list) = field_errors.get(field) {
            for error in list.iter() {
                match &error.message {
                    Some(message) => messages.push(message.to_string()),
                    None => messages.push(format!("Campo inválido: {}", field)),
                }
            }
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_plate_mercosur() {
        assert!(validate_plate("ABC1D23").is_ok());
        // la validación re-normaliza a mayúsculas internamente
        assert!(validate_plate("abc1d23").is_ok());
    }

    #[test]
    fn test_validate_plate_legacy() {
        assert!(validate_plate("ABC1234").is_ok());
    }

    #[test]
    fn test_validate_plate_invalid() {
        assert!(validate_plate("AB1234").is_err());
        assert!(validate_plate("ABCD123").is_err());
        assert!(validate_plate("ABC1D234").is_err());
        assert!(validate_plate("").is_err());
    }

    #[test]
    fn test_validate_chassis_number() {
        assert!(validate_chassis_number("1HGCM82633A004352").is_ok());
        assert!(validate_chassis_number("1hgcm82633a004352").is_ok());
        // letra I excluida
        assert!(validate_chassis_number("IHGCM82633A004352").is_err());
        assert!(validate_chassis_number("OHGCM82633A004352").is_err());
        assert!(validate_chassis_number("QHGCM82633A004352").is_err());
        // largo distinto de 17
        assert!(validate_chassis_number("1HGCM82633A00435").is_err());
        assert!(validate_chassis_number("1HGCM82633A0043521").is_err());
    }

    #[test]
    fn test_validate_registration_number() {
        assert!(validate_registration_number("12345678901").is_ok());
        assert!(validate_registration_number("00345678901").is_ok());
        assert!(validate_registration_number("1234567890").is_err());
        assert!(validate_registration_number("123456789012").is_err());
        assert!(validate_registration_number("1234567890A").is_err());
    }

    #[test]
    fn test_validate_model_and_make() {
        assert!(validate_model("Gol 1.6").is_ok());
        assert!(validate_model("Ka").is_ok());
        assert!(validate_make("Citroën").is_ok());
        assert!(validate_make("Mercedes-Benz").is_ok());
        assert!(validate_model("X").is_err());
        assert!(validate_model(&"A".repeat(51)).is_err());
        assert!(validate_make("Fiat!").is_err());
    }

    #[test]
    fn test_validate_year() {
        let current = Utc::now().year();

        assert!(validate_year("2024").is_ok());
        assert!(validate_year("1900").is_ok());
        assert!(validate_year(&(current + 1).to_string()).is_ok());

        assert!(validate_year("1899").is_err());
        assert!(validate_year(&(current + 2).to_string()).is_err());
        assert!(validate_year("no-num").is_err());
    }

    #[test]
    fn test_validate_year_requires_four_digits() {
        // numéricamente plausibles pero con largo distinto de 4
        assert!(validate_year("99").is_err());
        assert!(validate_year("020000").is_err());
        assert!(validate_year("02024").is_err());
    }

    #[test]
    fn test_validate_vehicle_accumulates_all_failures() {
        let input = VehicleInput {
            plate: "XX".to_string(),
            chassis_number: "corto".to_string(),
            registration_number: "123".to_string(),
            model: "".to_string(),
            make: "VW".to_string(),
            year: "99".to_string(),
        };

        let errors = validate_vehicle(&input).unwrap_err();
        let messages = validation_messages(&errors);

        // todas las fallas juntas, no solo la primera
        assert_eq!(messages.len(), 5);
        assert!(messages.iter().any(|m| m.contains("placa")));
        assert!(messages.iter().any(|m| m.contains("model")));
    }

    #[test]
    fn test_validate_vehicle_ok() {
        let input = VehicleInput {
            plate: "ABC1D23".to_string(),
            chassis_number: "9BWZZZ377VT004251".to_string(),
            registration_number: "12345678901".to_string(),
            model: "Gol 1.6".to_string(),
            make: "Volkswagen".to_string(),
            year: "2020".to_string(),
        };

        assert!(validate_vehicle(&input).is_ok());
    }
}
