//! Modelo de Vehicle
//!
//! Este módulo contiene el registro de vehículo tal como viaja por el
//! contrato JSON del almacén remoto, y los filtros de búsqueda sobre el
//! listado. Los nombres de campo en el wire van en camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registro de vehículo persistido en el almacén remoto.
///
/// `checkout_date` en `None` significa vehículo activo (en el predio);
/// con valor significa que pasó al historial. La partición activo/historial
/// se deriva únicamente de ese campo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Identificador opaco asignado por el almacén al crear; inmutable
    pub id: String,
    pub plate: String,
    pub chassis_number: String,
    pub registration_number: String,
    pub model: String,
    pub make: String,
    pub year: String,
    pub checkin_date: DateTime<Utc>,
    pub checkout_date: Option<DateTime<Utc>>,
}

/// Cuerpo de alta que viaja al almacén: el registro completo sin `id`,
/// que lo asigna el almacén en la respuesta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub plate: String,
    pub chassis_number: String,
    pub registration_number: String,
    pub model: String,
    pub make: String,
    pub year: String,
    pub checkin_date: DateTime<Utc>,
    pub checkout_date: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// Un vehículo está activo mientras no tenga fecha de salida
    pub fn is_active(&self) -> bool {
        self.checkout_date.is_none()
    }

    /// Búsqueda por subcadena, sin distinguir mayúsculas. Con un campo
    /// seleccionado compara solo ese campo; sin campo, contra cualquiera
    /// de los campos descriptivos.
    pub fn matches(&self, field: Option<SearchField>, term: &str) -> bool {
        let term = term.to_lowercase();
        match field {
            Some(field) => field.value_of(self).to_lowercase().contains(&term),
            None => SearchField::ALL
                .iter()
                .any(|f| f.value_of(self).to_lowercase().contains(&term)),
        }
    }
}

/// Campos descriptivos sobre los que se puede buscar. Conjunto cerrado:
/// agregar un campo implica tocar este enum y su tabla de acceso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Plate,
    ChassisNumber,
    RegistrationNumber,
    Model,
    Make,
    Year,
}

impl SearchField {
    pub const ALL: [SearchField; 6] = [
        SearchField::Plate,
        SearchField::ChassisNumber,
        SearchField::RegistrationNumber,
        SearchField::Model,
        SearchField::Make,
        SearchField::Year,
    ];

    pub fn value_of<'a>(&self, vehicle: &'a Vehicle) -> &'a str {
        match self {
            SearchField::Plate => &vehicle.plate,
            SearchField::ChassisNumber => &vehicle.chassis_number,
            SearchField::RegistrationNumber => &vehicle.registration_number,
            SearchField::Model => &vehicle.model,
            SearchField::Make => &vehicle.make,
            SearchField::Year => &vehicle.year,
        }
    }
}

/// Restricción por partición del listado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Partition {
    #[default]
    All,
    Active,
    History,
}

/// Filtros para el listado de vehículos
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub partition: Partition,
    pub field: Option<SearchField>,
    pub term: Option<String>,
}

impl VehicleFilter {
    pub fn active_only() -> Self {
        Self {
            partition: Partition::Active,
            ..Self::default()
        }
    }

    pub fn history_only() -> Self {
        Self {
            partition: Partition::History,
            ..Self::default()
        }
    }

    pub fn accepts(&self, vehicle: &Vehicle) -> bool {
        let in_partition = match self.partition {
            Partition::All => true,
            Partition::Active => vehicle.is_active(),
            Partition::History => !vehicle.is_active(),
        };
        if !in_partition {
            return false;
        }

        match self.term.as_deref() {
            None | Some("") => true,
            Some(term) => vehicle.matches(self.field, term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            id: "1".to_string(),
            plate: "ABC1D23".to_string(),
            chassis_number: "9BWZZZ377VT004251".to_string(),
            registration_number: "12345678901".to_string(),
            model: "Gol 1.6".to_string(),
            make: "Volkswagen".to_string(),
            year: "2020".to_string(),
            checkin_date: Utc::now(),
            checkout_date: None,
        }
    }

    #[test]
    fn test_partition_follows_checkout_date() {
        let mut vehicle = sample_vehicle();
        assert!(vehicle.is_active());

        vehicle.checkout_date = Some(Utc::now());
        assert!(!vehicle.is_active());
        assert!(VehicleFilter::history_only().accepts(&vehicle));
        assert!(!VehicleFilter::active_only().accepts(&vehicle));
    }

    #[test]
    fn test_matches_any_field() {
        let vehicle = sample_vehicle();
        assert!(vehicle.matches(None, "volks"));
        assert!(vehicle.matches(None, "abc1"));
        assert!(vehicle.matches(None, "2020"));
        assert!(!vehicle.matches(None, "peugeot"));
    }

    #[test]
    fn test_matches_single_field_case_insensitive() {
        let vehicle = sample_vehicle();
        assert!(vehicle.matches(Some(SearchField::Make), "VOLKS"));
        assert!(!vehicle.matches(Some(SearchField::Model), "volks"));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let vehicle = sample_vehicle();
        let json = serde_json::to_value(&vehicle).unwrap();

        assert!(json.get("chassisNumber").is_some());
        assert!(json.get("registrationNumber").is_some());
        assert!(json.get("checkinDate").is_some());
        // la salida nula viaja explícita, no se omite
        assert!(json.get("checkoutDate").unwrap().is_null());
    }
}
