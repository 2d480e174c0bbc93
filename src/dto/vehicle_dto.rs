use serde::Deserialize;

// Datos crudos del formulario de alta/edición. Todo viaja como texto tal
// cual lo tipeó el usuario; la validación decide si sirve.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInput {
    pub plate: String,
    pub chassis_number: String,
    pub registration_number: String,
    pub model: String,
    pub make: String,
    pub year: String,
}

impl VehicleInput {
    /// Copia normalizada: campos sin espacios en los bordes y placa en
    /// mayúsculas. Se aplica antes de validar y de enviar al almacén.
    pub fn normalized(&self) -> VehicleInput {
        VehicleInput {
            plate: self.plate.trim().to_uppercase(),
            chassis_number: self.chassis_number.trim().to_string(),
            registration_number: self.registration_number.trim().to_string(),
            model: self.model.trim().to_string(),
            make: self.make.trim().to_string(),
            year: self.year.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_uppercases_plate_and_trims() {
        let input = VehicleInput {
            plate: " abc1d23 ".to_string(),
            chassis_number: "9BWZZZ377VT004251 ".to_string(),
            registration_number: " 12345678901".to_string(),
            model: " Gol 1.6 ".to_string(),
            make: "Volkswagen".to_string(),
            year: " 2020 ".to_string(),
        };

        let normalized = input.normalized();
        assert_eq!(normalized.plate, "ABC1D23");
        assert_eq!(normalized.chassis_number, "9BWZZZ377VT004251");
        assert_eq!(normalized.model, "Gol 1.6");
        assert_eq!(normalized.year, "2020");
    }
}
