//! Controlador del ciclo de vida de vehículos
//!
//! Media toda operación que cambia el conjunto de registros: valida
//! antes de mutar, estampa las fechas de entrada/salida y deriva la
//! partición activo/historial. La validación local es consultiva: ahorra
//! viajes, pero el almacén remoto sigue siendo la fuente de verdad y
//! puede rechazar por su cuenta.

use chrono::Utc;
use tracing::{info, warn};

use crate::dto::vehicle_dto::VehicleInput;
use crate::models::vehicle::{NewVehicle, Vehicle, VehicleFilter};
use crate::repositories::vehicle_store::VehicleStore;
use crate::utils::errors::{not_found_error, RegistryResult};
use crate::utils::validation::validate_vehicle;

/// Controlador sobre un `VehicleStore`. Se construye una sola vez al
/// arrancar y se inyecta a la capa de presentación.
pub struct VehicleController<S: VehicleStore> {
    store: S,
}

impl<S: VehicleStore> VehicleController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Acceso al colaborador inyectado
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Listar aplicando la partición y el filtro de búsqueda. Solo lee;
    /// conserva el orden natural del almacén.
    pub async fn list(&self, filter: &VehicleFilter) -> RegistryResult<Vec<Vehicle>> {
        let vehicles = self.store.fetch_all().await?;
        Ok(vehicles
            .into_iter()
            .filter(|vehicle| filter.accepts(vehicle))
            .collect())
    }

    pub async fn list_active(&self) -> RegistryResult<Vec<Vehicle>> {
        self.list(&VehicleFilter::active_only()).await
    }

    pub async fn list_history(&self) -> RegistryResult<Vec<Vehicle>> {
        self.list(&VehicleFilter::history_only()).await
    }

    /// Registrar un vehículo nuevo. Si algún campo falla, se reportan
    /// todas las fallas juntas y el almacén no se toca. El registro nace
    /// activo, con la entrada estampada al momento del alta.
    pub async fn create(&self, input: &VehicleInput) -> RegistryResult<Vehicle> {
        let input = input.normalized();
        if let Err(errors) = validate_vehicle(&input) {
            warn!("Alta rechazada por validación: {} campo(s)", errors.field_errors().len());
            return Err(errors.into());
        }

        let record = NewVehicle {
            plate: input.plate,
            chassis_number: input.chassis_number,
            registration_number: input.registration_number,
            model: input.model,
            make: input.make,
            year: input.year,
            checkin_date: Utc::now(),
            checkout_date: None,
        };

        let created = self.store.create(&record).await?;
        info!("Vehículo {} registrado con id {}", created.plate, created.id);
        Ok(created)
    }

    /// Editar los campos descriptivos de un registro existente. Pasa por
    /// la misma validación que el alta y conserva las fechas de entrada y
    /// salida del registro actual.
    pub async fn update(&self, id: &str, input: &VehicleInput) -> RegistryResult<Vehicle> {
        let input = input.normalized();
        validate_vehicle(&input)?;

        let current = self.fetch_existing(id).await?;
        let record = Vehicle {
            id: current.id,
            plate: input.plate,
            chassis_number: input.chassis_number,
            registration_number: input.registration_number,
            model: input.model,
            make: input.make,
            year: input.year,
            checkin_date: current.checkin_date,
            checkout_date: current.checkout_date,
        };

        let updated = self.store.update(id, &record).await?;
        info!("Vehículo {} actualizado", id);
        Ok(updated)
    }

    /// Registrar la salida: estampa `checkout_date` y reescribe el
    /// registro completo. Las fechas no son texto editado por el usuario,
    /// así que no se re-valida ningún campo. No es idempotente: una
    /// segunda salida sobrescribe la marca anterior en lugar de
    /// rechazarse (supuesto mono-usuario, sin lock optimista).
    pub async fn checkout(&self, id: &str) -> RegistryResult<Vehicle> {
        let mut vehicle = self.fetch_existing(id).await?;
        vehicle.checkout_date = Some(Utc::now());

        let updated = self.store.update(id, &vehicle).await?;
        info!("Salida registrada para el vehículo {}", id);
        Ok(updated)
    }

    /// Retornar el vehículo a activos: limpia `checkout_date`. La marca
    /// anterior se pierde; no queda rastro de salidas previas.
    pub async fn return_vehicle(&self, id: &str) -> RegistryResult<Vehicle> {
        let mut vehicle = self.fetch_existing(id).await?;
        vehicle.checkout_date = None;

        let updated = self.store.update(id, &vehicle).await?;
        info!("Vehículo {} retornado a activos", id);
        Ok(updated)
    }

    /// Eliminar el registro. No se verifica existencia previa: la
    /// semántica del borrado de un id inexistente queda en manos del
    /// almacén.
    pub async fn delete(&self, id: &str) -> RegistryResult<()> {
        self.store.delete(id).await?;
        info!("Vehículo {} eliminado", id);
        Ok(())
    }

    async fn fetch_existing(&self, id: &str) -> RegistryResult<Vehicle> {
        self.store
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehículo", id))
    }
}
