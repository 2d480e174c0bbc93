//! Cliente HTTP del almacén remoto de vehículos
//!
//! Este módulo define el contrato `VehicleStore` que consume el
//! controlador y la implementación `HttpVehicleStore` sobre reqwest.
//! El trait es el único colaborador lógico: los tests lo reemplazan por
//! un doble en memoria y el binario inyecta la versión HTTP.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::RegistryResult;

/// Contrato del almacén remoto (REST)
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// `GET {base}` — todos los registros, en el orden natural del almacén
    async fn fetch_all(&self) -> RegistryResult<Vec<Vehicle>>;

    /// `GET {base}/{id}` — `None` cuando el registro no existe
    async fn fetch_by_id(&self, id: &str) -> RegistryResult<Option<Vehicle>>;

    /// `POST {base}` — devuelve el registro creado con el id asignado
    async fn create(&self, vehicle: &NewVehicle) -> RegistryResult<Vehicle>;

    /// `PUT {base}/{id}` — reemplaza el registro completo
    async fn update(&self, id: &str, vehicle: &Vehicle) -> RegistryResult<Vehicle>;

    /// `DELETE {base}/{id}` — el éxito lo señala solo el estado HTTP
    async fn delete(&self, id: &str) -> RegistryResult<()>;
}

/// Implementación HTTP del almacén
pub struct HttpVehicleStore {
    client: Client,
    base_url: String,
}

impl HttpVehicleStore {
    /// Crear el cliente HTTP con timeout configurable
    pub fn new(base_url: String, timeout_secs: u64) -> RegistryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &EnvironmentConfig) -> RegistryResult<Self> {
        Self::new(config.api_base_url.clone(), config.http_timeout_secs)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl VehicleStore for HttpVehicleStore {
    async fn fetch_all(&self) -> RegistryResult<Vec<Vehicle>> {
        let vehicles = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(vehicles)
    }

    async fn fetch_by_id(&self, id: &str) -> RegistryResult<Option<Vehicle>> {
        // La consulta por id del colaborador responde una lista de cero o
        // un registro; acá se desarma y la lista vacía pasa a ser None.
        let vehicles: Vec<Vehicle> = self
            .client
            .get(&self.record_url(id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(vehicles.into_iter().next())
    }

    async fn create(&self, vehicle: &NewVehicle) -> RegistryResult<Vehicle> {
        let created = self
            .client
            .post(&self.base_url)
            .json(vehicle)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(created)
    }

    async fn update(&self, id: &str, vehicle: &Vehicle) -> RegistryResult<Vehicle> {
        let updated = self
            .client
            .put(&self.record_url(id))
            .json(vehicle)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> RegistryResult<()> {
        self.client
            .delete(&self.record_url(id))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
