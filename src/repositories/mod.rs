//! Acceso al almacén de vehículos
//!
//! Este módulo contiene el seam hacia el almacén remoto: el trait
//! `VehicleStore` y su implementación HTTP.

pub mod vehicle_store;
