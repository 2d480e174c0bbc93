//! Servicios
//!
//! Este módulo contiene la exportación del listado de vehículos a
//! reporte tabular.

pub mod export_service;
