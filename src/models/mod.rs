//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente al
//! contrato JSON del almacén remoto de vehículos.

pub mod vehicle;
