//! Exportación del listado de vehículos
//!
//! Este módulo arma el reporte tabular del conjunto de registros: una
//! tabla de texto alineada para la consola y un documento CSV
//! descargable. Solo renderiza sobre un listado ya traído; buscar los
//! datos es problema del llamador.

use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

use crate::models::vehicle::Vehicle;

/// Columnas del reporte, en el orden del documento
pub const REPORT_HEADER: [&str; 9] = [
    "id",
    "plate",
    "chassisNumber",
    "registrationNumber",
    "model",
    "make",
    "year",
    "checkinDate",
    "checkoutDate",
];

/// Formatear una fecha para el reporte
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y %H:%M").to_string()
}

/// Fecha opcional: vacía cuando el vehículo sigue activo
pub fn format_optional_date(date: &Option<DateTime<Utc>>) -> String {
    date.as_ref().map(format_date).unwrap_or_default()
}

fn report_row(vehicle: &Vehicle) -> [String; 9] {
    [
        vehicle.id.clone(),
        vehicle.plate.clone(),
        vehicle.chassis_number.clone(),
        vehicle.registration_number.clone(),
        vehicle.model.clone(),
        vehicle.make.clone(),
        vehicle.year.clone(),
        format_date(&vehicle.checkin_date),
        format_optional_date(&vehicle.checkout_date),
    ]
}

/// Renderizar la tabla de texto alineada (también la usa el listado de
/// la consola)
pub fn render_table(vehicles: &[Vehicle]) -> String {
    let rows: Vec<[String; 9]> = vehicles.iter().map(report_row).collect();

    // ancho de cada columna: el mayor entre encabezado y celdas
    let mut widths: Vec<usize> = REPORT_HEADER.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render_line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let header: Vec<String> = REPORT_HEADER.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![render_line(&header)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        lines.push(render_line(row));
    }

    lines.join("\n")
}

/// Escribir el reporte CSV sobre cualquier destino de escritura
pub fn write_csv<W: Write>(vehicles: &[Vehicle], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(REPORT_HEADER)?;
    for vehicle in vehicles {
        csv_writer.write_record(report_row(vehicle))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Exportar el reporte CSV a un archivo
pub fn export_csv(vehicles: &[Vehicle], path: &Path) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_csv(vehicles, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_vehicles() -> Vec<Vehicle> {
        let checkin = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        vec![
            Vehicle {
                id: "1".to_string(),
                plate: "ABC1D23".to_string(),
                chassis_number: "9BWZZZ377VT004251".to_string(),
                registration_number: "12345678901".to_string(),
                model: "Gol 1.6".to_string(),
                make: "Volkswagen".to_string(),
                year: "2020".to_string(),
                checkin_date: checkin,
                checkout_date: None,
            },
            Vehicle {
                id: "2".to_string(),
                plate: "XYZ9876".to_string(),
                chassis_number: "8AWZZZ377VT004252".to_string(),
                registration_number: "98765432109".to_string(),
                model: "Uno".to_string(),
                make: "Fiat".to_string(),
                year: "2015".to_string(),
                checkin_date: checkin,
                checkout_date: Some(Utc.with_ymd_and_hms(2024, 3, 6, 9, 15, 0).unwrap()),
            },
        ]
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_record() {
        let mut buffer = Vec::new();
        write_csv(&sample_vehicles(), &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,plate,chassisNumber"));
        // el activo va con la salida en blanco
        assert!(lines[1].ends_with("05/03/2024 14:30,"));
        assert!(lines[2].contains("06/03/2024 09:15"));
    }

    #[test]
    fn test_render_table_contains_every_record() {
        let table = render_table(&sample_vehicles());

        assert!(table.contains("plate"));
        assert!(table.contains("ABC1D23"));
        assert!(table.contains("XYZ9876"));
        assert!(table.contains("05/03/2024 14:30"));
    }

    #[test]
    fn test_render_table_on_empty_listing() {
        let table = render_table(&[]);
        assert!(table.contains("checkoutDate"));
    }
}
