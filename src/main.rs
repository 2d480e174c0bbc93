//! Consola del registro de entrada/salida de vehículos
//!
//! Superficie de presentación única: un menú interactivo que captura el
//! formulario por stdin y delega todo en el controlador. El controlador
//! se construye una sola vez acá y se pasa a cada acción; no hay estado
//! global. Tras cada mutación se vuelve a traer el listado completo.

use anyhow::Result;
use colored::*;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use vehicle_registry::config::environment::EnvironmentConfig;
use vehicle_registry::controllers::vehicle_controller::VehicleController;
use vehicle_registry::dto::vehicle_dto::VehicleInput;
use vehicle_registry::models::vehicle::{Partition, SearchField, VehicleFilter};
use vehicle_registry::repositories::vehicle_store::{HttpVehicleStore, VehicleStore};
use vehicle_registry::services::export_service;
use vehicle_registry::utils::errors::RegistryError;
use vehicle_registry::utils::validation::validation_messages;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenvy::dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = EnvironmentConfig::from_env();

    info!("🚗 Registro de entrada/salida de vehículos");
    info!("📡 Almacén remoto: {}", config.api_base_url);

    let store = HttpVehicleStore::from_config(&config)?;
    let controller = VehicleController::new(store);

    println!("{}", "🚗 Registro de Vehículos".bright_blue().bold());
    println!("{}", "=========================".bright_blue());

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🟢 Listar vehículos activos");
        println!("2. 📜 Listar historial (con salida)");
        println!("3. 🔍 Buscar / filtrar");
        println!("4. 📝 Registrar vehículo");
        println!("5. ✏️  Editar vehículo");
        println!("6. 🚪 Registrar salida");
        println!("7. ↩️  Retornar vehículo");
        println!("8. 🗑️  Eliminar vehículo");
        println!("9. 📄 Exportar reporte CSV");
        println!("0. 👋 Salir");
        let choice = prompt("Selecciona una opción (0-9): ")?;

        let outcome = match choice.as_str() {
            "1" => list_vehicles(&controller, &VehicleFilter::active_only()).await,
            "2" => list_vehicles(&controller, &VehicleFilter::history_only()).await,
            "3" => search_vehicles(&controller).await,
            "4" => register_vehicle(&controller).await,
            "5" => edit_vehicle(&controller).await,
            "6" => checkout_vehicle(&controller).await,
            "7" => return_vehicle(&controller).await,
            "8" => delete_vehicle(&controller).await,
            "9" => export_report(&controller, &config.export_path).await,
            "0" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                continue;
            }
        };

        // Ningún error tira la consola: se muestra y se vuelve al menú
        if let Err(error) = outcome {
            print_error(&error);
        }
    }

    Ok(())
}

async fn list_vehicles<S: VehicleStore>(
    controller: &VehicleController<S>,
    filter: &VehicleFilter,
) -> Result<(), RegistryError> {
    let vehicles = controller.list(filter).await?;

    if vehicles.is_empty() {
        println!("{}", "(sin registros)".bright_yellow());
    } else {
        println!("{}", export_service::render_table(&vehicles));
        println!("{}", format!("{} registro(s)", vehicles.len()).bright_cyan());
    }

    Ok(())
}

async fn search_vehicles<S: VehicleStore>(
    controller: &VehicleController<S>,
) -> Result<(), RegistryError> {
    println!("Partición: 1=activos, 2=historial, otro=todos");
    let partition = match prompt_lossy("Partición: ").as_str() {
        "1" => Partition::Active,
        "2" => Partition::History,
        _ => Partition::All,
    };

    println!("Campo: 1=placa, 2=chasis, 3=renavam, 4=modelo, 5=marca, 6=año, otro=todos");
    let field = match prompt_lossy("Campo: ").as_str() {
        "1" => Some(SearchField::Plate),
        "2" => Some(SearchField::ChassisNumber),
        "3" => Some(SearchField::RegistrationNumber),
        "4" => Some(SearchField::Model),
        "5" => Some(SearchField::Make),
        "6" => Some(SearchField::Year),
        _ => None,
    };

    let term = prompt_lossy("Texto a buscar: ");
    let filter = VehicleFilter {
        partition,
        field,
        term: if term.is_empty() { None } else { Some(term) },
    };

    list_vehicles(controller, &filter).await
}

async fn register_vehicle<S: VehicleStore>(
    controller: &VehicleController<S>,
) -> Result<(), RegistryError> {
    println!("{}", "📝 NUEVO REGISTRO".bright_cyan().bold());
    let input = read_vehicle_form();

    let created = controller.create(&input).await?;
    println!(
        "{}",
        format!("✅ Vehículo {} registrado con id {}", created.plate, created.id).bright_green()
    );
    list_vehicles(controller, &VehicleFilter::active_only()).await
}

async fn edit_vehicle<S: VehicleStore>(
    controller: &VehicleController<S>,
) -> Result<(), RegistryError> {
    println!("{}", "✏️  EDITAR REGISTRO".bright_cyan().bold());
    let id = prompt_lossy("Id del vehículo: ");
    let input = read_vehicle_form();

    let updated = controller.update(&id, &input).await?;
    println!(
        "{}",
        format!("✅ Vehículo {} actualizado", updated.id).bright_green()
    );
    list_vehicles(controller, &VehicleFilter::default()).await
}

async fn checkout_vehicle<S: VehicleStore>(
    controller: &VehicleController<S>,
) -> Result<(), RegistryError> {
    let id = prompt_lossy("Id del vehículo: ");
    if !confirm(&format!("¿Confirmar salida del vehículo {}?", id)) {
        return Ok(());
    }

    let vehicle = controller.checkout(&id).await?;
    println!(
        "{}",
        format!(
            "✅ Salida registrada: {} ({})",
            vehicle.plate,
            export_service::format_optional_date(&vehicle.checkout_date)
        )
        .bright_green()
    );
    list_vehicles(controller, &VehicleFilter::active_only()).await
}

async fn return_vehicle<S: VehicleStore>(
    controller: &VehicleController<S>,
) -> Result<(), RegistryError> {
    let id = prompt_lossy("Id del vehículo: ");
    if !confirm(&format!("¿Confirmar retorno del vehículo {}?", id)) {
        return Ok(());
    }

    let vehicle = controller.return_vehicle(&id).await?;
    println!(
        "{}",
        format!("✅ Vehículo {} retornado a activos", vehicle.plate).bright_green()
    );
    list_vehicles(controller, &VehicleFilter::active_only()).await
}

async fn delete_vehicle<S: VehicleStore>(
    controller: &VehicleController<S>,
) -> Result<(), RegistryError> {
    let id = prompt_lossy("Id del vehículo: ");
    if !confirm(&format!("¿Eliminar definitivamente el vehículo {}?", id)) {
        return Ok(());
    }

    controller.delete(&id).await?;
    println!("{}", "✅ Vehículo eliminado".bright_green());
    list_vehicles(controller, &VehicleFilter::default()).await
}

async fn export_report<S: VehicleStore>(
    controller: &VehicleController<S>,
    export_path: &str,
) -> Result<(), RegistryError> {
    let vehicles = controller.list(&VehicleFilter::default()).await?;

    match export_service::export_csv(&vehicles, Path::new(export_path)) {
        Ok(()) => {
            println!(
                "{}",
                format!("✅ Reporte exportado a {} ({} registro(s))", export_path, vehicles.len())
                    .bright_green()
            );
        }
        Err(error) => {
            println!(
                "{}",
                format!("❌ No se pudo escribir el reporte: {}", error).bright_red()
            );
        }
    }

    Ok(())
}

/// Leer el formulario completo del vehículo desde stdin
fn read_vehicle_form() -> VehicleInput {
    VehicleInput {
        plate: prompt_lossy("Placa (ABC1D23 / ABC1234): "),
        chassis_number: prompt_lossy("Chasis (17 caracteres): "),
        registration_number: prompt_lossy("Renavam (11 dígitos): "),
        model: prompt_lossy("Modelo: "),
        make: prompt_lossy("Marca: "),
        year: prompt_lossy("Año (4 dígitos): "),
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// Variante que no corta el flujo por un error de stdin
fn prompt_lossy(label: &str) -> String {
    prompt(label).unwrap_or_default()
}

fn confirm(question: &str) -> bool {
    let answer = prompt_lossy(&format!("{} (s/n): ", question));
    answer.eq_ignore_ascii_case("s") || answer.eq_ignore_ascii_case("si")
}

fn print_error(error: &RegistryError) {
    match error {
        RegistryError::Validation(errors) => {
            println!("{}", "❌ Datos inválidos:".bright_red().bold());
            for message in validation_messages(errors) {
                println!("{}", format!("   - {}", message).bright_red());
            }
        }
        RegistryError::NotFound(message) => {
            println!("{}", format!("❌ {}", message).bright_red());
        }
        RegistryError::Transport(_) => {
            println!(
                "{}",
                "❌ No fue posible comunicarse con el almacén. Intenta de nuevo.".bright_red()
            );
        }
    }
}
