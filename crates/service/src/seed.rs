//! Development data seeding.
//!
//! Fills an empty `tienda` table with a handful of generated stores so a
//! fresh dev environment has something to browse. Goes through
//! `TiendaService`, so the duplicate rule still applies.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::info;

use crate::errors::{ErrorKind, ServiceError};
use crate::tienda::{domain::TiendaInput, repository::TiendaRepository, TiendaService};

const COMPANIES: &[&str] = &[
    "Andina", "Los Aromos", "El Roble", "Pacífico", "La Esquina", "Central", "Del Valle",
    "Austral", "San Martín", "La Estrella", "Mirador", "Nuevo Horizonte", "El Faro", "Cordillera",
];

const STREETS: &[&str] = &[
    "Avenida Providencia", "Calle Huérfanos", "Paseo Ahumada", "Avenida Matta", "Calle Merced",
    "Avenida Grecia", "Calle Lira", "Avenida Independencia", "Calle Moneda", "Avenida Vicuña Mackenna",
];

fn generate(rng: &mut impl Rng) -> TiendaInput {
    let company = COMPANIES.choose(&mut *rng).copied().unwrap_or("Central");
    let street = STREETS.choose(&mut *rng).copied().unwrap_or("Calle Merced");
    let number: u32 = rng.gen_range(1..=9999);
    TiendaInput::new(format!("Tienda {company}"), Some(&format!("{street} {number}")))
}

/// Create `count` generated stores when the table is empty.
///
/// Returns how many were created; 0 when stores already exist.
pub async fn seed_if_empty<R: TiendaRepository + ?Sized>(svc: &TiendaService<R>, count: usize) -> Result<usize, ServiceError> {
    if !svc.list_all().await?.is_empty() {
        info!(event = "seed_skipped", "tiendas ya existentes, no se crearán nuevas");
        return Ok(0);
    }

    info!(event = "seed_start", count, "cargando datos de prueba");
    let mut rng = StdRng::from_entropy();
    let mut created = 0;
    let mut attempts = 0;
    while created < count && attempts < count.saturating_mul(10) {
        attempts += 1;
        match svc.create(generate(&mut rng)).await {
            Ok(_) => created += 1,
            // generated pair collided with an earlier one; draw again
            Err(e) if e.kind() == ErrorKind::Conflict => continue,
            Err(e) => return Err(e),
        }
    }
    info!(event = "seed_done", created, "tiendas generadas");
    Ok(created)
}
