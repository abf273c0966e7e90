use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const NOMBRE_MAX_LEN: usize = 255;
pub const DIRECCION_MAX_LEN: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tienda")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_tienda: i32,
    pub nombre: String,
    pub direccion: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_nombre(nombre: &str) -> Result<(), ModelError> {
    if nombre.trim().is_empty() {
        return Err(ModelError::Validation("nombre es obligatorio".into()));
    }
    if nombre.chars().count() > NOMBRE_MAX_LEN {
        return Err(ModelError::Validation(format!("nombre excede {NOMBRE_MAX_LEN} caracteres")));
    }
    Ok(())
}

pub fn validate_direccion(direccion: Option<&str>) -> Result<(), ModelError> {
    if let Some(d) = direccion {
        if d.chars().count() > DIRECCION_MAX_LEN {
            return Err(ModelError::Validation(format!("direccion excede {DIRECCION_MAX_LEN} caracteres")));
        }
    }
    Ok(())
}

/// All rows, oldest id first.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::IdTienda).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Exact (nombre, direccion) lookup; a missing direccion matches NULL.
pub async fn find_by_nombre_and_direccion(
    db: &DatabaseConnection,
    nombre: &str,
    direccion: Option<&str>,
) -> Result<Option<Model>, ModelError> {
    let mut select = Entity::find().filter(Column::Nombre.eq(nombre));
    select = match direccion {
        Some(d) => select.filter(Column::Direccion.eq(d)),
        None => select.filter(Column::Direccion.is_null()),
    };
    Ok(select.one(db).await?)
}

pub async fn create(db: &DatabaseConnection, nombre: &str, direccion: Option<&str>) -> Result<Model, ModelError> {
    validate_nombre(nombre)?;
    validate_direccion(direccion)?;
    let am = ActiveModel {
        nombre: Set(nombre.to_string()),
        direccion: Set(direccion.map(str::to_string)),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite both mutable columns of an existing row.
pub async fn replace(db: &DatabaseConnection, existing: Model, nombre: &str, direccion: Option<&str>) -> Result<Model, ModelError> {
    validate_nombre(nombre)?;
    validate_direccion(direccion)?;
    let mut am: ActiveModel = existing.into();
    am.nombre = Set(nombre.to_string());
    am.direccion = Set(direccion.map(str::to_string));
    Ok(am.update(db).await?)
}

/// Returns true when a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
