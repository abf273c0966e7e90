use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Persisted store as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tienda {
    pub id_tienda: i32,
    pub nombre: String,
    pub direccion: Option<String>,
}

/// Create/replace payload. A client-supplied `idTienda` is accepted but ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiendaInput {
    #[serde(default)]
    pub id_tienda: Option<i32>,
    pub nombre: String,
    #[serde(default)]
    pub direccion: Option<String>,
}

impl TiendaInput {
    pub fn new(nombre: impl Into<String>, direccion: Option<&str>) -> Self {
        Self { id_tienda: None, nombre: nombre.into(), direccion: direccion.map(str::to_string) }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        models::tienda::validate_nombre(&self.nombre)?;
        models::tienda::validate_direccion(self.direccion.as_deref())?;
        Ok(())
    }
}

impl From<models::tienda::Model> for Tienda {
    fn from(m: models::tienda::Model) -> Self {
        Self { id_tienda: m.id_tienda, nombre: m.nombre, direccion: m.direccion }
    }
}

impl From<Tienda> for models::tienda::Model {
    fn from(t: Tienda) -> Self {
        Self { id_tienda: t.id_tienda, nombre: t.nombre, direccion: t.direccion }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_uses_spanish_camel_case() {
        let t = Tienda { id_tienda: 1, nombre: "Tienda A".into(), direccion: None };
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v, serde_json::json!({"idTienda": 1, "nombre": "Tienda A", "direccion": null}));
    }

    #[test]
    fn input_tolerates_missing_or_null_fields() {
        let i: TiendaInput = serde_json::from_str(r#"{"nombre":"B"}"#).unwrap();
        assert_eq!(i, TiendaInput::new("B", None));
        let i: TiendaInput = serde_json::from_str(r#"{"idTienda":null,"nombre":"B","direccion":"Dir B"}"#).unwrap();
        assert_eq!(i.direccion.as_deref(), Some("Dir B"));
        assert!(serde_json::from_str::<TiendaInput>(r#"{"direccion":"x"}"#).is_err());
    }

    #[test]
    fn validate_rejects_blank_nombre() {
        assert!(matches!(TiendaInput::new("  ", None).validate(), Err(ServiceError::Validation(_))));
        assert!(TiendaInput::new("Tienda", Some("Calle 1")).validate().is_ok());
    }
}
