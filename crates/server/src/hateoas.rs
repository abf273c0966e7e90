//! HAL-style hypermedia envelopes.
//!
//! Pure presentation: takes stores and a `RouteTable`, produces named links.
//! Nothing here talks to the service layer.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use service::tienda::domain::Tienda;

pub const TIENDAS_PATH: &str = "/api/v1/tiendas";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

/// Named links, serialized as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<(&'static str, Link)>);

impl Links {
    pub fn with(mut self, rel: &'static str, href: String) -> Self {
        self.0.push((rel, Link { href }));
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|(r, _)| *r == rel).map(|(_, l)| l)
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, link) in &self.0 {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embedded<T> {
    #[serde(rename = "tiendaList")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionModel<T> {
    /// Omitted entirely for an empty collection.
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded<T>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Absolute URLs of the store routes under a public base URL.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base: String,
}

impl RouteTable {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_string();
        Self { base }
    }

    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base, TIENDAS_PATH)
    }

    pub fn item_url(&self, id: i32) -> String {
        format!("{}{}/{}", self.base, TIENDAS_PATH, id)
    }

    pub fn tienda_model(&self, tienda: Tienda) -> EntityModel<Tienda> {
        let item = self.item_url(tienda.id_tienda);
        let links = Links::default()
            .with("self", item.clone())
            .with("tiendas", self.collection_url())
            .with("actualizar", item.clone())
            .with("eliminar", item);
        EntityModel { content: tienda, links }
    }

    pub fn tienda_collection(&self, tiendas: Vec<Tienda>) -> CollectionModel<EntityModel<Tienda>> {
        let items: Vec<_> = tiendas.into_iter().map(|t| self.tienda_model(t)).collect();
        CollectionModel {
            embedded: (!items.is_empty()).then_some(Embedded { items }),
            links: Links::default().with("self", self.collection_url()),
        }
    }
}
