use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::models::Destination;

const EMBEDDED_DESTINATIONS: &str = include_str!("../../data/destinations.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read destination file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse destinations: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate destination id: {0}")]
    DuplicateId(String),

    #[error("Destination {0} has coordinates out of range")]
    InvalidCoordinates(String),
}

/// Immutable set of surf destinations, loaded once at startup
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
    index: HashMap<String, usize>,
}

impl DestinationCatalog {
    /// Build a catalog, rejecting duplicate ids and bad coordinates
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(destinations.len());

        for (position, destination) in destinations.iter().enumerate() {
            if !destination.coordinates.is_valid() {
                return Err(CatalogError::InvalidCoordinates(destination.id.clone()));
            }
            if index.insert(destination.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(destination.id.clone()));
            }
        }

        Ok(Self { destinations, index })
    }

    /// Dataset compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_DESTINATIONS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        Self::new(destinations)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.index.get(id).map(|&position| &self.destinations[position])
    }

    /// Every destination in dataset order
    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn into_destinations(self) -> Vec<Destination> {
        self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
