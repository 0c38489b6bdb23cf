use super::package::Package;
use serde::{Deserialize, Serialize};

/// A named group of packages sharing a distribution channel (e.g. "npm")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ecosystem {
    pub ecosystem: String,
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl Ecosystem {
    pub fn new(ecosystem: impl Into<String>, packages: Vec<Package>) -> Self {
        Self {
            ecosystem: ecosystem.into(),
            packages,
        }
    }

    pub fn key(&self) -> &str {
        &self.ecosystem
    }

    /// Looks up a package by its exact name
    pub fn find_package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }
}

/// The full report dataset: every ecosystem in document order
///
/// Loaded once and never mutated afterwards. The default value is the empty
/// dataset that every view sees before loading completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    ecosystems: Vec<Ecosystem>,
}

impl Dataset {
    pub fn new(ecosystems: Vec<Ecosystem>) -> Self {
        Self { ecosystems }
    }

    /// Parses the JSON document form of the dataset (an array of ecosystems)
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn ecosystems(&self) -> &[Ecosystem] {
        &self.ecosystems
    }

    pub fn is_empty(&self) -> bool {
        self.ecosystems.is_empty()
    }

    pub fn find_ecosystem(&self, key: &str) -> Option<&Ecosystem> {
        self.ecosystems.iter().find(|e| e.ecosystem == key)
    }

    pub fn find_package(&self, ecosystem: &str, package: &str) -> Option<&Package> {
        self.find_ecosystem(ecosystem)
            .and_then(|e| e.find_package(package))
    }

    pub fn package_count(&self) -> usize {
        self.ecosystems.iter().map(|e| e.packages.len()).sum()
    }
}
