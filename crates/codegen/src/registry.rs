//! Converter registry
//!
//! Maps a driver identity to the factory building the translator for that
//! dialect. A registry is an ordinary value: build one at startup and pass it
//! by reference, or build several (tests do) without any shared state.

use crate::config::TranslatorConfig;
use crate::mysql::{self, MySqlTranslator};
use crate::translator::SchemaTranslator;
use modelddl_core::{SchemaError, SchemaResult};
use std::collections::BTreeMap;

/// Builds a translator for one dialect
pub type TranslatorFactory = fn(TranslatorConfig) -> Box<dyn SchemaTranslator>;

/// Driver identity → translator factory
#[derive(Debug, Clone, Default)]
pub struct ConverterRegistry {
    factories: BTreeMap<String, TranslatorFactory>,
}

impl ConverterRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in dialect registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(mysql::DRIVER, MySqlTranslator::boxed);
        registry.register(mysql::DRIVER_ALIAS, MySqlTranslator::boxed);
        registry
    }

    /// Register `factory` under `driver`, replacing any previous entry
    pub fn register(&mut self, driver: impl Into<String>, factory: TranslatorFactory) {
        let driver = driver.into();
        if self.factories.insert(driver.clone(), factory).is_some() {
            tracing::debug!(driver = %driver, "replaced translator factory");
        }
    }

    /// Look up the factory for `driver`
    pub fn get_converter(&self, driver: &str) -> SchemaResult<TranslatorFactory> {
        self.factories
            .get(driver)
            .copied()
            .ok_or_else(|| SchemaError::UnknownDriver(driver.to_string()))
    }

    /// Look up `driver` and build a translator with `config`
    pub fn translator(
        &self,
        driver: &str,
        config: TranslatorConfig,
    ) -> SchemaResult<Box<dyn SchemaTranslator>> {
        let factory = self.get_converter(driver)?;
        Ok(factory(config))
    }

    pub fn contains(&self, driver: &str) -> bool {
        self.factories.contains_key(driver)
    }

    /// Registered driver identities, sorted
    pub fn drivers(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
