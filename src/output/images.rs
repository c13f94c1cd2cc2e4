//! Name → display image lookup
//!
//! Owned by the presentation side: the engine only exposes record names.

use std::collections::HashMap;

use crate::consts::DEFAULT_IMAGE;

/// Read-only lookup from an activity name to a display asset
pub trait AssetLookup: Send + Sync {
    fn resolve(&self, name: &str) -> &str;
}

/// Built-in images for the known frentes
const BUILTIN_IMAGES: &[(&str, &str)] = &[
    ("Patio_Alimentação", "/static/images/frentes/patioAlimentacao.png"),
    ("Secagem", "/static/images/frentes/secagem.png"),
    ("Torre_Resfriamento", "/static/images/frentes/TorreResfriamento.png"),
    ("Mistura", "/static/images/frentes/mistura.png"),
    ("Briquetagem", "/static/images/frentes/briquetagem.png"),
    ("Forno", "/static/images/frentes/forno.png"),
    ("Ventiladores", "/static/images/frentes/ventilador.png"),
    ("Precipitadores", "/static/images/frentes/precipitador.png"),
    ("Peneiramento", "/static/images/frentes/peneiramento.png"),
    ("Patio_Briquete", "/static/images/frentes/patioBriquete.png"),
    ("Curva S", "/static/images/curva/20240730 - Curva da PF4 2024.png"),
];

#[derive(Debug, Clone)]
pub struct ImageTable {
    images: HashMap<String, String>,
    default_image: String,
}

impl ImageTable {
    /// Built-in table, extended (or overridden) by configured entries
    pub fn new(overrides: &HashMap<String, String>, default_image: Option<&str>) -> Self {
        let mut images: HashMap<String, String> = BUILTIN_IMAGES
            .iter()
            .map(|(name, path)| (name.to_string(), path.to_string()))
            .collect();
        images.extend(overrides.iter().map(|(k, v)| (k.trim().to_string(), v.clone())));
        Self {
            images,
            default_image: default_image.unwrap_or(DEFAULT_IMAGE).to_string(),
        }
    }
}

impl Default for ImageTable {
    fn default() -> Self {
        Self::new(&HashMap::new(), None)
    }
}

impl AssetLookup for ImageTable {
    fn resolve(&self, name: &str) -> &str {
        self.images
            .get(name.trim())
            .map(String::as_str)
            .unwrap_or(&self.default_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_resolve() {
        let table = ImageTable::default();
        assert_eq!(table.resolve("Forno"), "/static/images/frentes/forno.png");
        assert_eq!(
            table.resolve("Patio_Alimentação"),
            "/static/images/frentes/patioAlimentacao.png"
        );
    }

    #[test]
    fn unknown_name_uses_default() {
        assert_eq!(ImageTable::default().resolve("Caldeira"), DEFAULT_IMAGE);
        let table = ImageTable::new(&HashMap::new(), Some("/img/none.png"));
        assert_eq!(table.resolve("Caldeira"), "/img/none.png");
    }

    #[test]
    fn overrides_replace_and_extend() {
        let overrides = HashMap::from([
            ("Forno".to_string(), "/img/forno-v2.png".to_string()),
            ("Caldeira".to_string(), "/img/caldeira.png".to_string()),
        ]);
        let table = ImageTable::new(&overrides, None);
        assert_eq!(table.resolve("Forno"), "/img/forno-v2.png");
        assert_eq!(table.resolve("Caldeira"), "/img/caldeira.png");
        assert_eq!(table.resolve("Secagem"), "/static/images/frentes/secagem.png");
    }
}
