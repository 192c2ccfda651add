//! Catalog option listings for client dropdowns.

use std::sync::Arc;

use archivo_entity::Catalogo;

/// Serves the reference-data catalogs.
#[derive(Debug, Clone)]
pub struct OpcionesService {
    /// Accepted catalog values.
    catalogo: Arc<Catalogo>,
}

impl OpcionesService {
    /// Creates a new opciones service.
    pub fn new(catalogo: Arc<Catalogo>) -> Self {
        Self { catalogo }
    }

    /// All accepted ubicaciones.
    pub fn ubicaciones(&self) -> Vec<String> {
        self.catalogo.ubicaciones().to_vec()
    }

    /// All accepted tipos de expediente.
    pub fn tipos_expediente(&self) -> Vec<String> {
        self.catalogo.tipos_expediente().to_vec()
    }
}
