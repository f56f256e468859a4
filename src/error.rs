// Error types shared by the API client and the menu.
//
// The `Display` text of each variant is exactly what the menu prints, so
// callers can either match on the variant or just show it to the user.

use thiserror::Error;

/// Failure of a single catalog request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with something other than 200.
    #[error("Error en la solicitud. Código de estado: {0}")]
    Status(u16),

    /// Connection, TLS or body read failure.
    #[error("Error al realizar la solicitud: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not the JSON shape we expect.
    #[error("Error al procesar los datos del servidor.")]
    Parse(#[from] serde_json::Error),
}

/// Rejected user input for a query that needs a value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("El título no puede estar vacío.")]
    EmptyTitle,

    #[error("El código de idioma no puede estar vacío.")]
    EmptyLanguage,
}
