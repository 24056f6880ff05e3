use crate::models::Rejection;
use thiserror::Error;

/// Custom result type for the plugin
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the file type validation plugin
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// File was rejected by the load hook.
    ///
    /// Never built by the plugin itself; it lets a [`Rejection`] from
    /// `Plugin::check_file` be propagated with `?` into [`Result`].
    #[error("File type not allowed: {0}")]
    FileTypeNotAllowed(#[from] Rejection),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use crate::models::{Rejection, Status};
    use crate::Error;

    #[test]
    fn test_error_display() {
        let errors = [
            (
                Error::InvalidConfig("blank pattern".to_string()),
                "Invalid configuration: blank pattern",
            ),
            (
                Error::FileTypeNotAllowed(Rejection {
                    status: Status {
                        main: "File is of invalid type".to_string(),
                        sub: "Expects image/png or image/jpeg".to_string(),
                    },
                }),
                "File type not allowed: File is of invalid type (Expects image/png or image/jpeg)",
            ),
        ];

        for (error, expected_message) in errors {
            assert_eq!(error.to_string(), expected_message);
        }
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: Error = json_error.into();

        match error {
            Error::JsonError(_) => {}
            _ => panic!("Expected JsonError variant"),
        }
    }

    #[test]
    fn test_error_from_rejection() {
        let rejection = Rejection {
            status: Status {
                main: "nope".to_string(),
                sub: "Expects  or image/png".to_string(),
            },
        };

        fn reject(rejection: Rejection) -> crate::Result<()> {
            let checked: std::result::Result<(), Rejection> = Err(rejection);
            checked?;
            Ok(())
        }

        match reject(rejection) {
            Err(Error::FileTypeNotAllowed(r)) => assert_eq!(r.status.main, "nope"),
            _ => panic!("Expected FileTypeNotAllowed variant"),
        }
    }
}
