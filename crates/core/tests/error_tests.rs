// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use cost_in_hours_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("Price must be a positive number".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: Price must be a positive number"
        );
    }

    #[test]
    fn profile_missing() {
        assert_eq!(
            CoreError::ProfileMissing.to_string(),
            "No profile has been set up yet"
        );
    }

    #[test]
    fn storage() {
        let err = CoreError::Storage("disk full".into());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad value".into());
        assert_eq!(err.to_string(), "Serialization error: bad value");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("bad json".into());
        assert_eq!(err.to_string(), "Deserialization error: bad json");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn io_error_becomes_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Storage(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn serde_json_error_becomes_deserialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ── Error trait ─────────────────────────────────────────────────────

mod error_trait {
    use super::*;

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::ProfileMissing);
    }

    #[test]
    fn debug_format_names_the_variant() {
        let err = CoreError::ValidationError("x".into());
        assert!(format!("{err:?}").contains("ValidationError"));
    }
}
