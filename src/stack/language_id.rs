crate::define_id_enum! {
    /// Canonical language identifier. Build tooling such as `make`, `cmake`
    /// and `docker` is tracked alongside programming languages so it can
    /// carry its own recommendations.
    LanguageId {
        Go => "go" : "Go",
        JavaScript => "javascript" : "JavaScript",
        TypeScript => "typescript" : "TypeScript",
        Python => "python" : "Python",
        Rust => "rust" : "Rust",
        Java => "java" : "Java",
        Ruby => "ruby" : "Ruby",
        Php => "php" : "PHP",
        Make => "make" : "Make",
        CMake => "cmake" : "CMake",
        Docker => "docker" : "Docker",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_id_serialization() {
        assert_eq!(serde_json::to_string(&LanguageId::Go).unwrap(), "\"go\"");
        assert_eq!(
            serde_json::to_string(&LanguageId::TypeScript).unwrap(),
            "\"typescript\""
        );
        assert_eq!(
            serde_json::to_string(&LanguageId::CMake).unwrap(),
            "\"cmake\""
        );
    }

    #[test]
    fn test_language_id_deserialization() {
        assert_eq!(
            serde_json::from_str::<LanguageId>("\"rust\"").unwrap(),
            LanguageId::Rust
        );
        assert_eq!(
            serde_json::from_str::<LanguageId>("\"PHP\"").unwrap(),
            LanguageId::Php
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(LanguageId::JavaScript.display_name(), "JavaScript");
        assert_eq!(LanguageId::Php.display_name(), "PHP");
        assert_eq!(LanguageId::Go.to_string(), "go");
    }

    #[test]
    fn test_custom_language_round_trip() {
        let custom = LanguageId::from_key("zig");
        assert_eq!(custom, LanguageId::Custom("zig".to_string()));
        assert!(custom.is_custom());
        assert_eq!(custom.display_name(), "zig");
        assert_eq!(serde_json::to_string(&custom).unwrap(), "\"zig\"");
    }

    #[test]
    fn test_all_variants_excludes_custom() {
        assert_eq!(LanguageId::all_variants().len(), 11);
        assert!(LanguageId::all_variants().iter().all(|l| !l.is_custom()));
    }
}
