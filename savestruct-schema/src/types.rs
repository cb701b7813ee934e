//! Canonical field types.
//!
//! C type spellings such as `unsigned long` or `short int` are folded into a
//! small set of fixed-width integer kinds. Everything the table does not know
//! is passed through as a reference to another record type.

/// Fixed-width integer kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 32-bit integer.
    U32,
}

impl IntKind {
    /// Looks up a canonical lookup key (lowercase, `_`-joined).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "unsigned_int" | "unsigned_long" | "unsigned" | "unsigned_long_int" => Some(Self::U32),
            "long" | "int" | "long_int" | "signed" | "signed_int" => Some(Self::I32),
            "short" | "short_int" | "signed_short" | "signed_short_int" | "short_signed" => {
                Some(Self::I16)
            }
            "unsigned_short_int" | "unsigned_short" => Some(Self::U16),
            "signed_char" => Some(Self::I8),
            "unsigned_char" => Some(Self::U8),
            _ => None,
        }
    }

    /// Returns the `<stdint.h>` spelling.
    #[must_use]
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::I8 => "int8_t",
            Self::U8 => "uint8_t",
            Self::I16 => "int16_t",
            Self::U16 => "uint16_t",
            Self::I32 => "int32_t",
            Self::U32 => "uint32_t",
        }
    }

    /// Returns the Rust primitive name.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
        }
    }
}

/// Normalized type of a record field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalType {
    /// Fixed-width integer.
    Int(IntKind),
    /// `char name[capacity]`, stored as one run of text.
    String {
        /// Capacity expression, copied verbatim from the header.
        capacity: String,
    },
    /// Pointer; never persisted, reset on load.
    Pointer(Box<CanonicalType>),
    /// Fixed-size array.
    Array {
        /// Element type.
        element: Box<CanonicalType>,
        /// Size expression, copied verbatim from the header.
        size: String,
    },
    /// Any other named type, assumed to be generated or provided elsewhere.
    Record(String),
}

impl CanonicalType {
    /// Canonicalizes a parsed declaration.
    ///
    /// # Arguments
    /// * `tokens` - Type words with qualifiers already removed, in source order
    /// * `pointer_depth` - Number of `*` declarators
    /// * `array_size` - Bracketed size expression, if any
    #[must_use]
    pub fn from_declaration(tokens: &[&str], pointer_depth: usize, array_size: Option<&str>) -> Self {
        let key = canonical_key(tokens);

        if pointer_depth == 0 && key == "char" {
            if let Some(size) = array_size {
                return Self::String {
                    capacity: size.to_string(),
                };
            }
        }

        let mut ty = match IntKind::from_key(&key) {
            Some(kind) => Self::Int(kind),
            None if tokens.len() == 1 => Self::Record(tokens[0].to_string()),
            None => Self::Record(key),
        };
        for _ in 0..pointer_depth {
            ty = Self::Pointer(Box::new(ty));
        }
        match array_size {
            Some(size) => Self::Array {
                element: Box::new(ty),
                size: size.to_string(),
            },
            None => ty,
        }
    }

    /// Returns true if the field is a pointer or an array of pointers.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        match self {
            Self::Pointer(_) => true,
            Self::Array { element, .. } => element.is_pointer(),
            _ => false,
        }
    }

    /// Returns the kind name used to pick `save_<kind>`/`read_<kind>`
    /// routines in generated C.
    #[must_use]
    pub fn kind_name(&self) -> String {
        match self {
            Self::Int(kind) => kind.c_name().to_string(),
            Self::String { .. } => "string".to_string(),
            Self::Pointer(inner) => format!("{}_ptr", inner.kind_name()),
            Self::Array { element, .. } => format!("{}_array", element.kind_name()),
            Self::Record(name) => name.clone(),
        }
    }
}

impl std::fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(kind) => f.write_str(kind.c_name()),
            Self::String { capacity } => write!(f, "string[{}]", capacity),
            Self::Pointer(inner) => write!(f, "{} *", inner),
            Self::Array { element, size } => write!(f, "{}[{}]", element, size),
            Self::Record(name) => f.write_str(name),
        }
    }
}

/// Builds the lookup key for a list of type words.
///
/// Words are lowercased and joined with `_`, so `unsigned  Long` becomes
/// `unsigned_long`.
#[must_use]
pub fn canonical_key(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|t| t.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key(&["unsigned", "long"]), "unsigned_long");
        assert_eq!(canonical_key(&["Unsigned", "SHORT", "int"]), "unsigned_short_int");
        assert_eq!(canonical_key(&["int"]), "int");
    }

    #[test]
    fn test_int_table() {
        assert_eq!(IntKind::from_key("unsigned_int"), Some(IntKind::U32));
        assert_eq!(IntKind::from_key("unsigned_long"), Some(IntKind::U32));
        assert_eq!(IntKind::from_key("long"), Some(IntKind::I32));
        assert_eq!(IntKind::from_key("int"), Some(IntKind::I32));
        assert_eq!(IntKind::from_key("short"), Some(IntKind::I16));
        assert_eq!(IntKind::from_key("short_int"), Some(IntKind::I16));
        assert_eq!(IntKind::from_key("unsigned_short_int"), Some(IntKind::U16));
        assert_eq!(IntKind::from_key("signed_char"), Some(IntKind::I8));
        assert_eq!(IntKind::from_key("unsigned_char"), Some(IntKind::U8));
        assert_eq!(IntKind::from_key("float"), None);
        assert_eq!(IntKind::from_key("char"), None);
    }

    #[test]
    fn test_int_kind_properties() {
        assert_eq!(IntKind::U8.c_name(), "uint8_t");
        assert_eq!(IntKind::I16.rust_type(), "i16");
    }

    #[test]
    fn test_char_array_is_string() {
        let ty = CanonicalType::from_declaration(&["char"], 0, Some("MAX_NAME"));
        assert_eq!(
            ty,
            CanonicalType::String {
                capacity: "MAX_NAME".to_string()
            }
        );
    }

    #[test]
    fn test_int_array_is_array() {
        let ty = CanonicalType::from_declaration(&["int"], 0, Some("4"));
        assert_eq!(
            ty,
            CanonicalType::Array {
                element: Box::new(CanonicalType::Int(IntKind::I32)),
                size: "4".to_string(),
            }
        );
        assert_eq!(ty.kind_name(), "int32_t_array");
    }

    #[test]
    fn test_unsigned_char_array_is_not_string() {
        let ty = CanonicalType::from_declaration(&["unsigned", "char"], 0, Some("8"));
        assert!(matches!(ty, CanonicalType::Array { .. }));
    }

    #[test]
    fn test_pointer_wraps_before_array() {
        let ty = CanonicalType::from_declaration(&["item"], 1, Some("10"));
        assert!(ty.is_pointer());
        match ty {
            CanonicalType::Array { element, size } => {
                assert_eq!(size, "10");
                assert_eq!(
                    *element,
                    CanonicalType::Pointer(Box::new(CanonicalType::Record("item".to_string())))
                );
            }
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn test_char_pointer_is_not_string() {
        let ty = CanonicalType::from_declaration(&["char"], 1, None);
        assert_eq!(
            ty,
            CanonicalType::Pointer(Box::new(CanonicalType::Record("char".to_string())))
        );
    }

    #[test]
    fn test_unknown_type_keeps_spelling() {
        let ty = CanonicalType::from_declaration(&["Finepoint"], 0, None);
        assert_eq!(ty, CanonicalType::Record("Finepoint".to_string()));

        let ty = CanonicalType::from_declaration(&["long", "long"], 0, None);
        assert_eq!(ty, CanonicalType::Record("long_long".to_string()));
    }

    #[test]
    fn test_display() {
        let ty = CanonicalType::from_declaration(&["short"], 0, Some("3"));
        assert_eq!(ty.to_string(), "int16_t[3]");
        let ty = CanonicalType::from_declaration(&["gps"], 1, None);
        assert_eq!(ty.to_string(), "gps *");
    }
}
