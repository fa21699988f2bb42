//! Release descriptor (Expo `app.json`) loading and rewriting
//!
//! The descriptor is kept as a generic JSON tree so fields other than the
//! version and build number survive a rewrite untouched and in order.

use crate::{
    error::{BumpError, Result},
    utils::fs::FileSystemUtils,
};
use serde_json::{Map, Value};
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

/// Top-level key holding the app configuration
pub const EXPO_KEY: &str = "expo";
/// App version key inside `expo`
pub const VERSION_KEY: &str = "version";
/// iOS platform key inside `expo`
pub const IOS_KEY: &str = "ios";
/// Build number key inside `expo.ios`
pub const BUILD_NUMBER_KEY: &str = "buildNumber";

/// In-memory release descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseDescriptor {
    /// Where the document came from, used in error messages
    origin: PathBuf,
    document: Value,
}

impl ReleaseDescriptor {
    /// Parse a descriptor from JSON text
    pub fn parse<P: Into<PathBuf>>(content: &str, origin: P) -> Result<Self> {
        let origin = origin.into();
        let document = serde_json::from_str(content)
            .map_err(|e| BumpError::json("Failed to parse descriptor JSON", &origin, e))?;
        Ok(Self { origin, document })
    }

    /// Wrap an already-parsed JSON document
    pub fn from_value<P: Into<PathBuf>>(document: Value, origin: P) -> Self {
        Self {
            origin: origin.into(),
            document,
        }
    }

    /// The underlying JSON document
    pub fn as_value(&self) -> &Value {
        &self.document
    }

    /// The `expo` object, created if absent
    pub fn expo_mut(&mut self) -> Result<&mut Map<String, Value>> {
        let origin = &self.origin;
        let root = self
            .document
            .as_object_mut()
            .ok_or_else(|| BumpError::descriptor("Top level is not a JSON object", origin))?;
        child_object(root, EXPO_KEY, origin)
    }

    /// The `expo.ios` object, created if absent
    pub fn ios_mut(&mut self) -> Result<&mut Map<String, Value>> {
        let origin = self.origin.clone();
        let expo = self.expo_mut()?;
        child_object(expo, IOS_KEY, &origin)
    }

    /// Current `expo.version`, if set
    pub fn version(&mut self) -> Result<Option<String>> {
        let origin = self.origin.clone();
        match self.expo_mut()?.get(VERSION_KEY) {
            None => Ok(None),
            Some(Value::String(v)) => Ok(Some(v.clone())),
            Some(other) => Err(BumpError::descriptor(
                format!("'{EXPO_KEY}.{VERSION_KEY}' must be a string, found {other}"),
                origin,
            )),
        }
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> Result<()> {
        self.expo_mut()?
            .insert(VERSION_KEY.to_string(), Value::String(version.into()));
        Ok(())
    }

    /// Current `expo.ios.buildNumber`, if set
    pub fn build_number(&mut self) -> Result<Option<Value>> {
        Ok(self.ios_mut()?.get(BUILD_NUMBER_KEY).cloned())
    }

    /// Store the build number, always as a decimal string
    pub fn set_build_number(&mut self, build_number: i128) -> Result<()> {
        self.ios_mut()?.insert(
            BUILD_NUMBER_KEY.to_string(),
            Value::String(build_number.to_string()),
        );
        Ok(())
    }

    /// Serialize with 2-space indentation and ASCII-only output
    pub fn to_pretty_string(&self) -> Result<String> {
        let pretty = serde_json::to_string_pretty(&self.document)
            .map_err(|e| BumpError::json("Failed to serialize descriptor", &self.origin, e))?;
        Ok(escape_non_ascii(&pretty))
    }
}

/// Replace every non-ASCII character with `\u` escapes.
///
/// Serialized JSON only carries non-ASCII text inside string literals, so a
/// plain character pass keeps the document valid. Characters outside the
/// BMP become surrogate pairs.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units).iter() {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

/// Get `key` from `map` as an object, inserting an empty one when missing
fn child_object<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
    origin: &Path,
) -> Result<&'a mut Map<String, Value>> {
    map.entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| BumpError::descriptor(format!("'{key}' is not a JSON object"), origin))
}

/// A descriptor file held open between load and save
#[derive(Debug)]
pub struct DescriptorFile {
    path: PathBuf,
    file: File,
    fs_utils: FileSystemUtils,
}

impl DescriptorFile {
    /// Open the descriptor for update and parse its content
    #[instrument]
    pub fn open(path: &Path) -> Result<(Self, ReleaseDescriptor)> {
        let fs_utils = FileSystemUtils::new();

        let mut file = fs_utils
            .open_for_update(path)
            .map_err(|e| BumpError::file_system("open", path, e))?;
        let content = fs_utils
            .read_open_file(&mut file)
            .map_err(|e| BumpError::file_system("read", path, e))?;

        let descriptor = ReleaseDescriptor::parse(&content, path)?;
        debug!("Loaded descriptor from {}", path.display());

        Ok((
            Self {
                path: path.to_path_buf(),
                file,
                fs_utils,
            },
            descriptor,
        ))
    }

    /// Overwrite the file with the full descriptor
    #[instrument(skip(self, descriptor))]
    pub fn save(mut self, descriptor: &ReleaseDescriptor) -> Result<()> {
        let content = descriptor.to_pretty_string()?;
        self.fs_utils
            .rewrite_open_file(&mut self.file, content)
            .map_err(|e| BumpError::file_system("write", &self.path, e))?;
        debug!("Saved descriptor to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_containers_are_created() {
        let mut descriptor = ReleaseDescriptor::from_value(json!({}), "app.json");

        assert_eq!(descriptor.version().unwrap(), None);
        assert_eq!(descriptor.build_number().unwrap(), None);
        assert_eq!(descriptor.as_value(), &json!({"expo": {"ios": {}}}));
    }

    #[test]
    fn test_set_fields() {
        let mut descriptor =
            ReleaseDescriptor::from_value(json!({"expo": {"name": "app"}}), "app.json");

        descriptor.set_version("1.0.1").unwrap();
        descriptor.set_build_number(4).unwrap();

        assert_eq!(
            descriptor.as_value(),
            &json!({"expo": {"name": "app", "version": "1.0.1", "ios": {"buildNumber": "4"}}})
        );
    }

    #[test]
    fn test_non_object_expo_is_an_error() {
        let mut descriptor = ReleaseDescriptor::from_value(json!({"expo": [1, 2]}), "app.json");
        assert!(matches!(
            descriptor.expo_mut(),
            Err(BumpError::Descriptor { .. })
        ));
    }

    #[test]
    fn test_non_object_root_is_an_error() {
        let mut descriptor = ReleaseDescriptor::from_value(json!("text"), "app.json");
        assert!(matches!(
            descriptor.ios_mut(),
            Err(BumpError::Descriptor { .. })
        ));
    }

    #[test]
    fn test_non_string_version_is_an_error() {
        let mut descriptor =
            ReleaseDescriptor::from_value(json!({"expo": {"version": 3}}), "app.json");
        assert!(matches!(
            descriptor.version(),
            Err(BumpError::Descriptor { .. })
        ));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = ReleaseDescriptor::parse("{ not json", "app.json").unwrap_err();
        match err {
            BumpError::Descriptor { source, path, .. } => {
                assert!(source.is_some());
                assert_eq!(path, PathBuf::from("app.json"));
            }
            other => panic!("Expected Descriptor error, got {other:?}"),
        }
    }

    #[test]
    fn test_key_order_is_preserved() {
        let text = r#"{"zeta": 1, "alpha": {"b": 2, "a": 1}, "expo": {"version": "1.0.0"}}"#;
        let descriptor = ReleaseDescriptor::parse(text, "app.json").unwrap();
        let pretty = descriptor.to_pretty_string().unwrap();

        let zeta = pretty.find("\"zeta\"").unwrap();
        let alpha = pretty.find("\"alpha\"").unwrap();
        let b = pretty.find("\"b\"").unwrap();
        let a = pretty.find("\"a\"").unwrap();
        assert!(zeta < alpha);
        assert!(b < a);
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let descriptor =
            ReleaseDescriptor::from_value(json!({"expo": {"version": "1.0.0"}}), "app.json");
        assert_eq!(
            descriptor.to_pretty_string().unwrap(),
            "{\n  \"expo\": {\n    \"version\": \"1.0.0\"\n  }\n}"
        );
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let descriptor = ReleaseDescriptor::from_value(
            json!({"expo": {"name": "Café ☀ 🏠"}}),
            "app.json",
        );
        let pretty = descriptor.to_pretty_string().unwrap();

        assert!(pretty.is_ascii());
        assert!(pretty.contains(r#""Caf\u00e9 \u2600 \ud83c\udfe0""#));

        let reparsed = ReleaseDescriptor::parse(&pretty, "app.json").unwrap();
        assert_eq!(reparsed.as_value(), descriptor.as_value());
    }

    #[test]
    fn test_large_integers_round_trip_exactly() {
        let text = r#"{"extra": {"id": 123456789012345678901234567890, "ratio": 0.10000000000000000001}}"#;
        let descriptor = ReleaseDescriptor::parse(text, "app.json").unwrap();
        let pretty = descriptor.to_pretty_string().unwrap();

        assert!(pretty.contains("\"id\": 123456789012345678901234567890"));
        assert!(pretty.contains("\"ratio\": 0.10000000000000000001"));
    }

    #[test]
    fn test_open_and_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.json");
        fs::write(&path, r#"{"expo": {"version": "2.0.0", "slug": "demo"}}"#).unwrap();

        let (file, mut descriptor) = DescriptorFile::open(&path).unwrap();
        descriptor.set_version("2.0.1").unwrap();
        file.save(&descriptor).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, json!({"expo": {"version": "2.0.1", "slug": "demo"}}));
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = DescriptorFile::open(&temp_dir.path().join("app.json")).unwrap_err();
        assert!(matches!(err, BumpError::FileSystem { ref operation, .. } if operation == "open"));
    }
}
