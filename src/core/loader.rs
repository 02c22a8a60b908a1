//! JSON loaders for the catalog and curriculum documents
//!
//! Both documents are read once at startup. Any failure here (missing file,
//! malformed JSON, dangling identifier references) is fatal for the service.

use crate::core::error::DataError;
use crate::core::models::{Catalog, CurriculumMap};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level shape of the course catalog document
#[derive(Debug, Deserialize)]
struct CatalogDoc {
    courses: Catalog,
}

/// Top-level shape of the college curriculum document
#[derive(Debug, Deserialize)]
struct CurriculumDoc {
    colleges: CurriculumMap,
}

/// Load and validate the course catalog from a JSON file
///
/// # Arguments
/// * `path` - Path to the catalog document
///
/// # Errors
/// Returns a [`DataError`] if the file cannot be read, the JSON is
/// malformed, or any prerequisite references a course that does not exist
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, DataError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let doc: CatalogDoc = serde_json::from_str(&content).map_err(|source| DataError::Malformed {
        path: path.display().to_string(),
        source,
    })?;

    doc.courses
        .validate_prerequisites()
        .map_err(DataError::InvalidReferences)?;

    Ok(doc.courses)
}

/// Load and validate the college curriculum map from a JSON file
///
/// # Arguments
/// * `path` - Path to the curriculum document
/// * `catalog` - Already-loaded catalog used to check offered-course references
///
/// # Errors
/// Returns a [`DataError`] if the file cannot be read, the JSON is
/// malformed, or any college offers a course missing from the catalog
pub fn load_curriculum<P: AsRef<Path>>(
    path: P,
    catalog: &Catalog,
) -> Result<CurriculumMap, DataError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let doc: CurriculumDoc =
        serde_json::from_str(&content).map_err(|source| DataError::Malformed {
            path: path.display().to_string(),
            source,
        })?;

    doc.colleges
        .validate_offerings(catalog)
        .map_err(DataError::InvalidReferences)?;

    Ok(doc.colleges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    const CATALOG_JSON: &str = r#"{
        "courses": {
            "CS101": {
                "name": "Intro to Programming",
                "description": "First programming course",
                "level": "freshman",
                "credits": 4,
                "tags": ["programming"]
            },
            "CS201": {
                "name": "Data Structures",
                "level": "sophomore",
                "credits": 4,
                "prerequisites": ["CS101"]
            }
        }
    }"#;

    #[test]
    fn test_load_catalog() {
        let file = write_temp(CATALOG_JSON);
        let catalog = load_catalog(file.path()).expect("catalog should load");

        assert_eq!(catalog.course_count(), 2);
        let cs201 = catalog.get_course("CS201").unwrap();
        assert_eq!(cs201.prerequisites, vec!["CS101"]);
        // Omitted fields fall back to serde defaults
        assert!(cs201.description.is_empty());
        assert!(cs201.tags.is_empty());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog("/nonexistent/courses.json");
        assert!(matches!(result, Err(DataError::Io { .. })));
    }

    #[test]
    fn test_load_catalog_malformed() {
        let file = write_temp("{ not json");
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(DataError::Malformed { .. })));
    }

    #[test]
    fn test_load_catalog_dangling_prerequisite() {
        let file = write_temp(
            r#"{"courses": {"CS301": {"name": "Orphan", "level": "junior", "credits": 3, "prerequisites": ["CS999"]}}}"#,
        );
        let result = load_catalog(file.path());

        match result {
            Err(DataError::InvalidReferences(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("CS999"));
            }
            other => panic!("expected InvalidReferences, got {other:?}"),
        }
    }

    #[test]
    fn test_load_curriculum() {
        let catalog_file = write_temp(CATALOG_JSON);
        let catalog = load_catalog(catalog_file.path()).unwrap();

        let curriculum_file = write_temp(
            r#"{"colleges": {"state-university": {"name": "State University", "courses": ["CS101", "CS201"]}}}"#,
        );
        let curriculum =
            load_curriculum(curriculum_file.path(), &catalog).expect("curriculum should load");

        assert_eq!(curriculum.college_count(), 1);
        let college = curriculum.get_college("state-university").unwrap();
        assert_eq!(college.name, "State University");
        assert_eq!(college.course_count(), 2);
    }

    #[test]
    fn test_load_curriculum_dangling_offering() {
        let catalog_file = write_temp(CATALOG_JSON);
        let catalog = load_catalog(catalog_file.path()).unwrap();

        let curriculum_file = write_temp(
            r#"{"colleges": {"ghost": {"name": "Ghost College", "courses": ["CS999"]}}}"#,
        );
        let result = load_curriculum(curriculum_file.path(), &catalog);
        assert!(matches!(result, Err(DataError::InvalidReferences(_))));
    }
}
