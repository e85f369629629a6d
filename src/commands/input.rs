//! Form values for `gate` and `submit`, read from `--from` and the form flags.

use crate::cli::FormArgs;
use crate::error::{FormgateError, Result};
use crate::validate::FormValues;
use std::fs;
use std::path::Path;

/// Build the form: file values first, then any non-empty flag on top.
pub fn collect_values(form: &FormArgs) -> Result<FormValues> {
    let mut values = match &form.from {
        Some(path) => read_values_file(path)?,
        None => FormValues::default(),
    };

    values.merge(FormValues {
        name: form.name.clone().unwrap_or_default(),
        email: form.email.clone().unwrap_or_default(),
        phone: form.phone.clone().unwrap_or_default(),
        password: form.password.clone().unwrap_or_default(),
        confirm: form.confirm.clone().unwrap_or_default(),
        terms: form.terms,
    });

    Ok(values)
}

/// Read form values from a `.json` file, or YAML for anything else.
fn read_values_file(path: &Path) -> Result<FormValues> {
    let content = fs::read_to_string(path).map_err(|e| {
        FormgateError::UserError(format!(
            "failed to read form file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else if content.trim().is_empty() {
        Ok(FormValues::default())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| {
        FormgateError::UserError(format!(
            "failed to parse form file '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn flags_only() {
        let form = FormArgs {
            name: Some("Jane".to_string()),
            terms: true,
            ..Default::default()
        };

        let values = collect_values(&form).unwrap();

        assert_eq!(values.name, "Jane");
        assert_eq!(values.email, "");
        assert!(values.terms);
    }

    #[test]
    fn yaml_file_with_flag_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("form.yaml");
        fs::write(
            &path,
            "name: Jane Doe\nemail: old@example.com\nterms: true\n",
        )
        .unwrap();

        let form = FormArgs {
            from: Some(path),
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        let values = collect_values(&form).unwrap();

        assert_eq!(values.name, "Jane Doe");
        assert_eq!(values.email, "new@example.com");
        assert!(values.terms);
    }

    #[test]
    fn json_file_is_read_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("form.json");
        fs::write(&path, r#"{"phone": "5551234567", "password": "Abc123!!"}"#).unwrap();

        let form = FormArgs {
            from: Some(path),
            ..Default::default()
        };
        let values = collect_values(&form).unwrap();

        assert_eq!(values.phone, "5551234567");
        assert_eq!(values.password, "Abc123!!");
        assert!(!values.terms);
    }

    #[test]
    fn missing_file_is_user_error() {
        let form = FormArgs {
            from: Some("/nonexistent/form.yaml".into()),
            ..Default::default()
        };

        let err = collect_values(&form).unwrap_err();
        assert!(matches!(err, FormgateError::UserError(_)));
        assert!(err.to_string().contains("failed to read form file"));
    }

    #[test]
    fn malformed_json_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("form.json");
        fs::write(&path, "{not json").unwrap();

        let form = FormArgs {
            from: Some(path),
            ..Default::default()
        };

        let err = collect_values(&form).unwrap_err();
        assert!(err.to_string().contains("failed to parse form file"));
    }
}
