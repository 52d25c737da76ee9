use crate::utils::error::{RadiationError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RadiationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RadiationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RadiationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive, finite number".to_string(),
        });
    }
    Ok(())
}

/// 檢查 `lower < upper`，兩者皆為正數
pub fn validate_interval(field_name: &str, lower: f64, upper: f64) -> Result<()> {
    validate_positive(&format!("{}.lower", field_name), lower)?;
    validate_positive(&format!("{}.upper", field_name), upper)?;

    if lower >= upper {
        return Err(RadiationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", lower, upper),
            reason: "Lower bound must be below upper bound".to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension.to_ascii_lowercase().as_str()) => {
            Ok(())
        }
        Some(extension) => Err(RadiationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(RadiationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RadiationError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RadiationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RadiationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("temperature", 5775.0).is_ok());
        assert!(validate_positive("temperature", 0.0).is_err());
        assert!(validate_positive("temperature", -3.0).is_err());
        assert!(validate_positive("temperature", f64::NAN).is_err());
        assert!(validate_positive("temperature", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_interval() {
        assert!(validate_interval("band", 400.0, 700.0).is_ok());
        assert!(validate_interval("band", 700.0, 400.0).is_err());
        assert!(validate_interval("band", 400.0, 400.0).is_err());
        assert!(validate_interval("band", -1.0, 400.0).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["svg", "png"];
        assert!(validate_file_extension("plot.output", "out/spectrum.svg", &allowed).is_ok());
        assert!(validate_file_extension("plot.output", "spectrum.PNG", &allowed).is_ok());
        assert!(validate_file_extension("plot.output", "spectrum.pdf", &allowed).is_err());
        assert!(validate_file_extension("plot.output", "spectrum", &allowed).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("format", "xml", &["text", "json"]).is_err());
    }

    #[test]
    fn test_validate_range_and_required() {
        assert!(validate_range("width", 1000u32, 100, 8000).is_ok());
        assert!(validate_range("width", 50u32, 100, 8000).is_err());

        let missing: Option<f64> = None;
        assert!(matches!(
            validate_required_field("emitter.temperature_k", &missing),
            Err(RadiationError::MissingConfigError { .. })
        ));
    }
}
