//! White-label branding configuration with an optional runtime override.
//! The same build serves multiple franchise brands, so deployments can set
//! `window.SOBOK_ADMIN_CONFIG` to change the brand identity without
//! rebuilding. Configuration values are public; do not store secrets here.

/// Branding configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct BrandConfig {
    pub brand_name: String,
    pub brand_code: String,
    pub logo_url: String,
    pub support_email: String,
}

impl BrandConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let brand_name = option_env!("SOBOK_ADMIN_BRAND_NAME").unwrap_or("Sobok Admin");
        let brand_code = option_env!("SOBOK_ADMIN_BRAND_CODE").unwrap_or("SOBOK");
        let logo_url = option_env!("SOBOK_ADMIN_LOGO_URL").unwrap_or("/public/logo.svg");
        let support_email =
            option_env!("SOBOK_ADMIN_SUPPORT_EMAIL").unwrap_or("admin@sobok.example");

        let mut config = Self {
            brand_name: brand_name.to_string(),
            brand_code: brand_code.to_string(),
            logo_url: logo_url.to_string(),
            support_email: support_email.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    brand_name: Option<String>,
    brand_code: Option<String>,
    logo_url: Option<String>,
    support_email: Option<String>,
}

fn apply_runtime_overrides(config: &mut BrandConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.brand_name {
        config.brand_name = value;
    }
    if let Some(value) = runtime.brand_code {
        config.brand_code = value;
    }
    if let Some(value) = runtime.logo_url {
        config.logo_url = value;
    }
    if let Some(value) = runtime.support_email {
        config.support_email = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SOBOK_ADMIN_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        brand_name: read_runtime_value(&object, "brand_name"),
        brand_code: read_runtime_value(&object, "brand_code"),
        logo_url: read_runtime_value(&object, "logo_url"),
        support_email: read_runtime_value(&object, "support_email"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{BrandConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    fn base_config() -> BrandConfig {
        BrandConfig {
            brand_name: "Sobok Admin".to_string(),
            brand_code: "SOBOK".to_string(),
            logo_url: "/public/logo.svg".to_string(),
            support_email: "admin@sobok.example".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  Haru Coffee "),
            Some("Haru Coffee".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            brand_name: normalize_runtime_value(""),
            brand_code: normalize_runtime_value("  "),
            logo_url: normalize_runtime_value(""),
            support_email: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.brand_name, "Sobok Admin");
        assert_eq!(config.brand_code, "SOBOK");
        assert_eq!(config.logo_url, "/public/logo.svg");
        assert_eq!(config.support_email, "admin@sobok.example");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            brand_name: normalize_runtime_value("Haru Coffee"),
            brand_code: normalize_runtime_value("HARU01"),
            logo_url: normalize_runtime_value("/public/haru.svg"),
            support_email: normalize_runtime_value("ops@haru.example"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.brand_name, "Haru Coffee");
        assert_eq!(config.brand_code, "HARU01");
        assert_eq!(config.logo_url, "/public/haru.svg");
        assert_eq!(config.support_email, "ops@haru.example");
    }
}
