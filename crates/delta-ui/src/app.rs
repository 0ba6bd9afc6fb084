//! Root application component

use delta_core::ResultExt;
use delta_core::config::SiteConfig;
use leptos::prelude::*;

use crate::pages::Home;

/// Site settings compiled into the bundle
const SITE_TOML: &str = include_str!("../site.toml");

/// Parses the embedded settings, falling back to defaults on any error
#[must_use]
pub fn load_site_config() -> SiteConfig {
    SiteConfig::from_toml_str(SITE_TOML).or_default_logged(SiteConfig::default())
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();
    tracing::debug!(
        interval_ms = config.carousel.auto_play_interval_ms,
        map = config.location.map_embed_url.is_some(),
        "site config loaded"
    );

    view! { <Home config=config /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_compiles() {
        let _ = App;
    }

    #[test]
    fn test_embedded_site_config_parses() {
        assert!(SiteConfig::from_toml_str(SITE_TOML).is_ok());
    }

    #[test]
    fn test_embedded_site_config_keeps_default_interval() {
        assert_eq!(load_site_config().carousel.auto_play_interval_ms, 5000);
    }
}
