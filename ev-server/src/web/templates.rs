//! Askama templates for the web frontend.

use askama::Template;

/// Map page with the search form and filter controls.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Initial map centre latitude
    pub default_latitude: f64,

    /// Initial map centre longitude
    pub default_longitude: f64,

    /// Initial search radius in kilometres
    pub default_radius_km: f64,
}
