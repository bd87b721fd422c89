//! POM generation.
//!
//! Renders the project descriptor from a Handlebars template. The default
//! HTML escaping doubles as XML escaping for coordinate values.

use crate::bundler::{Coordinates, Error, Result};
use handlebars::Handlebars;
use std::collections::BTreeMap;

const POM_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{{group_id}}</groupId>
  <artifactId>{{artifact_id}}</artifactId>
  <version>{{version}}</version>
  <packaging>pom</packaging>
  <description>{{description}}</description>
</project>
"#;

/// Renders the POM for `coords`.
pub fn render_pom(coords: &Coordinates) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);

    handlebars
        .register_template_string("pom.xml", POM_TEMPLATE)
        .map_err(|e| Error::Template(format!("failed to register POM template: {}", e)))?;

    let mut data = BTreeMap::new();
    data.insert("group_id", coords.group_id.as_str());
    data.insert("artifact_id", coords.artifact_id.as_str());
    data.insert("version", coords.version.as_str());
    data.insert(
        "description",
        "Base artifacts (apk, mapping.txt, R.txt) for Tinker patching",
    );

    handlebars
        .render("pom.xml", &data)
        .map_err(|e| Error::Template(format!("failed to render POM template: {}", e)))
}
