use std::collections::BTreeMap;

use log::debug;
use thiserror::Error;

use crate::cli::LabelStyle;
use crate::state::{StateFile, StateInstance, StateResource, Value};

use super::exclude::ExclusionFilter;
use super::property::PropertyRenderer;

/// Generated text grouped by output-file base name, written as
/// `<basename>.tf`.
#[derive(Debug, Default)]
pub struct OutputBundle {
    files: BTreeMap<String, String>,
}

impl OutputBundle {
    pub fn insert(&mut self, basename: String, text: String) {
        self.files.insert(basename, text);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.files.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Builds `resource "<type>" "<label>" { ... }` blocks for every instance
/// of a state document.
pub struct ResourceBlockBuilder<'a> {
    renderer: PropertyRenderer<'a>,
    label_style: LabelStyle,
}

impl<'a> ResourceBlockBuilder<'a> {
    pub fn new(filter: &'a ExclusionFilter, label_style: LabelStyle) -> Self {
        Self {
            renderer: PropertyRenderer::new(filter),
            label_style,
        }
    }

    /// Renders all resources of one state document into an output bundle.
    ///
    /// All blocks accumulate into a single buffer which is saved under the
    /// base name of the *last* resource's module path. A state file whose
    /// resources span several modules therefore merges into one output
    /// file; this matches the long-standing behavior of the generator and
    /// is kept deliberately.
    pub fn build(&self, state: &StateFile) -> Result<OutputBundle, RenderError> {
        let mut buffer = String::new();
        let mut basename: Option<&str> = None;

        for resource in &state.resources {
            basename = Some(resource.module_basename().ok_or_else(|| {
                RenderError::ModulePath {
                    path: resource.module.clone(),
                }
            })?);

            debug!(
                "Rendering {} instance(s) of {}.{}",
                resource.instances.len(),
                resource.resource_type,
                resource.name
            );

            for instance in &resource.instances {
                self.render_instance(resource, instance, &mut buffer);
            }
        }

        let mut bundle = OutputBundle::default();
        if let Some(basename) = basename {
            bundle.insert(basename.to_string(), buffer);
        }

        Ok(bundle)
    }

    fn render_instance(
        &self,
        resource: &StateResource,
        instance: &StateInstance,
        out: &mut String,
    ) {
        out.push_str(&format!(
            "resource \"{}\" \"{}\" {{\n",
            resource.resource_type,
            self.label(resource, instance)
        ));

        for (name, json) in &instance.attributes {
            let value = Value::from_json(json);
            self.renderer.render_property(name, &value, out);
        }

        out.push_str("}\n");
    }

    /// The block label for one instance, governed by the configured policy.
    fn label(&self, resource: &StateResource, instance: &StateInstance) -> String {
        match (&instance.index_key, self.label_style) {
            (None, _) => resource.name.clone(),
            (Some(key), LabelStyle::NameIndex) => format!("{}_{}", resource.name, key),
            (Some(key), LabelStyle::Index) => key.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(
        "Module path '{path}' has fewer than two segments; cannot derive an output file name"
    )]
    ModulePath { path: String },
}
