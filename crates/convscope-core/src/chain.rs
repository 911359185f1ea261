//! The editable layer chain.

use glam::Vec3;

use crate::error::{ConvscopeError, Result};
use crate::layer::LayerTemplate;
use crate::params::{Axis, Param};

/// An ordered chain of layer templates with the editing operations the
/// panel collaborator exposes.
///
/// The chain is created once at startup and mutated only through these
/// operations. Index 0 is the input layer: it never carries convolution
/// parameters and cannot be removed. Every mutation is validated before it
/// is committed, so a chain in hand always resolves without configuration
/// errors.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerChain {
    templates: Vec<LayerTemplate>,
}

impl LayerChain {
    /// Creates a chain containing only the given input layer.
    ///
    /// The input layer never carries convolution parameters; any present on
    /// the supplied template are discarded.
    #[must_use]
    pub fn new(input: LayerTemplate) -> Self {
        let input = LayerTemplate { conv: None, ..input };
        Self {
            templates: vec![input],
        }
    }

    /// Appends a convolution layer at the end of the chain.
    ///
    /// The template must carry valid convolution parameters.
    pub fn append(&mut self, template: LayerTemplate) -> Result<()> {
        let layer = self.templates.len();
        let Some(params) = template.conv else {
            return Err(ConvscopeError::InvalidConfiguration {
                layer,
                detail: "appended layers must carry convolution parameters".into(),
            });
        };
        params
            .validate()
            .map_err(|detail| ConvscopeError::InvalidConfiguration { layer, detail })?;
        self.templates.push(template);
        Ok(())
    }

    /// Removes the layer at `index`.
    ///
    /// The input layer (index 0) is immutable.
    pub fn remove(&mut self, index: usize) -> Result<LayerTemplate> {
        if index == 0 {
            return Err(ConvscopeError::InputLayerImmutable);
        }
        if index >= self.templates.len() {
            return Err(ConvscopeError::LayerNotFound(index));
        }
        Ok(self.templates.remove(index))
    }

    /// Renames the layer at `index`.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let template = self
            .templates
            .get_mut(index)
            .ok_or(ConvscopeError::LayerNotFound(index))?;
        template.name = name.into();
        Ok(())
    }

    /// Sets the display color of the layer at `index`.
    pub fn set_color(&mut self, index: usize, color: Vec3) -> Result<()> {
        let template = self
            .templates
            .get_mut(index)
            .ok_or(ConvscopeError::LayerNotFound(index))?;
        template.color = color;
        Ok(())
    }

    /// Changes one axis of one convolution parameter on the layer at
    /// `index`, validating the result before committing it.
    pub fn set_param_axis(
        &mut self,
        index: usize,
        param: Param,
        axis: Axis,
        value: i32,
    ) -> Result<()> {
        if index >= self.templates.len() {
            return Err(ConvscopeError::LayerNotFound(index));
        }
        let Some(current) = self.templates[index].conv else {
            return Err(ConvscopeError::InputLayerImmutable);
        };
        let updated = current.with_axis(param, axis, value);
        updated
            .validate()
            .map_err(|detail| ConvscopeError::InvalidConfiguration {
                layer: index,
                detail,
            })?;
        self.templates[index].conv = Some(updated);
        Ok(())
    }

    /// Returns the templates in logical order.
    #[must_use]
    pub fn templates(&self) -> &[LayerTemplate] {
        &self.templates
    }

    /// Returns the number of layers in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false: a chain holds at least the input layer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for LayerChain {
    fn default() -> Self {
        Self::new(LayerTemplate::input("input", Vec3::new(0.6, 0.6, 0.6)))
    }
}
