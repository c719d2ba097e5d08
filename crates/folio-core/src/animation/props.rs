use serde::{Deserialize, Serialize};

/// Animatable visual property of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    ScaleX,
    Rotation,
    /// Fraction of the element revealed from the left (clip-path wipe)
    Reveal,
}

/// Current paint state of an element, read by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualProps {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub scale_x: f64,
    /// Degrees
    pub rotation: f64,
    pub reveal: f64,
}

impl Default for VisualProps {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            scale_x: 1.0,
            rotation: 0.0,
            reveal: 1.0,
        }
    }
}

impl VisualProps {
    pub fn get(&self, property: Property) -> f64 {
        match property {
            Property::Opacity => self.opacity,
            Property::TranslateX => self.translate_x,
            Property::TranslateY => self.translate_y,
            Property::Scale => self.scale,
            Property::ScaleX => self.scale_x,
            Property::Rotation => self.rotation,
            Property::Reveal => self.reveal,
        }
    }

    pub fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::Opacity => &mut self.opacity,
            Property::TranslateX => &mut self.translate_x,
            Property::TranslateY => &mut self.translate_y,
            Property::Scale => &mut self.scale,
            Property::ScaleX => &mut self.scale_x,
            Property::Rotation => &mut self.rotation,
            Property::Reveal => &mut self.reveal,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_identity() {
        let props = VisualProps::default();
        assert_eq!(props.get(Property::Opacity), 1.0);
        assert_eq!(props.get(Property::Scale), 1.0);
        assert_eq!(props.get(Property::TranslateY), 0.0);
        assert_eq!(props.get(Property::Reveal), 1.0);
    }

    #[test]
    fn test_set_then_get() {
        let mut props = VisualProps::default();
        props.set(Property::Rotation, 45.0);
        props.set(Property::TranslateX, -12.5);
        assert_eq!(props.rotation, 45.0);
        assert_eq!(props.get(Property::TranslateX), -12.5);
    }
}
