//! Domain models for scene generation.
//!
//! This module contains the data structures that describe a generated world:
//!
//! - [`SceneConfig`] - Complete scene: background, lights, objects, camera
//! - [`SceneLight`] - A single light source
//! - [`SceneObject`] - A single primitive placed in the scene
//! - [`LightKind`] / [`ObjectKind`] / [`Environment`] - Closed vocabularies
//!
//! The JSON field names match the wire format consumed by the WebGL renderer.

use serde::{Deserialize, Serialize};

// =============================================================================
// Light
// =============================================================================

/// Kind of light source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    /// Uniform scene-wide illumination.
    Ambient,
    /// Parallel rays from a direction (sun-like).
    Directional,
    /// Omnidirectional emitter at a position.
    Point,
}

/// A single light source in the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneLight {
    /// Light kind.
    #[serde(rename = "type", default = "default_light_kind")]
    pub kind: LightKind,
    /// Intensity multiplier.
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    /// World position, for directional/point lights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec<f32>>,
    /// Hex color.
    #[serde(default = "default_white")]
    pub color: String,
}

impl Default for SceneLight {
    fn default() -> Self {
        Self {
            kind: LightKind::Ambient,
            intensity: 0.8,
            position: None,
            color: "#ffffff".to_string(),
        }
    }
}

impl SceneLight {
    /// Ambient light with the given intensity.
    pub fn ambient(intensity: f32) -> Self {
        Self {
            intensity,
            ..Self::default()
        }
    }

    /// Directional light at a position.
    pub fn directional(intensity: f32, position: [f32; 3]) -> Self {
        Self {
            kind: LightKind::Directional,
            intensity,
            position: Some(position.to_vec()),
            color: "#ffffff".to_string(),
        }
    }

    /// Point light at a position.
    pub fn point(intensity: f32, position: [f32; 3]) -> Self {
        Self {
            kind: LightKind::Point,
            intensity,
            position: Some(position.to_vec()),
            color: "#ffffff".to_string(),
        }
    }

    /// Replace the light color.
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }
}

fn default_light_kind() -> LightKind {
    LightKind::Ambient
}

fn default_intensity() -> f32 {
    0.8
}

fn default_white() -> String {
    "#ffffff".to_string()
}

// =============================================================================
// Object
// =============================================================================

/// Kind of primitive placed in the scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Cube,
    Sphere,
    Torus,
    Cone,
    Cylinder,
    Tree,
    Lego,
}

/// A single object placed in the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneObject {
    /// Primitive kind.
    pub kind: ObjectKind,
    /// World position `[x, y, z]`.
    #[serde(default = "default_zero3")]
    pub position: Vec<f32>,
    /// Euler rotation `[x, y, z]` in radians.
    #[serde(default = "default_zero3")]
    pub rotation: Vec<f32>,
    /// Scale `[x, y, z]`.
    #[serde(default = "default_one3")]
    pub scale: Vec<f32>,
    /// Hex color.
    #[serde(default = "default_object_color")]
    pub color: String,
    /// PBR metalness, 0..1.
    #[serde(default = "default_metalness")]
    pub metalness: f32,
    /// PBR roughness, 0..1.
    #[serde(default = "default_roughness")]
    pub roughness: f32,
    /// Optional emissive hex color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive: Option<String>,
}

impl SceneObject {
    /// Object of the given kind with all defaults.
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            position: default_zero3(),
            rotation: default_zero3(),
            scale: default_one3(),
            color: default_object_color(),
            metalness: 0.2,
            roughness: 0.6,
            emissive: None,
        }
    }

    pub fn at(mut self, position: [f32; 3]) -> Self {
        self.position = position.to_vec();
        self
    }

    pub fn rotated(mut self, rotation: [f32; 3]) -> Self {
        self.rotation = rotation.to_vec();
        self
    }

    pub fn scaled(mut self, scale: [f32; 3]) -> Self {
        self.scale = scale.to_vec();
        self
    }

    pub fn colored(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn with_material(mut self, metalness: f32, roughness: f32) -> Self {
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }
}

fn default_zero3() -> Vec<f32> {
    vec![0.0, 0.0, 0.0]
}

fn default_one3() -> Vec<f32> {
    vec![1.0, 1.0, 1.0]
}

fn default_object_color() -> String {
    "#4F46E5".to_string()
}

fn default_metalness() -> f32 {
    0.2
}

fn default_roughness() -> f32 {
    0.6
}

// =============================================================================
// Environment
// =============================================================================

/// Environment preset used as the scene's skybox/ambiance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Sunset,
    Dawn,
    Night,
    Studio,
    City,
    Forest,
    Apartment,
    Warehouse,
    Park,
    Lobby,
    None,
}

// =============================================================================
// Scene
// =============================================================================

/// Complete scene configuration sent to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneConfig {
    /// Display title for the generated verse.
    #[serde(default = "default_title")]
    pub title: String,
    /// Background color (hex or keyword).
    #[serde(default = "default_background")]
    pub background: String,
    /// Optional skybox gradient stops (2-4 hex colors).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Vec<String>>,
    /// Light sources.
    #[serde(default = "default_lights")]
    pub lights: Vec<SceneLight>,
    /// Placed objects.
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    /// Environment preset.
    #[serde(default = "default_environment", skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    /// Camera position `[x, y, z]`.
    #[serde(default = "default_camera")]
    pub camera: Vec<f32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            background: default_background(),
            gradient: None,
            lights: default_lights(),
            objects: Vec::new(),
            environment: default_environment(),
            camera: default_camera(),
        }
    }
}

fn default_title() -> String {
    "Custom Verse".to_string()
}

fn default_background() -> String {
    "#0b1f2a".to_string()
}

fn default_lights() -> Vec<SceneLight> {
    vec![SceneLight::default()]
}

fn default_environment() -> Option<Environment> {
    Some(Environment::Night)
}

fn default_camera() -> Vec<f32> {
    vec![6.0, 4.0, 8.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_light_wire_format_uses_type_key() {
        let light = SceneLight::point(1.0, [3.0, 4.0, 3.0]).with_color("#8ecae6");
        let value = serde_json::to_value(&light).unwrap();

        assert_eq!(value["type"], "point");
        assert_eq!(value["intensity"], 1.0);
        assert_eq!(value["color"], "#8ecae6");
        assert_eq!(value["position"], json!([3.0, 4.0, 3.0]));
    }

    #[test]
    fn test_light_defaults_on_deserialize() {
        // Renderer accepts a bare object; every field has a default
        let light: SceneLight = serde_json::from_str("{}").unwrap();
        assert_eq!(light.kind, LightKind::Ambient);
        assert_eq!(light.intensity, 0.8);
        assert_eq!(light.color, "#ffffff");
        assert!(light.position.is_none());
    }

    #[test]
    fn test_object_defaults_on_deserialize() {
        let object: SceneObject = serde_json::from_str(r#"{"kind": "torus"}"#).unwrap();
        assert_eq!(object.kind, ObjectKind::Torus);
        assert_eq!(object.position, vec![0.0, 0.0, 0.0]);
        assert_eq!(object.scale, vec![1.0, 1.0, 1.0]);
        assert_eq!(object.color, "#4F46E5");
        assert_eq!(object.metalness, 0.2);
        assert_eq!(object.roughness, 0.6);
    }

    #[test]
    fn test_scene_defaults() {
        let scene = SceneConfig::default();
        assert_eq!(scene.title, "Custom Verse");
        assert_eq!(scene.background, "#0b1f2a");
        assert_eq!(scene.environment, Some(Environment::Night));
        assert_eq!(scene.camera, vec![6.0, 4.0, 8.0]);
        assert_eq!(scene.lights.len(), 1);
        assert!(scene.objects.is_empty());
    }

    #[test]
    fn test_environment_lowercase_wire_values() {
        assert_eq!(
            serde_json::to_value(Environment::Sunset).unwrap(),
            json!("sunset")
        );
        assert_eq!(
            serde_json::from_value::<Environment>(json!("none")).unwrap(),
            Environment::None
        );
    }

    #[test]
    fn test_scene_roundtrip_keeps_gradient() {
        let scene = SceneConfig {
            gradient: Some(vec!["#0c2330".into(), "#127369".into()]),
            ..SceneConfig::default()
        };
        let json = serde_json::to_string(&scene).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gradient, scene.gradient);
    }
}
