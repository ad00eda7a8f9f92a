//! Rule-based scene themes.
//!
//! When no AI key is configured (or the AI path fails), the service falls
//! back to a small set of hand-tuned scenes keyed on words in the prompt.
//! The match is a case-insensitive substring check; first hit wins.

use crate::models::{Environment, ObjectKind, SceneConfig, SceneLight, SceneObject};

/// Build a scene from the prompt using keyword rules.
pub fn rule_based_scene(prompt: &str) -> SceneConfig {
    let p = prompt.to_lowercase();

    if p.contains("lego") {
        return lego_city();
    }
    if p.contains("ocean") || p.contains("sea") {
        return calm_ocean();
    }
    if p.contains("forest") || p.contains("tree") || p.contains("nature") {
        return cyber_forest();
    }

    neon_playground()
}

fn lego_city() -> SceneConfig {
    SceneConfig {
        title: "Lego City".to_string(),
        background: "#0c2330".to_string(),
        gradient: Some(vec![
            "#0c2330".to_string(),
            "#0b3b3b".to_string(),
            "#127369".to_string(),
        ]),
        environment: Some(Environment::Studio),
        lights: vec![
            SceneLight::ambient(0.8),
            SceneLight::directional(1.0, [5.0, 6.0, 5.0]),
        ],
        objects: vec![
            SceneObject::new(ObjectKind::Lego)
                .colored("#F7B500")
                .scaled([1.6, 0.6, 1.0])
                .at([0.0, 0.3, 0.0]),
            SceneObject::new(ObjectKind::Lego)
                .colored("#E63946")
                .scaled([1.0, 0.6, 1.0])
                .at([-2.0, 0.3, -1.0]),
            SceneObject::new(ObjectKind::Lego)
                .colored("#2A9D8F")
                .scaled([1.2, 0.6, 0.8])
                .at([2.0, 0.3, 1.0]),
        ],
        camera: vec![7.0, 4.0, 9.0],
    }
}

fn calm_ocean() -> SceneConfig {
    SceneConfig {
        title: "Calm Ocean".to_string(),
        background: "#04202b".to_string(),
        gradient: Some(vec![
            "#03131a".to_string(),
            "#073d4b".to_string(),
            "#0d8a8a".to_string(),
        ]),
        environment: Some(Environment::Dawn),
        lights: vec![
            SceneLight::ambient(0.7).with_color("#bde0fe"),
            SceneLight::directional(0.8, [-4.0, 6.0, 4.0]).with_color("#b9fbc0"),
        ],
        objects: vec![
            // Flattened sphere stands in for the water surface
            SceneObject::new(ObjectKind::Sphere)
                .colored("#5bc0eb")
                .scaled([2.4, 0.1, 2.4])
                .at([0.0, -0.5, 0.0])
                .with_material(0.1, 0.8),
            SceneObject::new(ObjectKind::Torus)
                .colored("#90e0ef")
                .scaled([0.8, 0.8, 0.8])
                .at([-1.0, 0.2, 0.0])
                .rotated([1.2, 0.0, 0.0]),
            SceneObject::new(ObjectKind::Torus)
                .colored("#caf0f8")
                .scaled([0.6, 0.6, 0.6])
                .at([1.0, 0.2, 1.0])
                .rotated([1.2, 0.0, 0.0]),
        ],
        camera: vec![6.0, 4.0, 8.0],
    }
}

fn cyber_forest() -> SceneConfig {
    SceneConfig {
        title: "Cyber Forest".to_string(),
        background: "#081a14".to_string(),
        gradient: Some(vec![
            "#081a14".to_string(),
            "#0a3d2e".to_string(),
            "#0fbf8f".to_string(),
        ]),
        environment: Some(Environment::Forest),
        lights: vec![
            SceneLight::ambient(0.8).with_color("#d4f8e8"),
            SceneLight::point(0.9, [0.0, 3.0, 0.0]).with_color("#00ffd0"),
        ],
        objects: vec![
            SceneObject::new(ObjectKind::Cone)
                .colored("#1dd3b0")
                .scaled([1.4, 2.2, 1.4])
                .at([-1.0, 0.2, -0.5]),
            SceneObject::new(ObjectKind::Cone)
                .colored("#12b886")
                .scaled([1.2, 1.8, 1.2])
                .at([1.2, 0.2, 0.8]),
            SceneObject::new(ObjectKind::Cylinder)
                .colored("#8d5524")
                .scaled([0.3, 1.0, 0.3])
                .at([-1.0, 0.5, -0.5]),
            SceneObject::new(ObjectKind::Cylinder)
                .colored("#8d5524")
                .scaled([0.3, 0.8, 0.3])
                .at([1.2, 0.4, 0.8]),
        ],
        camera: vec![6.0, 4.0, 8.0],
    }
}

/// Default scene when no keyword matches.
pub fn neon_playground() -> SceneConfig {
    SceneConfig {
        title: "Neon Playground".to_string(),
        background: "#0c1620".to_string(),
        gradient: Some(vec![
            "#0c1620".to_string(),
            "#11293f".to_string(),
            "#0fa3b1".to_string(),
        ]),
        environment: Some(Environment::Night),
        lights: vec![
            SceneLight::ambient(0.8),
            SceneLight::point(1.0, [3.0, 4.0, 3.0]).with_color("#8ecae6"),
        ],
        objects: vec![
            SceneObject::new(ObjectKind::Cube)
                .colored("#ffb703")
                .scaled([1.2, 1.2, 1.2])
                .at([-1.0, 0.8, 0.0]),
            SceneObject::new(ObjectKind::Sphere)
                .colored("#fb8500")
                .scaled([0.9, 0.9, 0.9])
                .at([1.0, 0.9, 0.0]),
            SceneObject::new(ObjectKind::Torus)
                .colored("#9b5de5")
                .scaled([0.8, 0.8, 0.8])
                .at([0.0, 0.3, 1.3]),
        ],
        camera: vec![7.0, 4.0, 9.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LightKind;

    #[test]
    fn test_lego_keyword_picks_lego_city() {
        let scene = rule_based_scene("a giant LEGO metropolis");
        assert_eq!(scene.title, "Lego City");
        assert_eq!(scene.environment, Some(Environment::Studio));
        assert_eq!(scene.objects.len(), 3);
        assert!(scene.objects.iter().all(|o| o.kind == ObjectKind::Lego));
    }

    #[test]
    fn test_ocean_and_sea_keywords() {
        for prompt in ["deep ocean trench", "by the sea at dusk"] {
            let scene = rule_based_scene(prompt);
            assert_eq!(scene.title, "Calm Ocean");
            assert_eq!(scene.environment, Some(Environment::Dawn));
        }
    }

    #[test]
    fn test_forest_keywords() {
        for prompt in ["enchanted forest", "a single tree", "nature walk"] {
            let scene = rule_based_scene(prompt);
            assert_eq!(scene.title, "Cyber Forest");
        }
        let scene = rule_based_scene("Forest of neon");
        assert_eq!(scene.lights[1].kind, LightKind::Point);
    }

    #[test]
    fn test_unmatched_prompt_falls_back_to_playground() {
        let scene = rule_based_scene("Narnia");
        assert_eq!(scene.title, "Neon Playground");
        assert_eq!(scene.camera, vec![7.0, 4.0, 9.0]);
        assert_eq!(scene.objects.len(), 3);
    }

    #[test]
    fn test_first_keyword_wins() {
        // "lego" is checked before "sea"
        let scene = rule_based_scene("lego under the sea");
        assert_eq!(scene.title, "Lego City");
    }

    #[test]
    fn test_scenes_validate_against_schema() {
        for prompt in ["lego", "ocean", "forest", "anything else"] {
            let scene = rule_based_scene(prompt);
            let value = serde_json::to_value(&scene).unwrap();
            assert!(
                crate::validation::validate_scene(&value).is_ok(),
                "scene for '{}' failed schema",
                prompt
            );
        }
    }
}
