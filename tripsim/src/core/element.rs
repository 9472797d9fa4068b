use serde::Deserialize;

/// * `distance` - (m) Distance of the element from the start of the route
/// * `size` - (px) Drawn size of the element (height and width)
/// * `sprite_src` - Source of the sprite image used to draw the element
/// * `horizontal_position` - Lateral offset relative to the road center (-1.0 far left, 0.0
/// center, 1.0 far right)
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ElementPars {
    pub distance: f64,
    pub size: f64,
    pub sprite_src: String,
    #[serde(default)]
    pub horizontal_position: f64,
}

impl ElementPars {
    /// The method splits the parameters into the physical element used by the simulation and the
    /// presentation record used for drawing, both linked by the inserted id.
    pub fn split(&self, id: usize) -> (Element, ElementSprite) {
        (
            Element::new(id, self.distance, self.horizontal_position),
            ElementSprite {
                id,
                size: self.size,
                sprite_src: self.sprite_src.to_owned(),
            },
        )
    }
}

/// Element is an immutable roadside marker at a fixed position along the route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Element {
    id: usize,
    distance: f64,
    horizontal_position: f64,
}

impl Element {
    /// The method creates an element. Its distance must be finite to be placed along the route,
    /// which is checked when the element is added to a trip.
    pub fn new(id: usize, distance: f64, horizontal_position: f64) -> Element {
        Element {
            id,
            distance,
            horizontal_position,
        }
    }

    pub fn get_id(&self) -> usize {
        self.id
    }

    pub fn get_distance(&self) -> f64 {
        self.distance
    }

    pub fn get_horizontal_position(&self) -> f64 {
        self.horizontal_position
    }
}

/// ElementSprite holds the visual properties of the element with the same id.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSprite {
    pub id: usize,
    pub size: f64,
    pub sprite_src: String,
}
