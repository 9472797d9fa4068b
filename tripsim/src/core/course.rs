use crate::core::element::{Element, ElementPars, ElementSprite};
use crate::core::road_surface::RoadSurface;
use serde::Deserialize;

/// * `start` - (m) Distance at which the section begins (it lasts until the next section starts)
/// * `surface` - Surface of the section, e.g. road or grass
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SurfaceSection {
    pub start: f64,
    pub surface: RoadSurface,
}

/// * `surface_sections` - Surface layout along the route (road is assumed in front of the first
/// section)
/// * `elements` - Roadside elements placed along the route
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CoursePars {
    #[serde(default)]
    pub surface_sections: Vec<SurfaceSection>,
    #[serde(default)]
    pub elements: Vec<ElementPars>,
}

/// Course is the static layout of a route: where the surface changes and which elements stand
/// next to it.
#[derive(Debug)]
pub struct Course {
    surface_sections: Vec<SurfaceSection>,
    elements: Vec<Element>,
    sprites: Vec<ElementSprite>,
}

impl Course {
    pub fn new(course_pars: &CoursePars) -> Course {
        let mut surface_sections = course_pars.surface_sections.to_owned();
        surface_sections.sort_by(|a, b| a.start.total_cmp(&b.start));

        let (elements, sprites) = course_pars
            .elements
            .iter()
            .enumerate()
            .map(|(id, element_pars)| element_pars.split(id))
            .unzip();

        Course {
            surface_sections,
            elements,
            sprites,
        }
    }

    /// surface_at returns the surface of the last section that starts at or before the inserted
    /// distance.
    pub fn surface_at(&self, distance: f64) -> RoadSurface {
        let no_started = self
            .surface_sections
            .partition_point(|section| section.start <= distance);

        if no_started == 0 {
            RoadSurface::Road
        } else {
            self.surface_sections[no_started - 1].surface
        }
    }

    pub fn get_elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get_sprite(&self, id: usize) -> Option<&ElementSprite> {
        self.sprites.get(id)
    }
}
