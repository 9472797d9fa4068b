use serde::Deserialize;
use std::fmt;

/// RoadSurface is the terrain category underneath the vehicle. Unknown surface names fall back to
/// Road when parsed from parameter files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RoadSurface {
    Road,
    Grass,
}

impl Default for RoadSurface {
    fn default() -> Self {
        RoadSurface::Road
    }
}

impl From<&str> for RoadSurface {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "grass" => RoadSurface::Grass,
            _ => RoadSurface::Road,
        }
    }
}

impl From<String> for RoadSurface {
    fn from(name: String) -> Self {
        RoadSurface::from(name.as_str())
    }
}

impl fmt::Display for RoadSurface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RoadSurface::Road => write!(f, "road"),
            RoadSurface::Grass => write!(f, "grass"),
        }
    }
}

/// * `drag_multiplier` - Factor applied to the base drag of a vehicle on this surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceEffect {
    pub drag_multiplier: f64,
}

/// get_surface_effect returns the effect a surface has on the vehicle.
pub fn get_surface_effect(surface: RoadSurface) -> SurfaceEffect {
    match surface {
        RoadSurface::Grass => SurfaceEffect {
            drag_multiplier: 2.0,
        },
        RoadSurface::Road => SurfaceEffect {
            drag_multiplier: 1.0,
        },
    }
}
