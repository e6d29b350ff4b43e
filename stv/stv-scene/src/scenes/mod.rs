//! Scene factories and the route registry.
//!
//! Every factory builds a [`SceneBlueprint`]: a context populated with the
//! scene's objects plus the interaction that constrains its handles.

pub mod christoffel;
pub mod curve;
pub mod line;
pub mod planet;
pub mod worldline;

use crate::config::ToolkitConfig;
use crate::runtime::SceneBlueprint;
use crate::SceneError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Worldline,
    Christoffel,
    Curve,
    Line,
    Planet,
}

impl SceneKind {
    pub const ALL: [SceneKind; 5] = [SceneKind::Worldline, SceneKind::Christoffel, SceneKind::Curve, SceneKind::Line, SceneKind::Planet];

    /// Scene for a page route; leading and trailing slashes are ignored.
    pub fn from_route(route: &str) -> Result<Self, SceneError> {
        match route.trim_matches('/') {
            "worldline" => Ok(SceneKind::Worldline),
            "christoffel" => Ok(SceneKind::Christoffel),
            "curve" => Ok(SceneKind::Curve),
            "line" => Ok(SceneKind::Line),
            "worldline/planet" => Ok(SceneKind::Planet),
            _ => Err(SceneError::UnknownRoute(route.to_string())),
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            SceneKind::Worldline => "/worldline",
            SceneKind::Christoffel => "/christoffel",
            SceneKind::Curve => "/curve",
            SceneKind::Line => "/line",
            SceneKind::Planet => "/worldline/planet",
        }
    }

    pub fn build(self, config: &ToolkitConfig) -> Result<SceneBlueprint, SceneError> {
        match self {
            SceneKind::Worldline => worldline::build(config),
            SceneKind::Christoffel => christoffel::build(config),
            SceneKind::Curve => curve::build(config),
            SceneKind::Line => line::build(config),
            SceneKind::Planet => planet::build(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip() {
        for kind in SceneKind::ALL {
            assert_eq!(SceneKind::from_route(kind.route()).unwrap(), kind);
        }
        assert_eq!(SceneKind::from_route("christoffel/").unwrap(), SceneKind::Christoffel);
        assert!(matches!(SceneKind::from_route("/three"), Err(SceneError::UnknownRoute(r)) if r == "/three"));
    }
}
