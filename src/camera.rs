//! Camera for the lander view.
//!
//! [`CameraRig`] holds the view in world units (centre and zoom, where zoom
//! is screen pixels per world unit) and knows nothing about Bevy; the
//! plugin copies it onto the 2D camera every frame.

use bevy::prelude::*;

use crate::app::SimulationSet;
use crate::body::Body;
use crate::config::CameraConfig;
use crate::input::{Control, ControlInput, KeyBindings, KeyboardControls};
use crate::math::Vector;
use crate::session::Session;
use crate::types::BodyId;

/// Fraction of the viewport used when framing bodies.
const AUTO_ZOOM_MARGIN: f64 = 0.8;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// View state: centre, zoom and the body being followed.
#[derive(Resource, Clone, Debug)]
pub struct CameraRig {
    /// World point at the centre of the screen.
    pub position: Vector,
    zoom: f64,
    target: Option<BodyId>,
    config: CameraConfig,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: Vector::ZERO,
            zoom: config.initial_zoom.clamp(config.min_zoom, config.max_zoom),
            target: None,
            config,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.config.zoom_step);
    }

    pub fn target(&self) -> Option<BodyId> {
        self.target
    }

    /// Start following `target`, restoring the initial zoom.
    pub fn follow(&mut self, target: BodyId) {
        self.target = Some(target);
        self.set_zoom(self.config.initial_zoom);
    }

    /// Move a fixed fraction of the way toward `target_position`.
    pub fn track(&mut self, target_position: Vector) {
        self.position += (target_position - self.position) * self.config.smoothing;
    }

    /// Screen pixel (origin top-left, y down) of a world point.
    pub fn world_to_screen(&self, world: Vector, viewport: Vector) -> Vector {
        let relative = (world - self.position) * self.zoom;
        Vector::new(viewport.x / 2.0 + relative.x, viewport.y / 2.0 - relative.y)
    }

    /// World point under a screen pixel (origin top-left, y down).
    pub fn screen_to_world(&self, screen: Vector, viewport: Vector) -> Vector {
        let relative = Vector::new(screen.x - viewport.x / 2.0, viewport.y / 2.0 - screen.y);
        self.position + relative / self.zoom
    }

    /// Pick the zoom that fits every body (with its radius) into 80 % of
    /// the viewport. Leaves the centre alone; does nothing for no bodies.
    pub fn auto_zoom<'a>(&mut self, bodies: impl IntoIterator<Item = &'a Body>, viewport: Vector) {
        let mut bounds: Option<(Vector, Vector)> = None;
        for body in bodies {
            let extent = Vector::splat(body.radius());
            let (lo, hi) = (body.position - extent, body.position + extent);
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(lo), max.max(hi)),
                None => (lo, hi),
            });
        }
        let Some((min, max)) = bounds else {
            return;
        };

        let size = max - min;
        let fit = (viewport.x / size.x).min(viewport.y / size.y);
        self.set_zoom(fit * AUTO_ZOOM_MARGIN);
    }
}

/// Plugin providing the follow camera and zoom controls.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<CameraConfig>()
            .cloned()
            .unwrap_or_default();
        app.insert_resource(CameraRig::new(config))
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_zoom, camera_follow, sync_camera)
                    .chain()
                    .after(SimulationSet),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Zoom while the zoom controls are held.
fn camera_zoom(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut rig: ResMut<CameraRig>,
) {
    let controls = KeyboardControls::new(&keys, &bindings);
    if controls.is_held(Control::ZoomIn) {
        rig.zoom_in();
    }
    if controls.is_held(Control::ZoomOut) {
        rig.zoom_out();
    }
}

/// Follow the session's ship; re-target after a (re)start.
fn camera_follow(session: Res<Session>, mut rig: ResMut<CameraRig>) {
    let Some(ship) = session.ship_id() else {
        return;
    };
    if rig.target() != Some(ship) {
        rig.follow(ship);
    }
    if let Some(body) = session.world().get(ship) {
        rig.track(body.position);
    }
}

/// Copy the rig onto the Bevy camera.
fn sync_camera(
    rig: Res<CameraRig>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<MainCamera>>,
) {
    let Ok((mut transform, mut projection)) = camera_query.single_mut() else {
        return;
    };

    transform.translation.x = rig.position.x as f32;
    transform.translation.y = rig.position.y as f32;
    if let Projection::Orthographic(ortho) = &mut *projection {
        ortho.scale = (1.0 / rig.zoom()) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_zoom_is_clamped() {
        let mut rig = CameraRig::default();
        assert_eq!(rig.zoom(), 0.5);
        rig.set_zoom(100.0);
        assert_eq!(rig.zoom(), 5.0);
        rig.set_zoom(0.0);
        assert_eq!(rig.zoom(), 0.05);
        rig.zoom_out();
        assert_eq!(rig.zoom(), 0.05);
        rig.zoom_in();
        assert_relative_eq!(rig.zoom(), 0.06);
    }

    #[test]
    fn test_track_moves_a_tenth_of_the_way() {
        let mut rig = CameraRig::default();
        rig.track(Vector::new(100.0, -50.0));
        assert_relative_eq!(rig.position.x, 10.0);
        assert_relative_eq!(rig.position.y, -5.0);
    }

    #[test]
    fn test_follow_restores_initial_zoom() {
        let mut rig = CameraRig::default();
        rig.set_zoom(3.0);
        rig.follow(BodyId(4));
        assert_eq!(rig.target(), Some(BodyId(4)));
        assert_eq!(rig.zoom(), 0.5);
    }

    #[test]
    fn test_screen_mapping() {
        let mut rig = CameraRig::default();
        rig.position = Vector::new(10.0, 20.0);
        rig.set_zoom(2.0);
        let viewport = Vector::new(800.0, 600.0);

        assert_eq!(rig.world_to_screen(rig.position, viewport), Vector::new(400.0, 300.0));
        // y up in the world is up on screen
        let above = rig.world_to_screen(Vector::new(10.0, 30.0), viewport);
        assert_eq!(above, Vector::new(400.0, 280.0));

        let world = Vector::new(-3.5, 41.25);
        let back = rig.screen_to_world(rig.world_to_screen(world, viewport), viewport);
        assert_relative_eq!(back.x, world.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-9);
    }

    #[test]
    fn test_auto_zoom_frames_bodies() {
        let a = Body::new(BodyConfig::named("a").radius(10.0).position(Vector::new(-90.0, 0.0))).unwrap();
        let b = Body::new(BodyConfig::named("b").radius(10.0).position(Vector::new(90.0, 0.0))).unwrap();
        let mut rig = CameraRig::default();

        // 200 x 20 world units into 800 x 600 pixels: width limits at 4
        rig.auto_zoom([&a, &b], Vector::new(800.0, 600.0));
        assert_relative_eq!(rig.zoom(), 3.2);

        rig.auto_zoom(std::iter::empty(), Vector::new(800.0, 600.0));
        assert_relative_eq!(rig.zoom(), 3.2);
    }
}
