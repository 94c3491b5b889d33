use glam::Vec3;

/// One explicit Euler step under gravity. Returns (position, velocity).
pub fn integrate_ball(position: Vec3, velocity: Vec3, dt: f32, gravity: f32) -> (Vec3, Vec3) {
    let velocity = velocity - Vec3::Y * gravity * dt;
    (position + velocity * dt, velocity)
}
