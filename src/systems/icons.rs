use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;

use crate::game::Choice;
use crate::resources::ShapeAssets;

const PAPER_OUTLINE: f32 = 3.0;
const PAPER_CORNER: f32 = 10.0;
const SCISSOR_BLADE: f32 = 6.0;
const SCISSOR_HANDLE: f32 = 12.0;

/// Filled circle centred on `offset` (parent space, y up).
pub fn spawn_disc(
    parent: &mut ChildSpawnerCommands,
    shapes: &ShapeAssets,
    material: &Handle<ColorMaterial>,
    offset: Vec3,
    radius: f32,
) {
    parent.spawn((
        Mesh2d(shapes.unit_circle.clone()),
        MeshMaterial2d(material.clone()),
        Transform::from_translation(offset).with_scale(Vec3::new(radius, radius, 1.0)),
    ));
}

fn spawn_bar(
    parent: &mut ChildSpawnerCommands,
    shapes: &ShapeAssets,
    material: &Handle<ColorMaterial>,
    offset: Vec3,
    size: Vec2,
    angle: f32,
) {
    parent.spawn((
        Mesh2d(shapes.unit_square.clone()),
        MeshMaterial2d(material.clone()),
        Transform::from_translation(offset)
            .with_rotation(Quat::from_rotation_z(angle))
            .with_scale(size.extend(1.0)),
    ));
}

/// A rounded rectangle split into a horizontal bar, a vertical bar and four
/// corner discs, all relative to the rectangle's centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectPieces {
    pub wide: Vec2,
    pub tall: Vec2,
    pub corners: [Vec2; 4],
    pub radius: f32,
}

pub fn rounded_rect_pieces(size: Vec2, radius: f32) -> RoundedRectPieces {
    let radius = radius.clamp(0.0, size.min_element() / 2.0);
    let inner = size / 2.0 - Vec2::splat(radius);
    RoundedRectPieces {
        wide: Vec2::new(size.x, size.y - 2.0 * radius),
        tall: Vec2::new(size.x - 2.0 * radius, size.y),
        corners: [
            Vec2::new(-inner.x, inner.y),
            Vec2::new(inner.x, inner.y),
            Vec2::new(-inner.x, -inner.y),
            Vec2::new(inner.x, -inner.y),
        ],
        radius,
    }
}

fn spawn_rounded_rect(
    parent: &mut ChildSpawnerCommands,
    shapes: &ShapeAssets,
    material: &Handle<ColorMaterial>,
    offset: Vec3,
    size: Vec2,
    radius: f32,
) {
    let pieces = rounded_rect_pieces(size, radius);
    spawn_bar(parent, shapes, material, offset, pieces.wide, 0.0);
    spawn_bar(parent, shapes, material, offset, pieces.tall, 0.0);
    if pieces.radius > 0.0 {
        for corner in pieces.corners {
            spawn_disc(parent, shapes, material, offset + corner.extend(0.0), pieces.radius);
        }
    }
}

/// Spawn the shapes for `choice` as children of `parent`, layered upwards
/// from `z`.
pub fn spawn_icon(
    parent: &mut ChildSpawnerCommands,
    shapes: &ShapeAssets,
    choice: Choice,
    scale: f32,
    z: f32,
) {
    match choice {
        Choice::Rock => {
            spawn_disc(parent, shapes, &shapes.rock_outer, Vec3::new(0.0, 0.0, z), 50.0 * scale);
            spawn_disc(
                parent,
                shapes,
                &shapes.rock_inner,
                Vec3::new(0.0, 0.0, z + 0.01),
                50.0 * scale - 10.0,
            );
        }
        Choice::Paper => {
            let sheet = Vec2::new(100.0, 120.0) * scale;
            spawn_rounded_rect(
                parent,
                shapes,
                &shapes.ink,
                Vec3::new(0.0, 0.0, z),
                sheet + Vec2::splat(PAPER_OUTLINE * 2.0),
                PAPER_CORNER + PAPER_OUTLINE,
            );
            spawn_rounded_rect(
                parent,
                shapes,
                &shapes.white,
                Vec3::new(0.0, 0.0, z + 0.01),
                sheet,
                PAPER_CORNER,
            );
        }
        Choice::Scissors => {
            let reach = 45.0 * scale;
            let blade = Vec2::new(2.0 * reach * std::f32::consts::SQRT_2, SCISSOR_BLADE);
            spawn_bar(parent, shapes, &shapes.ink, Vec3::new(0.0, 0.0, z), blade, -FRAC_PI_4);
            spawn_bar(parent, shapes, &shapes.ink, Vec3::new(0.0, 0.0, z), blade, FRAC_PI_4);
            // Handles sit on the left ends of both blades.
            for y in [reach, -reach] {
                spawn_disc(
                    parent,
                    shapes,
                    &shapes.crimson,
                    Vec3::new(-reach, y, z + 0.01),
                    SCISSOR_HANDLE,
                );
            }
        }
    }
}
