use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info, warn, LevelFilter};
use simple_logger::SimpleLogger;

use skyisle::{
    config::{self, EngineConfig},
    player::interaction,
    Block, LookDelta, MaterialKind, PlayerBody, PlayerInput, World,
};

/// Held keys for a given simulation step of the demo run.
fn scripted_input(step: u32) -> PlayerInput {
    match step {
        0..=29 => PlayerInput::default(),
        30..=89 => PlayerInput {
            forward: true,
            sneak: true,
            ..Default::default()
        },
        90..=94 => PlayerInput {
            jump: true,
            ..Default::default()
        },
        _ => PlayerInput {
            backward: true,
            sprint: true,
            ..Default::default()
        },
    }
}

fn load_config() -> Result<EngineConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => config::load_or_create_config(),
    }
}

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Trace).init()?;
    log::set_max_level(LevelFilter::Info);

    let config = load_config()?;
    log::set_max_level(config.level_filter());
    info!("Initializing world...");

    let mut world = World::new();
    let meshes = world.generate_all_meshes();
    let vertices: usize = meshes.iter().map(|(_, mesh)| mesh.vertex_count()).sum();
    info!(
        "Meshed {} chunks ({} vertices)",
        meshes.len(),
        vertices
    );

    let mut body = PlayerBody::new(config.gameplay.clone());
    let mut footsteps = 0;
    for step in 0..config.simulation_steps {
        let input = scripted_input(step);
        let was_grounded = body.is_grounded;
        body.update(&world, &input, LookDelta::ZERO, config.time_step);

        if !body.is_grounded {
            continue;
        }
        let surface = body.block_underfoot(&world);
        if !was_grounded {
            debug!(
                "step {}: landed on {} (step_{})",
                step,
                surface.kind,
                surface.sound_material().as_str()
            );
        } else if input.is_moving() && !surface.is_air() {
            footsteps += 1;
        }
    }
    debug!("{} footstep frames", footsteps);
    info!(
        "Body at {:?}, grounded: {}, sneaking: {}",
        body.position, body.is_grounded, body.is_sneaking
    );

    body.pitch = -89.0;
    let hit = interaction::target_block(&world, &body);
    match interaction::break_block(&mut world, &hit) {
        Some(broken) => info!(
            "Broke {} at {:?} (dig_{})",
            broken.kind,
            hit.block,
            broken.sound_material().as_str()
        ),
        None => warn!("Nothing in reach to break"),
    }

    let hit = world.raycast(
        body.eye_position(),
        body.look_direction(),
        body.config().reach,
    );
    match interaction::place_block(&mut world, &body, &hit, Block::new(MaterialKind::WoolRed)) {
        Ok(cell) => info!("Placed wool at {:?}", cell),
        Err(e) => warn!("Placement rejected: {}", e),
    }

    for (coord, mesh) in world.regenerate_dirty_meshes() {
        info!(
            "Remeshed chunk {} ({} faces, {} bytes)",
            coord,
            mesh.face_count(),
            mesh.as_bytes().len()
        );
    }

    Ok(())
}
