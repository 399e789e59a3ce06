use site_core::underwater::UnderwaterSim;

#[test]
fn population_matches_tuning() {
    let sim = UnderwaterSim::new(11);
    assert_eq!(sim.particle_count(), 200);
    assert_eq!(sim.bubble_count(), 80);
}

#[test]
fn particles_stay_inside_the_wrap_bounds() {
    let mut sim = UnderwaterSim::new(5);
    let mut out = Vec::new();
    for frame in 0..600 {
        sim.step(frame as f32 / 60.0, 1.0 / 60.0);
    }
    sim.fill_instances(&mut out);
    for sprite in out.iter().take(sim.particle_count()) {
        assert!(sprite.pos[0].abs() <= 1.5 + 1e-3);
        assert!(sprite.pos[1].abs() <= 1.5 + 1e-3);
    }
}

#[test]
fn bubbles_rise_and_respawn_below() {
    let mut sim = UnderwaterSim::new(8);
    let mut out = Vec::new();
    // Long enough for the fastest bubble (0.05/s from y >= -1.5) to cross
    // the 1.2 reset line several times
    for frame in 0..(400 * 60) {
        sim.step(frame as f32 / 60.0, 1.0 / 60.0);
        sim.fill_instances(&mut out);
        for bubble in out.iter().skip(sim.particle_count()) {
            assert!(bubble.pos[1] <= 1.2 + 0.05, "bubble escaped: {:?}", bubble.pos);
            assert!(bubble.pos[0].abs() <= 2.0 + 0.05);
        }
    }
}

#[test]
fn instances_list_particles_then_bubbles() {
    let sim = UnderwaterSim::new(2);
    let mut out = Vec::new();
    sim.fill_instances(&mut out);
    assert_eq!(out.len(), sim.particle_count() + sim.bubble_count());
    // Bubbles start submerged below the viewport
    for bubble in out.iter().skip(sim.particle_count()) {
        assert!(bubble.pos[1] <= -1.0 + 1e-3);
    }
}
