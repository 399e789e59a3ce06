use glam::Vec2;
use site_core::starfield::StarField;

#[test]
fn density_scales_with_area() {
    let field = StarField::new(1920.0, 1080.0, 7);
    assert_eq!(field.len(), (1920 * 1080) / 3000);
    let small = StarField::new(320.0, 240.0, 7);
    assert!(small.len() < field.len());
}

#[test]
fn same_seed_reproduces_the_field() {
    let a = StarField::new(800.0, 600.0, 42);
    let b = StarField::new(800.0, 600.0, 42);
    let (mut ia, mut ib) = (Vec::new(), Vec::new());
    a.fill_instances(1.5, Vec2::ZERO, &mut ia);
    b.fill_instances(1.5, Vec2::ZERO, &mut ib);
    assert_eq!(ia.len(), ib.len());
    for (x, y) in ia.iter().zip(&ib) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.size, y.size);
        assert_eq!(x.brightness, y.brightness);
    }
}

#[test]
fn brightness_stays_in_unit_range() {
    let mut field = StarField::new(800.0, 600.0, 3);
    let mut out = Vec::new();
    for frame in 0..240 {
        field.step(1.0 / 60.0);
        field.fill_instances(frame as f32 / 60.0, Vec2::new(0.8, -0.4), &mut out);
        for star in &out {
            assert!((0.0..=1.0).contains(&star.brightness));
            assert!(star.size > 0.0);
        }
    }
}

#[test]
fn mouse_parallax_shifts_stars_consistently() {
    let field = StarField::new(800.0, 600.0, 9);
    let (mut centered, mut shifted) = (Vec::new(), Vec::new());
    field.fill_instances(0.0, Vec2::ZERO, &mut centered);
    field.fill_instances(0.0, Vec2::new(1.0, 0.0), &mut shifted);
    for (c, s) in centered.iter().zip(&shifted) {
        let dx = s.pos[0] - c.pos[0];
        // factor 0.1..0.6 times 8 px
        assert!(dx > 0.0 && dx <= 8.0 * 0.6 + 1e-3, "dx = {dx}");
        assert_eq!(s.pos[1], c.pos[1]);
    }
}

#[test]
fn resize_regenerates_to_the_new_density() {
    let mut field = StarField::new(800.0, 600.0, 1);
    field.resize(1600.0, 600.0);
    assert_eq!(field.len(), (1600 * 600) / 3000);
    // No-op resize keeps the field
    let before = field.len();
    field.resize(1600.0, 600.0);
    assert_eq!(field.len(), before);
}
